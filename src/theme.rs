//! Theme directory layout inside a project.

use std::path::{Path, PathBuf};

use crate::constants::{CSS_DIR, JS_DIR, TEMPLATES_DIR, THEMES_DIR};

/// Root directory of `theme` inside `project`.
pub fn dir<P: AsRef<Path>>(project: P, theme: &str) -> PathBuf {
    project.as_ref().join(THEMES_DIR).join(theme)
}

pub fn template_dir<P: AsRef<Path>>(project: P, theme: &str) -> PathBuf {
    dir(project, theme).join(TEMPLATES_DIR)
}

pub fn css_dir<P: AsRef<Path>>(project: P, theme: &str) -> PathBuf {
    dir(project, theme).join(CSS_DIR)
}

pub fn js_dir<P: AsRef<Path>>(project: P, theme: &str) -> PathBuf {
    dir(project, theme).join(JS_DIR)
}

/// Checks whether the theme directory is present in the project.
pub fn exists<P: AsRef<Path>>(project: P, theme: &str) -> bool {
    dir(project, theme).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_layout() {
        assert_eq!(dir("site", "blog"), PathBuf::from("site/themes/blog"));
        assert_eq!(
            template_dir("site", "blog"),
            PathBuf::from("site/themes/blog/templates")
        );
        assert_eq!(css_dir("site", "blog"), PathBuf::from("site/themes/blog/css"));
        assert_eq!(js_dir("site", "blog"), PathBuf::from("site/themes/blog/js"));
    }

    #[test]
    fn test_exists() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(!exists(temp_dir.path(), "blog"));

        std::fs::create_dir_all(dir(temp_dir.path(), "blog")).unwrap();
        assert!(exists(temp_dir.path(), "blog"));
    }
}
