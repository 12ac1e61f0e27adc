//! Creation of new projects and themes.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::{default_config, default_theme_config, CreateProjectOptions, CreateThemeOptions};
use crate::constants::{
    CONFIG_FILE, CONTENT_DIR, DEFAULT_CSS, DEFAULT_LIST_PAGE_TPL, DEFAULT_THEME, GITIGNORE_FILE,
    LIST_PAGE_TPL, OUTPUT_DIR, PAGE_TPL, STYLE_FILE, THEME_CONFIG_FILE,
};
use crate::error::{Error, Result};
use crate::provision::{clear_path, is_safe_to_remove, ProvisionSpec};
use crate::theme;

/// Creates a new project at `path`.
///
/// If the path already exists, `Error::AlreadyExists` is returned and nothing
/// is touched unless `options.overwrite` is set, in which case the existing
/// content is removed first. Running it again with overwrite after a failed
/// run cleans up whatever the failed run left behind.
///
/// # Layout
/// * `verless.yml` and `.gitignore`
/// * `content/`
/// * `themes/default/templates/{list-page.html,page.html}`
/// * `themes/default/css/style.css`
pub fn create_project<P: AsRef<Path>>(path: P, options: &CreateProjectOptions) -> Result<()> {
    let path = normalize(path.as_ref());

    if !is_safe_to_remove(&path, options.overwrite) {
        return Err(Error::AlreadyExists { path });
    }

    clear_path(&path)?;
    project_layout(&path)?.apply()?;

    debug!("Created project {}", path.display());
    Ok(())
}

/// Builds the directories and files of a fresh project.
pub fn project_layout(path: &Path) -> Result<ProvisionSpec> {
    let template_dir = theme::template_dir(path, DEFAULT_THEME);
    let css_dir = theme::css_dir(path, DEFAULT_THEME);

    Ok(ProvisionSpec::new()
        .dir(path)
        .dir(path.join(CONTENT_DIR))
        .dir(&template_dir)
        .dir(&css_dir)
        .file(path.join(CONFIG_FILE), default_config()?)
        .file(path.join(GITIGNORE_FILE), format!("{OUTPUT_DIR}\n"))
        .file(template_dir.join(LIST_PAGE_TPL), DEFAULT_LIST_PAGE_TPL)
        .file(template_dir.join(PAGE_TPL), Vec::<u8>::new())
        .file(css_dir.join(STYLE_FILE), DEFAULT_CSS))
}

/// Creates the theme `name` inside an existing project.
///
/// # Errors
/// * `Error::ProjectNotExists` if the project is missing
/// * `Error::ThemeExists` if the theme directory is already there
///
/// Both checks happen before anything is created.
pub fn create_theme(options: &CreateThemeOptions, name: &str) -> Result<()> {
    let project = normalize(&options.project);

    if !project.exists() {
        return Err(Error::ProjectNotExists { path: project });
    }

    if theme::exists(&project, name) {
        return Err(Error::ThemeExists {
            name: name.to_string(),
        });
    }

    theme_layout(&project, name)?.apply()?;

    debug!("Created theme {} in {}", name, project.display());
    Ok(())
}

/// Builds the directories and files of a fresh theme.
pub fn theme_layout(project: &Path, name: &str) -> Result<ProvisionSpec> {
    let theme_dir = theme::dir(project, name);
    let template_dir = theme::template_dir(project, name);

    Ok(ProvisionSpec::new()
        .dir(&theme_dir)
        .dir(&template_dir)
        .dir(theme::css_dir(project, name))
        .dir(theme::js_dir(project, name))
        .file(template_dir.join(LIST_PAGE_TPL), Vec::<u8>::new())
        .file(template_dir.join(PAGE_TPL), Vec::<u8>::new())
        .file(theme_dir.join(THEME_CONFIG_FILE), default_theme_config()?))
}

// An empty path means the current directory.
fn normalize(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        path.to_path_buf()
    }
}
