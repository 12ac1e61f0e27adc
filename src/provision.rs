//! Filesystem provisioning shared by project and theme creation.
//!
//! A [`ProvisionSpec`] lists the directories to create and the files to write
//! with their exact content. Directory creation is idempotent and every file
//! write is all-or-nothing for that file, but the set as a whole is not
//! transactional: a failure leaves whatever was written so far on disk.

use indexmap::{IndexMap, IndexSet};
use log::debug;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Directories and files making up a layout, in creation order.
#[derive(Debug, Default)]
pub struct ProvisionSpec {
    dirs: IndexSet<PathBuf>,
    files: IndexMap<PathBuf, Vec<u8>>,
}

impl ProvisionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a directory that must exist before any file is written.
    pub fn dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Schedules a file with its exact content.
    pub fn file<P: Into<PathBuf>, C: Into<Vec<u8>>>(mut self, path: P, content: C) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &[u8])> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_slice()))
    }

    /// Checks that every file lives in a declared directory.
    ///
    /// # Errors
    /// * `Error::UndeclaredDirectory` naming the first file whose parent is missing
    pub fn validate(&self) -> Result<()> {
        for path in self.files.keys() {
            let declared = path
                .parent()
                .is_some_and(|parent| self.dirs.contains(parent));
            if !declared {
                return Err(Error::UndeclaredDirectory { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Validates the layout, creates all directories, then writes all files.
    pub fn apply(&self) -> Result<()> {
        self.validate()?;
        create_dirs(&self.dirs)?;
        write_files(&self.files)
    }
}

/// Creates each directory along with its missing parents.
/// Directories that already exist are left alone.
pub fn create_dirs<I, P>(dirs: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for dir in dirs {
        let dir = dir.as_ref();
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| Error::DirectoryFailure {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes each file in order, stopping at the first failure.
/// Files written before the failure are kept.
pub fn write_files<I, P, C>(files: I) -> Result<()>
where
    I: IntoIterator<Item = (P, C)>,
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    for (path, content) in files {
        let path = path.as_ref();
        debug!("Writing file: {}", path.display());
        fs::write(path, content).map_err(|source| Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Tells whether `path` may be removed: it doesn't exist, or overwriting it
/// was explicitly requested.
pub fn is_safe_to_remove<P: AsRef<Path>>(path: P, overwrite: bool) -> bool {
    overwrite || !path.as_ref().exists()
}

/// Checks whether `path` names the current working directory.
pub fn is_current_dir<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.components().all(|c| c == Component::CurDir) {
        return true;
    }
    match (path.canonicalize(), std::env::current_dir()) {
        (Ok(path), Ok(cwd)) => cwd.canonicalize().is_ok_and(|cwd| cwd == path),
        _ => false,
    }
}

/// Removes everything at `path`, leaving nothing behind.
///
/// A subdirectory is removed in one go. The current directory is cleared entry
/// by entry instead and the directory itself is kept. Entries that vanish
/// while clearing are skipped.
///
/// # Errors
/// * `Error::RemovalFailure` for any failure other than a missing entry
pub fn clear_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if is_current_dir(path) {
        return clear_current_dir(path);
    }

    debug!("Removing {}", path.display());
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };
    ignore_not_found(removed).map_err(|source| Error::RemovalFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn clear_current_dir(root: &Path) -> Result<()> {
    let removal_failure = |source: io::Error| Error::RemovalFailure {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = WalkDir::new(root).min_depth(1).into_iter();
    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound) => {
                continue
            }
            Err(e) => return Err(removal_failure(e.into())),
        };

        debug!("Removing {}", entry.path().display());
        if entry.file_type().is_dir() {
            ignore_not_found(fs::remove_dir_all(entry.path())).map_err(removal_failure)?;
            entries.skip_current_dir();
        } else {
            ignore_not_found(fs::remove_file(entry.path())).map_err(removal_failure)?;
        }
    }
    Ok(())
}

fn ignore_not_found(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_rejects_undeclared_directory() {
        let spec = ProvisionSpec::new()
            .dir("site")
            .file("site/verless.yml", "")
            .file("site/content/index.md", "");

        match spec.validate() {
            Err(Error::UndeclaredDirectory { path }) => {
                assert_eq!(path, PathBuf::from("site/content/index.md"))
            }
            other => panic!("Expected UndeclaredDirectory, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_creates_layout_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("site");
        let spec = ProvisionSpec::new()
            .dir(&root)
            .dir(root.join("content"))
            .file(root.join("verless.yml"), "version: 1\n")
            .file(root.join("content/empty.md"), Vec::<u8>::new());

        spec.apply().unwrap();

        assert_eq!(fs::read(root.join("verless.yml")).unwrap(), b"version: 1\n");
        assert!(fs::read(root.join("content/empty.md")).unwrap().is_empty());
        assert_eq!(spec.dirs().count(), 2);
        assert_eq!(spec.files().next().unwrap().0, root.join("verless.yml"));
    }

    #[test]
    fn test_undeclared_layout_is_not_applied() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("site");
        let spec = ProvisionSpec::new()
            .dir(root.join("content"))
            .file(root.join("themes/default/theme.yml"), "");

        assert!(spec.apply().is_err());
        assert!(!root.exists());
    }

    #[test]
    fn test_write_files_stops_at_first_error() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let broken = temp_dir.path().join("missing/second.txt");
        let third = temp_dir.path().join("third.txt");

        let result = write_files([(&first, "1"), (&broken, "2"), (&third, "3")]);

        assert!(matches!(result, Err(Error::WriteFailure { ref path, .. }) if *path == broken));
        assert!(first.exists());
        assert!(!third.exists());
    }

    #[test]
    fn test_create_dirs_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = [temp_dir.path().join("a/b"), temp_dir.path().join("c")];

        create_dirs(&dirs).unwrap();
        create_dirs(&dirs).unwrap();

        assert!(dirs.iter().all(|d| d.is_dir()));
    }

    #[test]
    fn test_is_safe_to_remove() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(is_safe_to_remove(&missing, false));
        assert!(is_safe_to_remove(&missing, true));
        assert!(!is_safe_to_remove(temp_dir.path(), false));
        assert!(is_safe_to_remove(temp_dir.path(), true));
    }

    #[test]
    fn test_clear_path_removes_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path().join("site");
        fs::create_dir_all(site.join("content/blog")).unwrap();
        fs::write(site.join("content/blog/post.md"), "# Post").unwrap();

        clear_path(&site).unwrap();
        assert!(!site.exists());

        // Clearing something that is already gone is fine.
        clear_path(&site).unwrap();
    }

    #[test]
    fn test_clear_path_reports_unexpected_errors() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "not a directory").unwrap();
        let below_file = file.join("site");

        match clear_path(&below_file) {
            Err(Error::RemovalFailure { path, source }) => {
                assert_eq!(path, below_file);
                assert_ne!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected RemovalFailure, got {other:?}"),
        }
        assert!(file.is_file());
    }

    #[test]
    fn test_is_current_dir() {
        assert!(is_current_dir("."));
        assert!(is_current_dir("./."));
        assert!(!is_current_dir("site"));
    }
}
