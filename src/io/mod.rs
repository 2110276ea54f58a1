//! Filesystem helpers used by the workspace preparer and `init`.
//!
//! Every helper maps `std::io::Error` into [`Error::Workspace`] with the
//! offending path attached.

use crate::core::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::workspace("Failed to write file", path, e))
}

/// Create `path` and any missing ancestors.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::workspace(
            "Path exists and is not a directory",
            path,
            std::io::Error::from(ErrorKind::AlreadyExists),
        ));
    }
    fs::create_dir_all(path).map_err(|e| Error::workspace("Failed to create directory", path, e))
}

/// Remove a directory tree. A missing path is not an error; a plain file
/// or symlink in its place is removed as well.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::workspace("Failed to inspect path", path, e)),
    };

    if !metadata.is_dir() {
        debug!(path = %path.display(), "Removing non-directory entry");
        return fs::remove_file(path)
            .map(|()| true)
            .map_err(|e| Error::workspace("Failed to remove file", path, e));
    }

    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::workspace("Failed to remove directory", path, e)),
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain");
        fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, Error::Workspace { .. }));
    }

    #[test]
    fn test_remove_missing_dir_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let removed = remove_dir_if_exists(&temp_dir.path().join("0")).unwrap();
        assert!(!removed);
    }

    #[test]
    fn test_remove_dir_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("0");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("fix.json"), "{}").unwrap();
        assert!(remove_dir_if_exists(&dir).unwrap());
        assert!(!dir.exists());
    }

    #[test]
    fn test_remove_plain_file_in_place_of_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("0");
        fs::write(&file, "left behind").unwrap();

        assert!(remove_dir_if_exists(&file).unwrap());
        assert!(!file.exists());
    }

    #[test]
    fn test_write_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("paths.tsv");
        let err = write_file(&path, "x").unwrap_err();
        assert!(matches!(err, Error::Workspace { .. }));
        assert!(err.to_string().contains("paths.tsv"));
    }
}
