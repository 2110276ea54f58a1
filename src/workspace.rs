//! Workspace preparation.
//!
//! Each run owns a workspace directory. Before the annotator starts, the
//! directory is created, the iteration directory `0` left by a previous run
//! is removed, and a path manifest telling the annotator where to write its
//! two reports is written fresh.
//!
//! Two runs targeting the same workspace must not overlap: the cleanup of
//! the later run would race the earlier annotator still writing into `0`.

use crate::core::Result;
use crate::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-iteration directory the annotator recreates each run.
pub const ITERATION_DIR: &str = "0";
/// Manifest file name, relative to the workspace root.
pub const MANIFEST_FILE: &str = "paths.tsv";
/// Taint report file name, relative to the workspace root.
pub const TAINT_REPORT_FILE: &str = "taint.xml";
/// Scanner report file name, relative to the workspace root.
pub const SCAN_REPORT_FILE: &str = "scanner.xml";

/// Handle proving the workspace was prepared for the current run.
///
/// Only [`PreparedWorkspace::prepare`] constructs it, and the invocation
/// builder requires one, so the command can never be built against an
/// unprepared workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedWorkspace {
    root: PathBuf,
    manifest_path: PathBuf,
    taint_report: PathBuf,
    scan_report: PathBuf,
}

impl PreparedWorkspace {
    /// Create the workspace, drop the stale iteration directory and write
    /// the manifest. Idempotent.
    pub fn prepare(root: &Path) -> Result<Self> {
        io::ensure_dir(root)?;
        debug!(workspace = %root.display(), "Workspace directory ready");

        let iteration_dir = root.join(ITERATION_DIR);
        if io::remove_dir_if_exists(&iteration_dir)? {
            debug!(path = %iteration_dir.display(), "Removed stale iteration directory");
        }

        let workspace = Self::layout(root);
        io::write_file(&workspace.manifest_path, &workspace.manifest_contents())?;
        debug!(manifest = %workspace.manifest_path.display(), "Wrote path manifest");

        Ok(workspace)
    }

    fn layout(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            manifest_path: root.join(MANIFEST_FILE),
            taint_report: root.join(TAINT_REPORT_FILE),
            scan_report: root.join(SCAN_REPORT_FILE),
        }
    }

    /// The single manifest line: `<taint report>\t<scan report>\n`.
    pub fn manifest_contents(&self) -> String {
        format!(
            "{}\t{}\n",
            self.taint_report.display(),
            self.scan_report.display()
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn taint_report(&self) -> &Path {
        &self.taint_report
    }

    pub fn scan_report(&self) -> &Path {
        &self.scan_report
    }
}

/// Workspace layout without touching the filesystem, for dry runs.
pub fn planned_layout(root: &Path) -> PreparedWorkspace {
    PreparedWorkspace::layout(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("run").join("opencms");

        let workspace = PreparedWorkspace::prepare(&root).unwrap();

        assert!(root.is_dir());
        assert!(workspace.manifest_path().is_file());
        assert!(!root.join(ITERATION_DIR).exists());
    }

    #[test]
    fn test_manifest_contents_exact() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");

        let workspace = PreparedWorkspace::prepare(&root).unwrap();
        let written = fs::read_to_string(workspace.manifest_path()).unwrap();

        let expected = format!(
            "{}\t{}\n",
            root.join("taint.xml").display(),
            root.join("scanner.xml").display()
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn test_stale_iteration_dir_removed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");
        let stale = root.join(ITERATION_DIR);
        fs::create_dir_all(stale.join("injections")).unwrap();
        fs::write(stale.join("injections").join("fixes.tsv"), "old").unwrap();

        PreparedWorkspace::prepare(&root).unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_iteration_file_removed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(ITERATION_DIR), "not a directory").unwrap();

        let workspace = PreparedWorkspace::prepare(&root).unwrap();

        assert!(!root.join(ITERATION_DIR).exists());
        assert!(workspace.manifest_path().is_file());
    }

    #[test]
    fn test_other_workspace_content_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");
        fs::create_dir_all(root.join("1")).unwrap();
        fs::write(root.join("taint.xml"), "<previous/>").unwrap();

        PreparedWorkspace::prepare(&root).unwrap();

        assert!(root.join("1").is_dir());
        assert_eq!(fs::read_to_string(root.join("taint.xml")).unwrap(), "<previous/>");
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");

        let first = PreparedWorkspace::prepare(&root).unwrap();
        let first_bytes = fs::read(first.manifest_path()).unwrap();
        let second = PreparedWorkspace::prepare(&root).unwrap();
        let second_bytes = fs::read(second.manifest_path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_bytes, second_bytes);
        assert!(!root.join(ITERATION_DIR).exists());
    }

    #[test]
    fn test_manifest_overwritten_not_appended() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("opencms");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(MANIFEST_FILE), "garbage\tgarbage\nmore\n").unwrap();

        let workspace = PreparedWorkspace::prepare(&root).unwrap();
        let written = fs::read_to_string(workspace.manifest_path()).unwrap();

        assert_eq!(written.lines().count(), 1);
        assert!(!written.contains("garbage"));
    }

    #[test]
    fn test_report_paths_share_workspace_prefix() {
        let workspace = planned_layout(Path::new("/tmp/run/opencms"));
        assert!(workspace.taint_report().starts_with("/tmp/run/opencms"));
        assert!(workspace.scan_report().starts_with("/tmp/run/opencms"));
        assert_eq!(
            workspace.manifest_contents(),
            "/tmp/run/opencms/taint.xml\t/tmp/run/opencms/scanner.xml\n"
        );
    }

    #[test]
    fn test_prepare_fails_when_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("not-a-dir");
        fs::write(&root, "x").unwrap();

        let err = PreparedWorkspace::prepare(&root).unwrap_err();
        assert!(matches!(err, crate::core::Error::Workspace { .. }));
    }
}
