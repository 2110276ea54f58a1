use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::core::{Error, Result};

/// Top-level directory of the git repository containing `start`.
pub fn resolve_repository_root(start: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start)
        .output()
        .map_err(|e| Error::resolution(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::resolution(format!(
            "{} is not inside a git repository: {stderr}",
            start.display()
        )));
    }

    let root = String::from_utf8(output.stdout)
        .map_err(|_| Error::resolution("repository root is not valid UTF-8"))?;
    let root = root.trim();
    if root.is_empty() {
        return Err(Error::resolution("git reported an empty repository root"));
    }
    debug!(root = %root, "Resolved repository root");
    Ok(PathBuf::from(root))
}

/// Explicit repository override, or git discovery from `start`.
///
/// An override must name an existing directory; it is returned canonicalized.
pub fn repository_for(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    let Some(path) = explicit else {
        return resolve_repository_root(start);
    };

    if !path.is_dir() {
        return Err(Error::resolution(format!(
            "repository {} is not a directory",
            path.display()
        )));
    }
    let root = path.canonicalize().map_err(|e| {
        Error::resolution(format!("failed to canonicalize repository {}: {e}", path.display()))
    })?;
    if root.to_str().is_none() {
        return Err(Error::resolution(format!(
            "repository {} is not valid UTF-8",
            root.display()
        )));
    }
    debug!(root = %root.display(), "Using configured repository root");
    Ok(root)
}
