use std::path::{Path, PathBuf};

use super::core::ProfileConfig;

/// Immutable description of one annotator run.
///
/// Built once per profile after the repository root is resolved; both the
/// workspace preparer and the invocation builder read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub name: String,
    pub repository: PathBuf,
    pub workspace: PathBuf,
    pub build_command: String,
    pub initializer: String,
    pub taint_qualifier: String,
    pub context_name: String,
    pub depth: Option<u32>,
    pub outer_loop: bool,
    pub parallel: bool,
    pub show_build_output: bool,
}

impl RunConfig {
    pub fn from_profile(name: &str, profile: &ProfileConfig, repository: &Path) -> Self {
        Self {
            name: name.to_string(),
            repository: repository.to_path_buf(),
            workspace: profile.workspace.clone(),
            build_command: profile.build_command.clone(),
            initializer: profile.initializer.clone(),
            taint_qualifier: profile.taint_qualifier.clone(),
            context_name: profile.context_name.clone(),
            depth: profile.depth,
            outer_loop: profile.outer_loop,
            parallel: profile.parallel,
            show_build_output: profile.show_build_output,
        }
    }

    /// Build command as executed by the annotator: run from the repository root.
    pub fn build_command_in_repository(&self) -> String {
        format!("cd {} && {}", self.repository.display(), self.build_command)
    }
}
