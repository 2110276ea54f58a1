//! Sequential run pipeline: resolve, then for each profile prepare the
//! workspace, build the command and dispatch it.
//!
//! Everything that can fail without touching the disk (config selection,
//! repository discovery, analyzer lookup) happens in [`Pipeline::resolve`],
//! before the first workspace is modified.

use std::path::Path;

use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::analyzer::{
    repository_for, AnalyzerTool, CommandRunner, InvocationCommand, OutputMode, ToolExit,
};
use crate::config::{DriverConfig, ProfileConfig, RunConfig};
use crate::core::Result;
use crate::workspace::{planned_layout, PreparedWorkspace};

/// Resolved runs ready to execute, in execution order.
#[derive(Debug, Clone)]
pub struct Pipeline {
    tool: AnalyzerTool,
    runs: Vec<RunConfig>,
}

/// A command that would be run, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRun {
    pub profile: String,
    pub command: InvocationCommand,
}

impl Pipeline {
    /// Select profiles, locate the annotator and resolve each profile's
    /// repository root (git discovery from `start` unless overridden).
    pub fn resolve(config: &DriverConfig, profiles: &[String], start: &Path) -> Result<Self> {
        let selected = config.select(profiles)?;
        let tool = AnalyzerTool::resolve(&config.tool)?;
        Self::with_tool(tool, &selected, start)
    }

    /// Same as [`Pipeline::resolve`] with an already located annotator.
    /// Each profile is validated before its repository is resolved.
    pub fn with_tool(
        tool: AnalyzerTool,
        selected: &[(&str, &ProfileConfig)],
        start: &Path,
    ) -> Result<Self> {
        let runs = selected
            .iter()
            .map(|(name, profile)| -> Result<RunConfig> {
                profile.validate(name)?;
                let repository = repository_for(profile.repository.as_deref(), start)?;
                Ok(RunConfig::from_profile(name, profile, &repository))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tool, runs })
    }

    /// Commands each run would execute, without touching the filesystem.
    pub fn plan(&self) -> Vec<PlannedRun> {
        self.runs
            .iter()
            .map(|run| PlannedRun {
                profile: run.name.clone(),
                command: InvocationCommand::build(
                    &self.tool,
                    run,
                    &planned_layout(&run.workspace),
                ),
            })
            .collect()
    }

    /// Run every profile in order. Stops at the first non-zero annotator
    /// exit and returns it; otherwise returns success.
    pub fn execute(&self, runner: &dyn CommandRunner) -> Result<ToolExit> {
        for run in &self.runs {
            let exit = run_profile(run, &self.tool, runner)?;
            if !exit.success() {
                warn!(profile = %run.name, code = ?exit.code, "Annotator failed; stopping");
                return Ok(exit);
            }
        }
        Ok(ToolExit::SUCCESS)
    }
}

/// Prepare the workspace, then build and dispatch one annotator run.
pub fn run_profile(
    run: &RunConfig,
    tool: &AnalyzerTool,
    runner: &dyn CommandRunner,
) -> Result<ToolExit> {
    let span = info_span!("run", profile = %run.name, workspace = %run.workspace.display());
    let _guard = span.enter();

    let workspace = PreparedWorkspace::prepare(&run.workspace)?;
    let command = InvocationCommand::build(tool, run, &workspace);
    info!(
        repository = %run.repository.display(),
        depth = ?run.depth,
        outer_loop = run.outer_loop,
        parallel = run.parallel,
        "Dispatching annotator"
    );
    runner.run(&command, OutputMode::from_show_build_output(run.show_build_output))
}
