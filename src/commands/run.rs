use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::analyzer::{CommandRunner, ToolExit};
use crate::config::{load_config, ConfigSource};
use crate::pipeline::{Pipeline, PlannedRun};

/// Options of the `run` subcommand
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub profiles: Vec<String>,
    pub dry_run: bool,
    pub json: bool,
}

/// Load the config, resolve every selected profile, then either print the
/// planned commands or run them. Returns the exit code for the process.
pub fn run_command(options: &RunOptions, cwd: &Path, runner: &dyn CommandRunner) -> Result<i32> {
    let (config, source) = load_config(options.config.as_deref(), cwd)?;
    match &source {
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            info!(config = %path.display(), "Using configuration file")
        }
        ConfigSource::Builtin => info!("Using built-in configuration"),
    }

    let pipeline = Pipeline::resolve(&config, &options.profiles, cwd)
        .context("Failed to resolve annotator run")?;

    if options.dry_run {
        print_plan(&pipeline.plan(), options.json)?;
        return Ok(0);
    }

    let exit: ToolExit = pipeline.execute(runner)?;
    Ok(exit.process_code())
}

fn print_plan(plan: &[PlannedRun], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        for run in plan {
            println!("[{}] {}", run.profile, run.command);
        }
    }
    Ok(())
}
