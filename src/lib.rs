//! Driver for the annotator inference tool.
//!
//! A run prepares an isolated workspace (fresh manifest, no stale iteration
//! directory), then builds the annotator's command line from a [`RunConfig`]
//! and runs it, passing its exit status through.

pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod workspace;

// Re-export commonly used types
pub use crate::analyzer::{
    AnalyzerTool, CommandRunner, InvocationCommand, OutputMode, SystemRunner, ToolExit,
};
pub use crate::config::{DriverConfig, ProfileConfig, RunConfig, ToolSettings};
pub use crate::core::{Error, Result};
pub use crate::pipeline::{run_profile, Pipeline, PlannedRun};
pub use crate::workspace::PreparedWorkspace;
