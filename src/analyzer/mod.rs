//! The external annotator: where it is, how its command line is built and
//! how it is run.

pub mod invocation;
pub mod location;
pub mod repository;
pub mod runner;

pub use invocation::InvocationCommand;
pub use location::{maven_jar_path, AnalyzerTool};
pub use repository::{repository_for, resolve_repository_root};
pub use runner::{CommandRunner, OutputMode, SystemRunner, ToolExit};
