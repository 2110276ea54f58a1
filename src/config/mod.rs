//! Driver configuration.
//!
//! A TOML file (`.annotator.toml`) declares the analyzer location and one or
//! more named run profiles. [`RunConfig`] is the fully resolved, immutable
//! value a single run executes with.

pub mod core;
pub mod loader;
pub mod run;

pub use self::core::{
    DriverConfig, ProfileConfig, ToolSettings, DEFAULT_JAVA, DEFAULT_TOOL_VERSION,
};
pub use loader::{
    discover_config, load_config, load_config_file, parse_config, ConfigSource, CONFIG_FILE_NAME,
};
pub use run::RunConfig;
