use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::core::DriverConfig;
use crate::core::{Error, Result};

/// Config file name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".annotator.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed explicitly on the command line
    Explicit(PathBuf),
    /// Found by walking up from the current directory
    Discovered(PathBuf),
    /// No file found; built-in defaults
    Builtin,
}

/// Parse and validate config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<DriverConfig> {
    let config = toml::from_str::<DriverConfig>(contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a config file
pub fn load_config_file(path: &Path) -> Result<DriverConfig> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the configuration: an explicit file if given, else the nearest
/// discovered file, else the built-in defaults.
///
/// Unlike a missing discovered file, a broken one is an error rather than
/// a silent fallback.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<(DriverConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        debug!(path = %path.display(), "Loaded explicit config");
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    match discover_config(start) {
        Some(path) => {
            let config = load_config_file(&path)?;
            debug!(path = %path.display(), "Loaded discovered config");
            Ok((config, ConfigSource::Discovered(path)))
        }
        None => {
            debug!(
                "No {} found after checking {} directories. Using built-in config.",
                CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH
            );
            Ok((DriverConfig::builtin(), ConfigSource::Builtin))
        }
    }
}
