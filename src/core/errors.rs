//! Shared error types for the driver

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for driver operations.
///
/// A non-zero exit from the annotator is not an error; it is reported
/// through [`crate::analyzer::ToolExit`].
#[derive(Debug, Error)]
pub enum Error {
    /// Workspace creation, cleanup or manifest write failed
    #[error("Workspace error: {message} ({})", path.display())]
    Workspace {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository root or analyzer executable could not be located
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Java launcher not found on PATH
    #[error("Resolution error: launcher `{name}` not found")]
    Launcher {
        name: String,
        #[source]
        source: which::Error,
    },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema
    #[error("Failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The analyzer process could not be started
    #[error("Failed to spawn `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a workspace error with path context
    pub fn workspace(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Workspace {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a resolution error
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
