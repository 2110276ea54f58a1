use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::{Error, Result};

/// Annotator release used when the config does not name one.
pub const DEFAULT_TOOL_VERSION: &str = "1.3.8-SNAPSHOT";
/// Launcher used when the config does not name one.
pub const DEFAULT_JAVA: &str = "java";

/// Root configuration structure for the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Analyzer location settings
    #[serde(default)]
    pub tool: ToolSettings,

    /// Named run profiles, kept in name order
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Where the annotator lives and how it is launched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    #[serde(default = "default_tool_version")]
    pub version: String,

    /// Explicit jar path; otherwise derived from the local Maven repository
    #[serde(default)]
    pub jar: Option<PathBuf>,

    /// Java launcher name or path
    #[serde(default = "default_java")]
    pub java: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            version: default_tool_version(),
            jar: None,
            java: default_java(),
        }
    }
}

fn default_tool_version() -> String {
    DEFAULT_TOOL_VERSION.to_string()
}

fn default_java() -> String {
    DEFAULT_JAVA.to_string()
}

fn default_true() -> bool {
    true
}

/// One annotation campaign against one target build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub workspace: PathBuf,
    /// Shell command compiling the target, run from the repository root
    pub build_command: String,
    pub initializer: String,
    pub taint_qualifier: String,
    pub context_name: String,

    /// Inference loop bound; unbounded when absent
    #[serde(default)]
    pub depth: Option<u32>,

    #[serde(default = "default_true")]
    pub outer_loop: bool,

    #[serde(default = "default_true")]
    pub parallel: bool,

    #[serde(default)]
    pub show_build_output: bool,

    /// Repository root; discovered through git when absent
    #[serde(default)]
    pub repository: Option<PathBuf>,
}

impl ProfileConfig {
    pub fn validate(&self, name: &str) -> Result<()> {
        let required = [
            ("build_command", &self.build_command),
            ("initializer", &self.initializer),
            ("taint_qualifier", &self.taint_qualifier),
            ("context_name", &self.context_name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "profile `{name}`: `{field}` must not be empty"
            )));
        }
        if self.workspace.as_os_str().is_empty() {
            return Err(Error::configuration(format!(
                "profile `{name}`: `workspace` must not be empty"
            )));
        }
        if self.workspace.to_str().is_none() {
            return Err(Error::configuration(format!(
                "profile `{name}`: `workspace` must be valid UTF-8"
            )));
        }
        if let Some(repository) = &self.repository {
            if repository.to_str().is_none() {
                return Err(Error::configuration(format!(
                    "profile `{name}`: `repository` must be valid UTF-8"
                )));
            }
            if !repository.is_absolute() {
                return Err(Error::configuration(format!(
                    "profile `{name}`: `repository` must be an absolute path, got {}",
                    repository.display()
                )));
            }
        }
        if self.depth == Some(0) {
            return Err(Error::configuration(format!(
                "profile `{name}`: `depth` must be at least 1"
            )));
        }
        Ok(())
    }
}

impl DriverConfig {
    /// Configuration used when no config file is found: the OpenCms
    /// campaign with the outer loop and parallel processing disabled.
    pub fn builtin() -> Self {
        let opencms = ProfileConfig {
            workspace: PathBuf::from("/tmp/ucr-tainting/opencms"),
            build_command: "./gradlew compileJava".to_string(),
            initializer: "edu.ucr.Initializer".to_string(),
            taint_qualifier: "edu.ucr.cs.riple.taint.ucrtainting.qual.RUntainted".to_string(),
            context_name: "UCRTaint".to_string(),
            depth: None,
            outer_loop: false,
            parallel: false,
            show_build_output: false,
            repository: None,
        };
        Self {
            tool: ToolSettings::default(),
            profiles: BTreeMap::from([("opencms".to_string(), opencms)]),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.profiles.is_empty() {
            return Err(Error::configuration("no profiles defined"));
        }
        if self.tool.version.trim().is_empty() {
            return Err(Error::configuration("`tool.version` must not be empty"));
        }
        self.profiles
            .iter()
            .try_for_each(|(name, profile)| profile.validate(name))
    }

    /// Profiles to run: the named ones in the given order, or all of them
    /// in name order when `names` is empty.
    pub fn select<'a>(&'a self, names: &[String]) -> Result<Vec<(&'a str, &'a ProfileConfig)>> {
        if names.is_empty() {
            return Ok(self
                .profiles
                .iter()
                .map(|(name, profile)| (name.as_str(), profile))
                .collect());
        }
        names
            .iter()
            .map(|name| {
                self.profiles
                    .get_key_value(name)
                    .map(|(key, profile)| (key.as_str(), profile))
                    .ok_or_else(|| {
                        Error::configuration(format!(
                            "unknown profile `{name}` (available: {})",
                            self.profile_names().join(", ")
                        ))
                    })
            })
            .collect()
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}
