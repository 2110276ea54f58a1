use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ToolSettings;
use crate::core::{Error, Result};

/// A located annotator: the Java launcher plus the packaged jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerTool {
    pub version: String,
    pub java: PathBuf,
    pub jar: PathBuf,
}

impl AnalyzerTool {
    /// Resolve the launcher on `PATH` and the jar in the local Maven
    /// repository (or the configured override). Fails if either is missing.
    pub fn resolve(settings: &ToolSettings) -> Result<Self> {
        let jar = match &settings.jar {
            Some(jar) => jar.clone(),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| Error::resolution("could not determine home directory"))?;
                maven_jar_path(&home, &settings.version)
            }
        };
        if !jar.is_file() {
            return Err(Error::resolution(format!(
                "annotator {} not found at {}",
                settings.version,
                jar.display()
            )));
        }

        let java = which::which(&settings.java).map_err(|source| Error::Launcher {
            name: settings.java.clone(),
            source,
        })?;

        for path in [&jar, &java] {
            if path.to_str().is_none() {
                return Err(Error::resolution(format!(
                    "{} is not valid UTF-8",
                    path.display()
                )));
            }
        }

        debug!(java = %java.display(), jar = %jar.display(), "Resolved annotator");
        Ok(Self {
            version: settings.version.clone(),
            java,
            jar,
        })
    }

    /// `<java> -jar <jar>`
    pub fn launch_prefix(&self) -> Vec<String> {
        vec![
            self.java.display().to_string(),
            "-jar".to_string(),
            self.jar.display().to_string(),
        ]
    }
}

/// Jar location inside the per-user Maven repository for `version`.
pub fn maven_jar_path(home: &Path, version: &str) -> PathBuf {
    home.join(".m2")
        .join("repository")
        .join("edu")
        .join("ucr")
        .join("cs")
        .join("riple")
        .join("annotator")
        .join("annotator-core")
        .join(version)
        .join(format!("annotator-core-{version}.jar"))
}
