use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::{Context, Result};
use std::path::Path;

/// Starter configuration; mirrors the built-in OpenCms profile.
pub const DEFAULT_CONFIG: &str = r#"# Annotator driver configuration

[tool]
version = "1.3.8-SNAPSHOT"
# jar = "/path/to/annotator-core.jar"
java = "java"

[profiles.opencms]
workspace = "/tmp/ucr-tainting/opencms"
build_command = "./gradlew compileJava"
initializer = "edu.ucr.Initializer"
taint_qualifier = "edu.ucr.cs.riple.taint.ucrtainting.qual.RUntainted"
context_name = "UCRTaint"
# depth = 1
outer_loop = false
parallel = false
show_build_output = false
# repository = "/path/to/opencms"
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG).with_context(|| {
        format!("Failed to write configuration file {}", config_path.display())
    })?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
