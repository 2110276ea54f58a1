use anyhow::{Context, Result};
use annotator_driver::cli::{parse_args, Commands};
use annotator_driver::commands::{self, RunOptions};
use annotator_driver::observability::init_logging;
use annotator_driver::SystemRunner;

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbosity);

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    match cli.command {
        Commands::Run {
            config,
            profiles,
            dry_run,
            json,
        } => {
            let options = RunOptions {
                config,
                profiles,
                dry_run,
                json,
            };
            let code = commands::run_command(&options, &cwd, &SystemRunner)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Init { force } => commands::init::init_config(&cwd, force),
    }
}
