use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "annotator-driver")]
#[command(about = "Prepare a workspace and run the annotator inference tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare workspaces and run the annotator for the selected profiles
    Run {
        /// Configuration file (defaults to the nearest .annotator.toml)
        #[arg(short, long, env = "ANNOTATOR_DRIVER_CONFIG")]
        config: Option<PathBuf>,

        /// Profile to run; repeat for several. Runs all profiles when omitted
        #[arg(short, long = "profile")]
        profiles: Vec<String>,

        /// Print the commands without preparing workspaces or running anything
        #[arg(long)]
        dry_run: bool,

        /// Print dry-run output as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Write a starter .annotator.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
