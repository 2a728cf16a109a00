use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Snowrun run-directory manager.
#[derive(Parser)]
#[command(
    name = "snowrun",
    version,
    about = "Run-directory layout and output housekeeping for snow-model runs"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the water-year, data and run directories for a configuration.
    Paths(PathsArgs),
    /// Create the run directories and back up the configuration file.
    Init(InitArgs),
    /// Empty an output directory, keeping its marker file.
    Clean(CleanArgs),
}

/// Arguments for the `paths` subcommand.
#[derive(clap::Args)]
pub struct PathsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "snowrun.toml")]
    pub config: PathBuf,

    /// Override `[paths].folder_date_style` from config.
    #[arg(long = "date-style")]
    pub date_style: Option<String>,
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
pub struct InitArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "snowrun.toml")]
    pub config: PathBuf,
}

/// Arguments for the `clean` subcommand.
#[derive(clap::Args)]
pub struct CleanArgs {
    /// Output directory to empty.
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Name of the marker file to preserve.
    #[arg(short, long, default_value = snowrun_cleanup::KEEP_FILE)]
    pub keep: String,

    /// Keep this run's outputs; nothing is removed.
    #[arg(long = "cache-run")]
    pub cache_run: bool,

    /// Exit with an error if any entry could not be removed.
    #[arg(long)]
    pub strict: bool,
}
