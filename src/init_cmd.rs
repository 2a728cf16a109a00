//! Init command: create the run directories for a configuration.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::InitArgs;
use crate::config::SnowrunConfig;
use crate::paths_cmd;

/// File name of the configuration copy written into the run directory.
pub const CONFIG_BACKUP: &str = "config_backup.toml";

/// Create the run layout on disk.
pub fn run(args: InitArgs) -> Result<()> {
    let _cmd = info_span!("init").entered();
    let config = SnowrunConfig::load(&args.config)?;
    let paths = paths_cmd::resolve(&config, &args.config)?;

    paths
        .create_dirs()
        .context("failed to create run directories")?;
    info!(path = %paths.run().display(), "run directories created");

    let backup = paths.run().join(CONFIG_BACKUP);
    std::fs::copy(&args.config, &backup)
        .with_context(|| format!("failed to back up config to {}", backup.display()))?;
    info!(path = %backup.display(), "config backed up");

    Ok(())
}
