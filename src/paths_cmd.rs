//! Paths command: print the directory layout a configuration resolves to.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use snowrun_paths::{RunPaths, build_paths};

use crate::cli::PathsArgs;
use crate::config::SnowrunConfig;
use crate::convert;

/// Resolve and print the run layout.
pub fn run(args: PathsArgs) -> Result<()> {
    let _cmd = info_span!("paths").entered();
    let mut config = SnowrunConfig::load(&args.config)?;
    if let Some(style) = args.date_style {
        debug!(style = %style, "date style overridden on the command line");
        config.paths.folder_date_style = style;
    }

    let paths = resolve(&config, &args.config)?;

    let stdout = std::io::stdout();
    write_paths(&mut stdout.lock(), &paths).context("failed to write paths")?;
    Ok(())
}

/// Builds the run layout for a loaded configuration file.
pub fn resolve(config: &SnowrunConfig, config_path: &Path) -> Result<RunPaths> {
    let config_dir = config_path.parent().unwrap_or(Path::new(""));
    let run_config = convert::build_run_config(config, config_dir)?;
    build_paths(&run_config).context("failed to derive run paths")
}

fn write_paths(out: &mut impl Write, paths: &RunPaths) -> std::io::Result<()> {
    writeln!(out, "water_year: {}", paths.water_year().display())?;
    writeln!(out, "data: {}", paths.data().display())?;
    writeln!(out, "run: {}", paths.run().display())
}
