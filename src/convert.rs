//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};

use snowrun_paths::{FolderDateStyle, RunConfig};

use crate::config::SnowrunConfig;

/// Accepted datetime layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a folder date style name into the corresponding enum variant.
pub fn parse_folder_date_style(s: &str) -> Result<FolderDateStyle> {
    s.parse::<FolderDateStyle>()
        .context("invalid [paths].folder_date_style")
}

/// Parses a config date string; a bare `YYYY-MM-DD` means midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    bail!("unrecognised date {s:?}: expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]")
}

/// Builds a [`RunConfig`] from the TOML configuration.
///
/// A relative `output_dir` is resolved against `config_dir`. The optional
/// `basin` becomes one more directory level under it.
pub fn build_run_config(config: &SnowrunConfig, config_dir: &Path) -> Result<RunConfig> {
    let date_style = parse_folder_date_style(&config.paths.folder_date_style)?;
    let start = parse_datetime(&config.time.start_date).context("invalid [time].start_date")?;
    let end = parse_datetime(&config.time.end_date).context("invalid [time].end_date")?;

    let mut output_root = config_dir.join(&config.paths.output_dir);
    if let Some(ref basin) = config.paths.basin {
        output_root.push(basin);
    }

    let run_config = RunConfig::new(output_root, &config.paths.project_name, start, end)
        .with_date_style(date_style)
        .with_start_month(config.time.water_year_start_month);
    run_config.validate()?;
    Ok(run_config)
}
