use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level snowrun configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnowrunConfig {
    /// Output location and naming.
    pub paths: PathsToml,

    /// Run window.
    pub time: TimeToml,
}

impl SnowrunConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsToml {
    /// Root of all basin outputs; relative paths resolve against the config file.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub basin: Option<String>,
    pub project_name: String,
    #[serde(default = "default_folder_date_style")]
    pub folder_date_style: String,
}

fn default_folder_date_style() -> String {
    "wyhr".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_start_month")]
    pub water_year_start_month: u8,
}

fn default_start_month() -> u8 {
    10
}
