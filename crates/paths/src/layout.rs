//! Derived run-directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use snowrun_calendar::{water_day, water_year_of};
use tracing::debug;

use crate::config::RunConfig;
use crate::error::PathError;

/// Name of the per-run log directory inside the run path.
pub const LOG_DIR: &str = "logs";

/// The directories a run writes into.
///
/// ```text
/// <output_root>/wy<YYYY>/<run_name>/          water_year
///                        ├── data/data<suffix> data
///                        └── runs/run<suffix>  run
///                                 └── logs     log_dir
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunPaths {
    water_year: PathBuf,
    data: PathBuf,
    run: PathBuf,
}

impl RunPaths {
    /// Returns `<output_root>/wy<YYYY>/<run_name>`.
    pub fn water_year(&self) -> &Path {
        &self.water_year
    }

    /// Returns the directory holding model input data for the run.
    pub fn data(&self) -> &Path {
        &self.data
    }

    /// Returns the directory holding model results for the run.
    pub fn run(&self) -> &Path {
        &self.run
    }

    /// Returns the directory holding the run's log files.
    pub fn log_dir(&self) -> PathBuf {
        self.run.join(LOG_DIR)
    }

    /// Creates the data, run and log directories, including all parents.
    ///
    /// Existing directories are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::CreateDir`] naming the first directory that
    /// could not be created.
    pub fn create_dirs(&self) -> Result<(), PathError> {
        for dir in [self.data.clone(), self.run.clone(), self.log_dir()] {
            fs::create_dir_all(&dir).map_err(|e| PathError::CreateDir {
                path: dir.clone(),
                reason: e.to_string(),
            })?;
            debug!(path = %dir.display(), "directory ready");
        }
        Ok(())
    }
}

/// Computes the directory layout for a run.
///
/// The water-year folder is keyed on the water year of the start date. The
/// data and run folder names carry a suffix chosen by the configured
/// [`FolderDateStyle`](crate::FolderDateStyle).
///
/// This is a pure function of `config`: equal configurations always yield
/// equal layouts.
///
/// # Errors
///
/// Returns the first error from [`RunConfig::validate`], or
/// [`PathError::Calendar`] if the water-year arithmetic fails. No partial
/// layout is returned.
pub fn build_paths(config: &RunConfig) -> Result<RunPaths, PathError> {
    config.validate()?;

    let start_month = config.start_month();
    let wy = water_year_of(config.start(), start_month)?;
    let suffix = config
        .date_style()
        .suffix(config.start(), config.end(), start_month)?;

    let water_year = config
        .output_root()
        .join(format!("wy{wy}"))
        .join(config.run_name());
    let data = water_year.join("data").join(format!("data{suffix}"));
    let run = water_year.join("runs").join(format!("run{suffix}"));

    let start_day = water_day(config.start(), start_month)?;
    let end_day = water_day(config.end(), start_month)?;
    debug!(
        water_year = wy,
        start_water_day = start_day,
        end_water_day = end_day,
        style = %config.date_style(),
        suffix = %suffix,
        "derived run paths"
    );

    Ok(RunPaths {
        water_year,
        data,
        run,
    })
}
