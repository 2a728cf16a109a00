//! Configuration for a single model run's directory layout.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use snowrun_calendar::DEFAULT_START_MONTH;

use crate::error::PathError;
use crate::style::FolderDateStyle;

/// Resolved run configuration from which the directory layout is derived.
///
/// Use the builder methods to customise the date style and water-year start.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use snowrun_paths::{FolderDateStyle, RunConfig};
///
/// let start = NaiveDate::from_ymd_opt(1986, 2, 17).unwrap().and_hms_opt(1, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(1986, 2, 17).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let config = RunConfig::new("output/rme", "rme_test", start, end)
///     .with_date_style(FolderDateStyle::StartEnd);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory under which all water-year folders live.
    output_root: PathBuf,
    /// Name of the run, used as a single path component.
    run_name: String,
    /// First instant of the run.
    start: NaiveDateTime,
    /// Last instant of the run.
    end: NaiveDateTime,
    /// How the date range is encoded in folder names.
    date_style: FolderDateStyle,
    /// First month of the water year (1..=12).
    start_month: u8,
}

impl RunConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `date_style = WaterYearHour`, `start_month = 10`.
    pub fn new(
        output_root: impl Into<PathBuf>,
        run_name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            output_root: output_root.into(),
            run_name: run_name.into(),
            start,
            end,
            date_style: FolderDateStyle::default(),
            start_month: DEFAULT_START_MONTH,
        }
    }

    /// Sets the folder date style.
    pub fn with_date_style(mut self, date_style: FolderDateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    /// Sets the first month of the water year.
    pub fn with_start_month(mut self, start_month: u8) -> Self {
        self.start_month = start_month;
        self
    }

    /// Returns the output root directory.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Returns the run name.
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Returns the start of the run.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end of the run.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the folder date style.
    pub fn date_style(&self) -> FolderDateStyle {
        self.date_style
    }

    /// Returns the first month of the water year.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the run name is not a single path component, the
    /// end precedes the start, or the start month is outside 1..=12.
    pub fn validate(&self) -> Result<(), PathError> {
        let reject = |reason| {
            Err(PathError::InvalidRunName {
                name: self.run_name.clone(),
                reason,
            })
        };
        if self.run_name.is_empty() {
            return reject("must not be empty");
        }
        if self.run_name.contains(['/', '\\']) {
            return reject("must not contain path separators");
        }
        if self.run_name == "." || self.run_name == ".." {
            return reject("must not be a relative directory reference");
        }
        if self.end < self.start {
            return Err(PathError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        if !(1..=12).contains(&self.start_month) {
            return Err(snowrun_calendar::CalendarError::InvalidMonth {
                month: self.start_month,
            }
            .into());
        }
        Ok(())
    }
}
