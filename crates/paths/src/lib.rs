//! # snowrun-paths
//!
//! Deterministic directory layout for model runs.
//!
//! Every run lives under a water-year folder keyed on its start date, with
//! separate folders for input data and results whose names encode the run's
//! date range in one of three [`FolderDateStyle`]s:
//!
//! | Style | Config string | Suffix for 1986-02-17 01:00 .. 08:00 |
//! |-------|---------------|--------------------------------------|
//! | Water-year hour | `wyhr` | `3337_3344` |
//! | Start/end days | `start_end` | `19860217_19860217` |
//! | Start day | `day` | `19860217` |
//!
//! # Quick start
//!
//! ```
//! use std::path::Path;
//!
//! use chrono::NaiveDate;
//! use snowrun_paths::{RunConfig, build_paths};
//!
//! let start = NaiveDate::from_ymd_opt(1986, 2, 17).unwrap().and_hms_opt(1, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(1986, 2, 17).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let config = RunConfig::new("output/rme", "rme_test", start, end);
//!
//! let paths = build_paths(&config).unwrap();
//! assert_eq!(paths.water_year(), Path::new("output/rme/wy1986/rme_test"));
//! assert_eq!(paths.run(), Path::new("output/rme/wy1986/rme_test/runs/run3337_3344"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod style;

pub use config::RunConfig;
pub use error::PathError;
pub use layout::{LOG_DIR, RunPaths, build_paths};
pub use style::FolderDateStyle;
