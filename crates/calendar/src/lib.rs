//! # snowrun-calendar
//!
//! Gregorian water-year arithmetic for run scheduling and output naming.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime"] -->|"water_year_of()"| B["water year"]
//!     B -->|"water_year_start()"| C["first instant of the water year"]
//!     A -->|"water_year_hour()"| D["hours since water-year start"]
//!     A -->|"water_day()"| E["1-based day of water year"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use snowrun_calendar::{water_year, water_year_hour, water_year_start};
//!
//! // Water year
//! let wy = water_year(2000, 10, 10).unwrap(); // Oct start -> WY 2001
//! assert_eq!(wy, 2001);
//!
//! // Water-year hours
//! let t = NaiveDate::from_ymd_opt(1985, 10, 2).unwrap().and_hms_opt(3, 0, 0).unwrap();
//! assert_eq!(water_year_hour(t, 10).unwrap(), 27);
//! assert_eq!(water_year_start(1986, 10).unwrap().date().to_string(), "1985-10-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `water_year` | Water year of a date and its start instant |
//! | `hour` | Hour and day offsets within a water year |
//! | `error` | Error types |

mod error;
mod hour;
mod water_year;

pub use error::CalendarError;
pub use hour::{water_day, water_year_hour, water_year_hour_in};
pub use water_year::{DEFAULT_START_MONTH, water_year, water_year_of, water_year_start};
