//! Error types for snowrun-paths.

use std::path::PathBuf;

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the snowrun-paths crate.
///
/// Configuration problems (an unrecognised folder date style, an inverted
/// date range, an unusable run name) are reported before any path is
/// computed, so a caller never sees a partial layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Returned when a folder date style string is not recognised.
    #[error("unknown folder date style: {value:?} (expected one of wyhr, start_end, day)")]
    UnknownDateStyle {
        /// The unrecognised value.
        value: String,
    },

    /// Returned when the run ends before it starts.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Configured start of the run.
        start: NaiveDateTime,
        /// Configured end of the run.
        end: NaiveDateTime,
    },

    /// Returned when the run name cannot be used as a single path component.
    #[error("invalid run name {name:?}: {reason}")]
    InvalidRunName {
        /// The rejected run name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Wraps an error originating from the snowrun-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a run directory cannot be created.
    #[error("failed to create directory {}: {reason}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<snowrun_calendar::CalendarError> for PathError {
    fn from(e: snowrun_calendar::CalendarError) -> Self {
        PathError::Calendar {
            reason: e.to_string(),
        }
    }
}
