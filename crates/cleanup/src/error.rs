//! Error types for snowrun-cleanup.

use std::path::PathBuf;

/// Error type for all fallible operations in the snowrun-cleanup crate.
///
/// Per-entry deletion failures are not errors on their own; they are
/// collected in a [`CleanupReport`](crate::CleanupReport) and only become
/// [`CleanupError::Incomplete`] when the caller escalates them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CleanupError {
    /// Returned when the output directory itself cannot be listed.
    #[error("failed to read output directory {}: {reason}", path.display())]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when an output directory or its marker cannot be prepared.
    #[error("failed to prepare {}: {reason}", path.display())]
    Prepare {
        /// Path that could not be created.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a reset left entries behind and the caller escalated.
    #[error("cleanup incomplete, {count} failure(s): {details}")]
    Incomplete {
        /// Number of entries that could not be removed.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_read_dir() {
        let err = CleanupError::ReadDir {
            path: PathBuf::from("/run/output"),
            reason: "not a directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read output directory /run/output: not a directory"
        );
    }

    #[test]
    fn display_prepare() {
        let err = CleanupError::Prepare {
            path: PathBuf::from("/run/output/.keep"),
            reason: "read-only file system".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to prepare /run/output/.keep: read-only file system"
        );
    }

    #[test]
    fn display_incomplete() {
        let err = CleanupError::Incomplete {
            count: 2,
            details: "a: busy; b: denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cleanup incomplete, 2 failure(s): a: busy; b: denied"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CleanupError>();
    }
}
