//! Outcome of a reset pass.

use std::path::{Path, PathBuf};

use crate::error::CleanupError;

/// An entry that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    path: PathBuf,
    reason: String,
}

impl EntryFailure {
    pub(crate) fn new(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }

    /// Returns the path of the entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the I/O error message for the failed removal.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// What a reset pass removed and what it could not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    removed: Vec<PathBuf>,
    failures: Vec<EntryFailure>,
}

impl CleanupReport {
    pub(crate) fn push_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub(crate) fn push_failure(&mut self, failure: EntryFailure) {
        self.failures.push(failure);
    }

    /// Returns the entries that were removed, in removal order.
    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }

    /// Returns the entries that could not be removed.
    pub fn failures(&self) -> &[EntryFailure] {
        &self.failures
    }

    /// Returns `true` if every entry was removed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Escalates recorded failures into an error.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::Incomplete`] if any entry could not be removed.
    pub fn into_result(self) -> Result<Self, CleanupError> {
        if self.is_clean() {
            return Ok(self);
        }
        let details = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.path.display(), f.reason))
            .collect::<Vec<_>>()
            .join("; ");
        Err(CleanupError::Incomplete {
            count: self.failures.len(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_clean() {
        let report = CleanupReport::default();
        assert!(report.is_clean());
        assert!(report.removed().is_empty());
        assert_eq!(report.into_result().unwrap(), CleanupReport::default());
    }

    #[test]
    fn removed_entries_keep_order() {
        let mut report = CleanupReport::default();
        report.push_removed(PathBuf::from("out/a"));
        report.push_removed(PathBuf::from("out/b"));
        assert_eq!(
            report.removed(),
            &[PathBuf::from("out/a"), PathBuf::from("out/b")]
        );
        assert!(report.is_clean());
    }

    #[test]
    fn failures_escalate() {
        let mut report = CleanupReport::default();
        report.push_removed(PathBuf::from("out/a"));
        report.push_failure(EntryFailure::new(PathBuf::from("out/b"), "busy"));
        report.push_failure(EntryFailure::new(PathBuf::from("out/c"), "denied"));
        assert!(!report.is_clean());

        let err = report.into_result().unwrap_err();
        assert_eq!(
            err,
            CleanupError::Incomplete {
                count: 2,
                details: "out/b: busy; out/c: denied".to_string(),
            }
        );
    }

    #[test]
    fn failure_accessors() {
        let f = EntryFailure::new(PathBuf::from("out/b"), "busy");
        assert_eq!(f.path(), Path::new("out/b"));
        assert_eq!(f.reason(), "busy");
    }
}
