//! # snowrun-cleanup
//!
//! Reset a model output directory between runs while preserving a marker
//! file (`.keep` by default) so the directory itself survives.
//!
//! Removal is best effort: one stubborn entry does not stop the others. The
//! caller receives a [`CleanupReport`] and decides whether leftover entries
//! are an error via [`CleanupReport::into_result`].
//!
//! # Quick start
//!
//! ```
//! use snowrun_cleanup::{ResetConfig, ResetOutcome, reset_output};
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join(".keep"), b"").unwrap();
//! std::fs::write(dir.path().join("snow.nc"), b"").unwrap();
//!
//! let outcome = reset_output(dir.path(), &ResetConfig::default()).unwrap();
//! let report = outcome.report().unwrap();
//! assert_eq!(report.removed().len(), 1);
//! assert!(dir.path().join(".keep").exists());
//! ```

mod error;
mod guard;
mod report;
mod reset;

pub use error::CleanupError;
pub use guard::OutputGuard;
pub use report::{CleanupReport, EntryFailure};
pub use reset::{
    KEEP_FILE, OUTPUT_DIR, ResetConfig, ResetOutcome, SkipReason, reset_output, reset_run_output,
};
