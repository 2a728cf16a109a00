//! Scoped ownership of an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::CleanupError;
use crate::reset::{ResetConfig, ResetOutcome, reset_output};

/// Owns an output directory and resets it when the owner is done.
///
/// Call [`OutputGuard::finish`] to reset and inspect the report. A guard
/// dropped without `finish` (early return, panic unwinding) still resets
/// the directory, logging any failures.
#[derive(Debug)]
pub struct OutputGuard {
    dir: PathBuf,
    config: ResetConfig,
    armed: bool,
}

impl OutputGuard {
    /// Takes ownership of an existing output directory.
    pub fn new(dir: impl Into<PathBuf>, config: ResetConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
            armed: true,
        }
    }

    /// Creates `dir` and its protected marker file if missing, then guards it.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::Prepare`] if the directory or marker cannot
    /// be created.
    pub fn acquire(dir: impl Into<PathBuf>, config: ResetConfig) -> Result<Self, CleanupError> {
        let dir = dir.into();
        let prepare_err = |path: &Path, e: std::io::Error| CleanupError::Prepare {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        fs::create_dir_all(&dir).map_err(|e| prepare_err(&dir, e))?;
        let marker = dir.join(config.protected_name());
        if !marker.exists() {
            fs::write(&marker, b"").map_err(|e| prepare_err(&marker, e))?;
        }
        Ok(Self::new(dir, config))
    }

    /// Returns the guarded directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Resets the directory now and returns the outcome.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`reset_output`].
    pub fn finish(mut self) -> Result<ResetOutcome, CleanupError> {
        self.armed = false;
        reset_output(&self.dir, &self.config)
    }

    /// Releases the directory without resetting it.
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.dir)
    }
}

impl AsRef<Path> for OutputGuard {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match reset_output(&self.dir, &self.config) {
            Ok(ResetOutcome::Reset(report)) if !report.is_clean() => {
                warn!(
                    path = %self.dir.display(),
                    failed = report.failures().len(),
                    "output directory left partially cleaned"
                );
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "output directory reset failed"),
        }
    }
}
