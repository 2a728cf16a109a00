//! Best-effort reset of an output directory.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CleanupError;
use crate::report::{CleanupReport, EntryFailure};

/// Marker file that keeps an otherwise empty output directory in place.
pub const KEEP_FILE: &str = ".keep";

/// Name of the output directory inside a run directory.
pub const OUTPUT_DIR: &str = "output";

/// Options for [`reset_output`].
///
/// # Example
///
/// ```
/// use snowrun_cleanup::ResetConfig;
///
/// let config = ResetConfig::default().with_cache_run(true);
/// assert_eq!(config.protected_name(), ".keep");
/// assert!(config.cache_run());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetConfig {
    /// File name that is never removed.
    protected_name: String,
    /// Keep outputs from this run; the reset becomes a no-op.
    cache_run: bool,
}

impl ResetConfig {
    /// Creates a configuration that protects `protected_name`.
    pub fn new(protected_name: impl Into<String>) -> Self {
        Self {
            protected_name: protected_name.into(),
            cache_run: false,
        }
    }

    /// Sets whether the run's outputs are cached (kept).
    pub fn with_cache_run(mut self, cache_run: bool) -> Self {
        self.cache_run = cache_run;
        self
    }

    /// Returns the protected file name.
    pub fn protected_name(&self) -> &str {
        &self.protected_name
    }

    /// Returns `true` if outputs are kept.
    pub fn cache_run(&self) -> bool {
        self.cache_run
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self::new(KEEP_FILE)
    }
}

/// Why a reset did not touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The caller asked to keep the run's outputs.
    CacheRun,
    /// No run directory was established.
    NoRunDir,
}

/// Result of a reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The reset was not attempted.
    Skipped(SkipReason),
    /// The reset ran; the report lists removals and failures.
    Reset(CleanupReport),
}

impl ResetOutcome {
    /// Returns the report if the reset ran.
    pub fn report(&self) -> Option<&CleanupReport> {
        match self {
            Self::Reset(report) => Some(report),
            Self::Skipped(_) => None,
        }
    }
}

/// Removes every direct entry of `dir` except the protected file.
///
/// Files and symlinks are unlinked, directories are removed recursively, and
/// symlinks are never followed. A failure on one entry is logged and
/// recorded in the returned [`CleanupReport`]; the remaining entries are
/// still processed. `dir` itself is never removed.
///
/// # Errors
///
/// Returns [`CleanupError::ReadDir`] if `dir` cannot be listed. An
/// individual entry that cannot be read is recorded as a failure instead.
pub fn reset_output(dir: &Path, config: &ResetConfig) -> Result<ResetOutcome, CleanupError> {
    if config.cache_run() {
        info!(path = %dir.display(), "cache run, keeping outputs");
        return Ok(ResetOutcome::Skipped(SkipReason::CacheRun));
    }

    let entries = fs::read_dir(dir).map_err(|e| CleanupError::ReadDir {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    let report = sweep(
        dir,
        entries.map(|entry| entry.map(|e| e.path())),
        config.protected_name(),
        remove_entry,
    );

    info!(
        path = %dir.display(),
        removed = report.removed().len(),
        failed = report.failures().len(),
        "output directory reset"
    );
    Ok(ResetOutcome::Reset(report))
}

/// Removes every listed entry except `protected`, recording each outcome.
///
/// An entry that cannot be read is recorded against `dir`.
fn sweep(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
    protected: &str,
    remove: impl Fn(&Path) -> io::Result<()>,
) -> CleanupReport {
    let mut report = CleanupReport::default();
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read output entry");
                report.push_failure(EntryFailure::new(dir.to_path_buf(), e.to_string()));
            }
        }
    }
    paths.sort();

    let protected = OsStr::new(protected);
    for path in paths {
        if path.file_name() == Some(protected) {
            continue;
        }
        match remove(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed");
                report.push_removed(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove output entry");
                report.push_failure(EntryFailure::new(path, e.to_string()));
            }
        }
    }
    report
}

/// Resets `<run_dir>/output`, or skips when no run directory exists.
///
/// # Errors
///
/// Propagates errors from [`reset_output`].
pub fn reset_run_output(
    run_dir: Option<&Path>,
    config: &ResetConfig,
) -> Result<ResetOutcome, CleanupError> {
    if config.cache_run() {
        return Ok(ResetOutcome::Skipped(SkipReason::CacheRun));
    }
    match run_dir {
        Some(run_dir) => reset_output(&run_dir.join(OUTPUT_DIR), config),
        None => {
            debug!("no run directory, nothing to reset");
            Ok(ResetOutcome::Skipped(SkipReason::NoRunDir))
        }
    }
}

fn remove_entry(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
