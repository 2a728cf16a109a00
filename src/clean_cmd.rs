//! Clean command: empty an output directory while keeping its marker file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use snowrun_cleanup::{ResetConfig, ResetOutcome, reset_output};

use crate::cli::CleanArgs;

/// Run the output reset.
pub fn run(args: CleanArgs) -> Result<()> {
    let _cmd = info_span!("clean").entered();
    let config = ResetConfig::new(args.keep).with_cache_run(args.cache_run);

    let outcome = reset_output(&args.dir, &config)
        .with_context(|| format!("failed to reset {}", args.dir.display()))?;

    let report = match outcome {
        ResetOutcome::Skipped(reason) => {
            info!(?reason, "reset skipped");
            return Ok(());
        }
        ResetOutcome::Reset(report) => report,
    };

    println!(
        "removed {} entries from {}",
        report.removed().len(),
        args.dir.display()
    );
    for failure in report.failures() {
        eprintln!("could not remove {}: {}", failure.path().display(), failure.reason());
    }

    if args.strict {
        report
            .into_result()
            .with_context(|| format!("{} was not fully cleaned", args.dir.display()))?;
    }
    Ok(())
}
