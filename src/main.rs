mod clean_cmd;
mod cli;
mod config;
mod convert;
mod init_cmd;
mod logging;
mod paths_cmd;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use snowrun_cleanup::CleanupError;

use crate::cli::{Cli, Command};

/// Exit status when `clean --strict` left entries behind.
const EXIT_INCOMPLETE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code(&e)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Paths(args) => paths_cmd::run(args),
        Command::Init(args) => init_cmd::run(args),
        Command::Clean(args) => clean_cmd::run(args),
    }
}

/// Leftover output is reported separately from configuration and I/O errors.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CleanupError>() {
        Some(CleanupError::Incomplete { .. }) => ExitCode::from(EXIT_INCOMPLETE),
        _ => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn incomplete_cleanup_has_its_own_status() {
        let err = Err::<(), _>(CleanupError::Incomplete {
            count: 1,
            details: "out/b: busy".to_string(),
        })
        .context("out was not fully cleaned")
        .unwrap_err();
        assert_eq!(exit_code(&err), ExitCode::from(EXIT_INCOMPLETE));
    }

    #[test]
    fn other_errors_fail_generically() {
        let err = anyhow::anyhow!("failed to read config file");
        assert_eq!(exit_code(&err), ExitCode::FAILURE);
    }
}
