//! Command-line entry point for the task list.
//!
//! Usage:
//!
//! ```text
//! tasklist [--data-file PATH | --in-memory] [--policy strict|lenient] [COMMAND]
//! ```
//!
//! Without a command an interactive menu is shown. The process exits with
//! status 1 when a command fails validation, the task file cannot be read or
//! written, or the command line is invalid.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tasklist::cli::{Cli, logging, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            if err.print().is_err() || failed {
                return ExitCode::FAILURE;
            }
            return ExitCode::SUCCESS;
        }
    };
    logging::init(cli.verbose);

    let stdin = io::stdin();
    match run(&cli, stdin.lock(), io::stdout().lock(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut stderr = io::stderr();
            if writeln!(stderr, "Error: {err}").is_err() {
                tracing::error!(error = %err, "command failed");
            }
            ExitCode::FAILURE
        }
    }
}
