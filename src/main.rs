//! myip: list IP addresses
//!
//! Entry point for the myip application.

use myip::config::{Cli, ValidatedConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match ValidatedConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_application(&config)
}

/// Runs the query on a fresh Tokio runtime and prints the result.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(output) => {
            print!("{output}");
            exit_code::SUCCESS
        }
        Err(run::RunError::Query(myip::report::QueryError::NothingRequested)) => {
            if let Err(e) = Cli::build_command().print_help() {
                tracing::debug!("Failed to print help: {e}");
            }
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
