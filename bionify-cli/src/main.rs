//! Main entry point for the Bionify CLI application.
//!
//! Parses the arguments, sets up logging and runs the convert workflow with
//! the terminal reporter. Any fatal error is printed to stderr and the
//! process exits with status 1.

use bionify::logging::init_logging;
use bionify::{parse_cli, run_convert};
use bionify_core::TerminalReporter;

use console::style;
use std::process;

fn main() {
    let cli_args = parse_cli();

    match init_logging(cli_args.verbose, cli_args.log_dir.as_deref()) {
        Ok(Some(log_path)) => log::info!("Writing run log to {}", log_path.display()),
        Ok(None) => {}
        Err(e) => exit_with_error(&e),
    }

    log::info!("Bionify {} starting", env!("CARGO_PKG_VERSION"));
    if cli_args.verbose {
        log::debug!("Debug level logging enabled");
    }

    let reporter = TerminalReporter::new();
    if let Err(e) = run_convert(&cli_args, &reporter) {
        log::info!("Run aborted: {}", e);
        exit_with_error(&e);
    }

    log::info!("Bionify finished");
}

fn exit_with_error(error: &dyn std::error::Error) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), error);
    process::exit(1);
}
