// ============================================================================
// bionify-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatch for console and optional run log file
//
// Console records go to stderr at `warn` (or `debug` with --verbose) so that
// prompts and status lines on stdout stay readable. When a log directory is
// given, every record at `debug` and above is also written to
// `bionify_run_<timestamp>.log` in that directory.

use crate::error::{CliResult, operation_failed};

use console::style;
use log::{Level, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Name of the run log file for `timestamp`.
pub fn log_file_name(timestamp: &str) -> String {
    format!("bionify_run_{timestamp}.log")
}

/// Installs the global logger. Returns the log file path when one was opened.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN").yellow().bold(),
                Level::Info => style("INFO").green(),
                Level::Debug => style("DEBUG").dim(),
                Level::Trace => style("TRACE").dim(),
            };
            out.finish(format_args!("[{}] {}", level, message))
        })
        .level(console_level)
        .chain(std::io::stderr());

    let mut root = fern::Dispatch::new().chain(console);
    let mut log_path = None;

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir).map_err(|e| {
            operation_failed(format!("Failed to create log directory {}", dir.display()), e)
        })?;

        let path = dir.join(log_file_name(&get_timestamp()));
        let file = fern::log_file(&path).map_err(|e| {
            operation_failed(format!("Failed to open log file {}", path.display()), e)
        })?;

        root = root.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        message
                    ))
                })
                .level(LevelFilter::Debug)
                .chain(file),
        );
        log_path = Some(path);
    }

    root.apply()
        .map_err(|e| operation_failed("Failed to initialize logging", e))?;

    Ok(log_path)
}
