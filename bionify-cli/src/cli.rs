// bionify-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use bionify_core::config::{CONVERTER_ENV, DEFAULT_CONVERTER_COMMAND, LIBRARY_PATH_ENV};
use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Bionify: batch Bionic Reading conversion for a Calibre library",
    long_about = "Scans a Calibre library for e-books, asks which ones to convert, \
                  and runs the converter script on each selected book."
)]
pub struct Cli {
    /// Root directory of the Calibre library
    // An empty value parses as an empty path so it can be reported as missing.
    #[arg(
        long,
        value_name = "PATH",
        env = LIBRARY_PATH_ENV,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub library: Option<PathBuf>,

    /// E-book extensions to look for (comma separated or repeated).
    /// Defaults to epub, mobi, pdf, azw3 and fb2.
    #[arg(short = 'f', long = "format", value_name = "EXT", value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Converter command; the book path is appended as the last argument
    #[arg(
        long,
        value_name = "COMMAND",
        env = CONVERTER_ENV,
        default_value = DEFAULT_CONVERTER_COMMAND
    )]
    pub converter: String,

    /// List the e-books found in the library and exit without prompting
    #[arg(long)]
    pub list: bool,

    /// Enable debug-level console logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write a timestamped run log into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Parses the process arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_formats_accept_commas_and_repeats() {
        let cli = parse_cli_from([
            "bionify",
            "--library",
            "/books",
            "-f",
            "epub,pdf",
            "--format",
            "cbz",
        ])
        .unwrap();
        assert_eq!(cli.formats, vec!["epub", "pdf", "cbz"]);
        assert_eq!(cli.library, Some(PathBuf::from("/books")));
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse_cli_from([
            "bionify",
            "--library",
            "/books",
            "--converter",
            "python3 tools/bio.py",
            "--list",
            "-v",
            "--log-dir",
            "/tmp/logs",
        ])
        .unwrap();
        assert_eq!(cli.converter, "python3 tools/bio.py");
        assert!(cli.list);
        assert!(cli.verbose);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    }
}
