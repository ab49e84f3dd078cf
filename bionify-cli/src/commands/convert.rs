// ============================================================================
// bionify-cli/src/commands/convert.rs
// ============================================================================
//
// CONVERT WORKFLOW: Scan -> select -> convert
//
// Resolves the run configuration from the parsed arguments, scans the
// library, asks the operator about every book and dispatches the accepted
// ones to the converter. Finding nothing or selecting nothing is a normal
// outcome; only configuration and filesystem problems are errors.

// ---- Internal crate imports ----
use crate::cli::Cli;
use crate::error::CliResult;

// ---- External crate imports ----
use bionify_core::config::LIBRARY_PATH_ENV;
use bionify_core::{
    BatchDispatcher, CommandConverter, ConverterCommand, CoreConfig, CoreError, FormatSet,
    Reporter, find_ebook_files, prompt_for_selection,
};
use log::{debug, info};

// ---- Standard library imports ----
use std::io::{self, BufRead, Write};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Builds the run configuration from the parsed arguments.
///
/// A missing or empty library path is `CoreError::ConfigurationMissing`.
pub fn resolve_config(args: &Cli) -> CliResult<CoreConfig> {
    let library_root = args
        .library
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| CoreError::ConfigurationMissing(LIBRARY_PATH_ENV.to_string()))?;

    let converter: ConverterCommand = args.converter.parse()?;

    let config = CoreConfig::new(library_root)
        .with_formats(FormatSet::new(&args.formats))
        .with_converter(converter);
    config.validate()?;
    Ok(config)
}

// ============================================================================
// WORKFLOW
// ============================================================================

/// Runs the full workflow against the process's standard streams.
pub fn run_convert(args: &Cli, reporter: &dyn Reporter) -> CliResult<()> {
    let config = resolve_config(args)?;
    info!("Library: {}", config.library_root.display());
    info!("Formats: {}", config.formats);
    info!("Converter: {}", config.converter);

    let mut output = io::stdout();
    if args.list {
        return list_books(&config, reporter, &mut output);
    }
    convert_books(&config, reporter, &mut io::stdin().lock(), &mut output)
}

/// Prints the path of every discovered book, one per line.
pub fn list_books<W: Write>(
    config: &CoreConfig,
    reporter: &dyn Reporter,
    output: &mut W,
) -> CliResult<()> {
    reporter.scan_started(&config.library_root);
    let files = find_ebook_files(&config.library_root, &config.formats)?;
    reporter.scan_complete(files.len());

    for file in &files {
        writeln!(output, "{}", file.path().display())?;
    }
    Ok(())
}

/// Scans, prompts on `input`/`output`, then converts the selection.
pub fn convert_books<R: BufRead, W: Write>(
    config: &CoreConfig,
    reporter: &dyn Reporter,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    reporter.scan_started(&config.library_root);
    let files = find_ebook_files(&config.library_root, &config.formats)?;
    reporter.scan_complete(files.len());
    if files.is_empty() {
        return Ok(());
    }

    reporter.selection_started(files.len());
    let batch = prompt_for_selection(&files, input, output)?;
    if batch.unanswered() > 0 {
        reporter.warning(&format!(
            "Input ended before every book was answered; {} book(s) left unselected.",
            batch.unanswered()
        ));
    }
    reporter.selection_complete(batch.len(), files.len());
    if batch.is_empty() {
        return Ok(());
    }

    let converter = CommandConverter::new(config.converter.clone());
    let summary = BatchDispatcher::new(converter, reporter).dispatch(&batch)?;
    debug!(
        "{} of {} selected book(s) converted",
        summary.succeeded(),
        summary.len()
    );
    Ok(())
}
