use super::Reporter;
use crate::discovery::DiscoveredFile;
use crate::processing::BatchSummary;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Spinner glyphs; the final entry is shown once the spinner finishes.
const SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\", " "];

/// Human-friendly reporter that prints concise text output.
///
/// Status lines go to stdout. While the spinner is active they are printed
/// through [`ProgressBar::suspend`] so the spinner line is redrawn below
/// them instead of being overwritten.
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn print_line(&self, line: impl Display) {
        match self.spinner().as_ref() {
            Some(pb) => pb.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }
}

impl Reporter for TerminalReporter {
    fn scan_started(&self, root: &Path) {
        self.print_line(style("Scanning your Calibre library...").bold().cyan());
        log::info!("Scanning {}", root.display());
    }

    fn scan_complete(&self, found: usize) {
        if found == 0 {
            self.print_line(style("No ebooks found in the specified Calibre library.").yellow());
        } else {
            self.print_line(format!(
                "\nFound {} ebooks in your library.",
                style(found).bold()
            ));
        }
    }

    fn selection_started(&self, _candidates: usize) {
        self.print_line("\nPlease decide if you want each book converted:\n");
    }

    fn selection_complete(&self, selected: usize, _candidates: usize) {
        if selected == 0 {
            self.print_line(style("No books selected for conversion. Exiting.").yellow());
        } else {
            self.print_line(format!(
                "\nYou selected {} book(s) for conversion.",
                style(selected).bold()
            ));
        }
    }

    fn indicator_started(&self, message: &str) {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);

        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());

        let mut guard = self.spinner();
        if let Some(previous) = guard.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn indicator_tick(&self) {
        if let Some(pb) = self.spinner().as_ref() {
            pb.tick();
        }
    }

    fn indicator_stopped(&self) {
        if let Some(pb) = self.spinner().take() {
            pb.finish_and_clear();
        }
    }

    fn conversion_started(&self, file: &DiscoveredFile, position: usize, total: usize) {
        self.print_line(format!(
            "  {} {}",
            style(format!("[{position}/{total}]")).dim(),
            file.display_name()
        ));
    }

    fn conversion_succeeded(&self, file: &DiscoveredFile) {
        self.print_line(format!("  {} {}", style("✓").green(), file.display_name()));
    }

    fn conversion_failed(&self, file: &DiscoveredFile, message: &str) {
        self.print_line(format!(
            "  {} Error processing {}: {}",
            style("✗").red().bold(),
            file.path().display(),
            message
        ));
    }

    fn batch_complete(&self, summary: &BatchSummary) {
        self.print_line(style("\nConversion completed!").green().bold());
        if summary.failed() > 0 {
            self.print_line(format!(
                "  {} converted, {} failed",
                summary.succeeded(),
                style(summary.failed()).red().bold()
            ));
        }
    }

    fn warning(&self, message: &str) {
        self.print_line(format!("{} {}", style("Warning:").yellow().bold(), message));
    }
}
