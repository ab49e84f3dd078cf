// bionify-core/tests/common/mod.rs
//
// Shared fixtures for the integration tests: a temporary library, a mock
// converter and a reporter that records every event.

#![allow(dead_code)]

use bionify_core::{
    BatchSummary, Converter, CoreError, CoreResult, DiscoveredFile, FormatSet, Reporter,
    SelectedBatch, find_ebook_files, prompt_for_selection,
};
use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::{TempDir, tempdir};

/// Creates `relative_paths` (with parent directories) under a fresh temp dir.
pub fn create_library(relative_paths: &[&str]) -> TempDir {
    let dir = tempdir().expect("Failed to create temp library");
    for relative in relative_paths {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create library directory");
        }
        fs::write(&path, b"dummy book").expect("Failed to write dummy book");
    }
    dir
}

/// File names (no directories) of a scan result, in order.
pub fn names(files: &[DiscoveredFile]) -> Vec<String> {
    files.iter().map(DiscoveredFile::display_name).collect()
}

/// Scans `root` with the default allow-list and accepts every book.
pub fn select_all(root: &Path) -> (Vec<DiscoveredFile>, SelectedBatch) {
    let files = find_ebook_files(root, &FormatSet::default()).expect("Scan failed");
    let answers = "y\n".repeat(files.len());
    let batch = prompt_for_selection(&files, &mut Cursor::new(answers), &mut Vec::new())
        .expect("Selection failed");
    (files, batch)
}

/// Converter that fails for the configured file names and records every call.
#[derive(Default)]
pub struct MockConverter {
    failing: HashSet<String>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Converter for MockConverter {
    fn convert(&self, path: &Path) -> CoreResult<()> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            Err(CoreError::ConversionFailed {
                path: path.to_path_buf(),
                status: "exit status 1".to_string(),
                diagnostics: format!("mock failure for {name}"),
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    IndicatorStarted(String),
    IndicatorTick,
    IndicatorStopped,
    ConversionStarted { name: String, position: usize, total: usize },
    ConversionSucceeded(String),
    ConversionFailed { name: String, message: String },
    BatchComplete { succeeded: usize, failed: usize },
}

/// Reporter that keeps every dispatch event in arrival order.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    pub fn position(&self, predicate: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events().iter().position(predicate)
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn indicator_started(&self, message: &str) {
        self.push(Event::IndicatorStarted(message.to_string()));
    }

    fn indicator_tick(&self) {
        self.push(Event::IndicatorTick);
    }

    fn indicator_stopped(&self) {
        self.push(Event::IndicatorStopped);
    }

    fn conversion_started(&self, file: &DiscoveredFile, position: usize, total: usize) {
        self.push(Event::ConversionStarted {
            name: file.display_name(),
            position,
            total,
        });
    }

    fn conversion_succeeded(&self, file: &DiscoveredFile) {
        self.push(Event::ConversionSucceeded(file.display_name()));
    }

    fn conversion_failed(&self, file: &DiscoveredFile, message: &str) {
        self.push(Event::ConversionFailed {
            name: file.display_name(),
            message: message.to_string(),
        });
    }

    fn batch_complete(&self, summary: &BatchSummary) {
        self.push(Event::BatchComplete {
            succeeded: summary.succeeded(),
            failed: summary.failed(),
        });
    }
}
