//! Reporting interface for the scan → select → convert workflow.
//!
//! The core library never prints directly. Every user-visible event goes
//! through a [`Reporter`]; the CLI plugs in [`TerminalReporter`], tests plug
//! in recorders, and [`NullReporter`] discards everything.

mod terminal;

pub use terminal::TerminalReporter;

use crate::discovery::DiscoveredFile;
use crate::processing::BatchSummary;

use std::path::Path;

/// Receives workflow events. Every method defaults to a no-op.
///
/// Must be `Send + Sync`: the progress indicator thread calls the
/// `indicator_*` methods while the dispatcher calls the others.
pub trait Reporter: Send + Sync {
    fn scan_started(&self, _root: &Path) {}
    fn scan_complete(&self, _found: usize) {}
    fn selection_started(&self, _candidates: usize) {}
    fn selection_complete(&self, _selected: usize, _candidates: usize) {}
    fn indicator_started(&self, _message: &str) {}
    fn indicator_tick(&self) {}
    fn indicator_stopped(&self) {}
    fn conversion_started(&self, _file: &DiscoveredFile, _position: usize, _total: usize) {}
    fn conversion_succeeded(&self, _file: &DiscoveredFile) {}
    fn conversion_failed(&self, _file: &DiscoveredFile, _message: &str) {}
    fn batch_complete(&self, _summary: &BatchSummary) {}
    fn warning(&self, _message: &str) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}
