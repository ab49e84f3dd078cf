//! Batch conversion of the selected books.
//!
//! The dispatcher hands each selected book to a [`Converter`](crate::external::Converter)
//! in order, keeping a per-file outcome, while the progress indicator runs
//! beside it.

/// Sequential dispatch loop and its outcome types
pub mod batch;

pub use batch::{BatchDispatcher, BatchSummary, ConversionOutcome};
