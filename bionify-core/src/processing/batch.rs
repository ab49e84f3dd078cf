// ============================================================================
// bionify-core/src/processing/batch.rs
// ============================================================================
//
// BATCH DISPATCH: Run the converter once per selected book
//
// Books are converted strictly one after another on the calling thread. A
// failed conversion is recorded and reported, then the loop moves on to the
// next book. The progress indicator wraps the whole loop and is joined before
// `dispatch` returns.

// ---- Internal crate imports ----
use crate::discovery::DiscoveredFile;
use crate::error::CoreResult;
use crate::external::Converter;
use crate::progress::{DEFAULT_TICK_INTERVAL, ProgressIndicator};
use crate::reporting::Reporter;
use crate::selection::SelectedBatch;

// ---- Standard library imports ----
use std::time::Duration;

// ---- External crate imports ----
use log::{debug, info};

/// Message shown beside the spinner while a batch runs.
pub const CONVERTING_MESSAGE: &str = "Converting your books now";

/// Result of converting one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted { file: DiscoveredFile },
    Failed { file: DiscoveredFile, message: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }
}

/// Outcomes of one dispatch, in batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    outcomes: Vec<ConversionOutcome>,
}

impl BatchSummary {
    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Outcomes that carry a failure, in batch order.
    pub fn failures(&self) -> impl Iterator<Item = (&DiscoveredFile, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ConversionOutcome::Failed { file, message } => Some((file, message.as_str())),
            ConversionOutcome::Converted { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Converts a [`SelectedBatch`] with the given converter.
///
/// The summary is informational. Individual failures never turn into an
/// `Err`; only misuse of the progress indicator does.
pub struct BatchDispatcher<'r, C> {
    converter: C,
    reporter: &'r dyn Reporter,
    tick_interval: Duration,
}

impl<'r, C: Converter> BatchDispatcher<'r, C> {
    pub fn new(converter: C, reporter: &'r dyn Reporter) -> Self {
        Self {
            converter,
            reporter,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Overrides the spinner frame interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn dispatch(&self, batch: &SelectedBatch) -> CoreResult<BatchSummary> {
        if batch.is_empty() {
            info!("Nothing selected; converter not invoked");
            let summary = BatchSummary::default();
            self.reporter.batch_complete(&summary);
            return Ok(summary);
        }

        let mut indicator = ProgressIndicator::new(CONVERTING_MESSAGE, self.reporter)
            .with_interval(self.tick_interval);
        let summary = indicator.run_while(|| self.convert_all(batch))?;

        info!(
            "Batch finished: {} converted, {} failed",
            summary.succeeded(),
            summary.failed()
        );
        self.reporter.batch_complete(&summary);
        Ok(summary)
    }

    fn convert_all(&self, batch: &SelectedBatch) -> BatchSummary {
        let total = batch.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, file) in batch.files().iter().enumerate() {
            self.reporter.conversion_started(file, index + 1, total);

            let outcome = match self.converter.convert(file.path()) {
                Ok(()) => {
                    self.reporter.conversion_succeeded(file);
                    ConversionOutcome::Converted { file: file.clone() }
                }
                Err(e) => {
                    let message = e.to_string();
                    debug!("Error processing {}: {}", file.path().display(), message);
                    self.reporter.conversion_failed(file, &message);
                    ConversionOutcome::Failed {
                        file: file.clone(),
                        message,
                    }
                }
            };
            outcomes.push(outcome);
        }

        BatchSummary { outcomes }
    }
}
