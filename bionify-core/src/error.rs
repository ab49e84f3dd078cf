//! Error types for bionify-core.
//!
//! Configuration and filesystem errors end the run. Converter errors are
//! per-file: the batch dispatcher records them and moves on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0} is not set. Point it at the root of your Calibre library.")]
    ConfigurationMissing(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot access library at {path}: {reason}")]
    FilesystemAccess { path: PathBuf, reason: String },

    #[error("Failed to launch converter '{program}': {source}")]
    ConverterLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Converter failed ({status}): {diagnostics}")]
    ConversionFailed {
        path: PathBuf,
        status: String,
        diagnostics: String,
    },

    #[error("Progress indicator has already been started")]
    IndicatorAlreadyStarted,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for bionify-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Builds a `FilesystemAccess` error for `path` from any displayable cause.
    pub(crate) fn filesystem<P, R>(path: P, reason: R) -> Self
    where
        P: Into<PathBuf>,
        R: ToString,
    {
        CoreError::FilesystemAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
