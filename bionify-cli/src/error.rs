// ============================================================================
// bionify-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias shared with bionify-core
//
// The CLI has no error type of its own. Failures specific to the CLI (logger
// setup, log directory creation) are expressed as
// `CoreError::OperationFailed`.

use bionify_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Wraps a displayable failure with context as `CoreError::OperationFailed`.
pub fn operation_failed(context: impl std::fmt::Display, cause: impl std::fmt::Display) -> CoreError {
    CoreError::OperationFailed(format!("{context}: {cause}"))
}
