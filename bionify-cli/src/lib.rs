//! Library component for the Bionify CLI application.
//!
//! Holds the argument definitions, logging setup and the convert workflow
//! that the binary wires together.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup and helper functions
pub mod logging;

// Re-exports for convenience
pub use cli::{Cli, parse_cli, parse_cli_from};
pub use commands::convert::run_convert;
