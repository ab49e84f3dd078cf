//! Command implementations for the Bionify CLI.

/// Scan, select and convert workflow
pub mod convert;
