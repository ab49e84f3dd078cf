// ============================================================================
// bionify-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interaction with the converter script
//
// The conversion itself is done by an external program. This module defines
// the `Converter` trait the batch dispatcher talks to, and the concrete
// implementation that spawns the configured command as a child process.
// Tests provide their own `Converter` implementations instead of spawning
// processes.

// ---- Standard library imports ----
use std::path::Path;

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Child-process implementation of `Converter`
pub mod command_converter;

pub use command_converter::CommandConverter;

// ============================================================================
// CONVERTER TRAIT
// ============================================================================

/// Converts a single book.
///
/// Conversions always run on the dispatcher's own thread, one at a time.
///
/// # Examples
///
/// ```rust
/// use bionify_core::external::Converter;
/// use bionify_core::CoreResult;
/// use std::path::Path;
///
/// struct AlwaysOk;
///
/// impl Converter for AlwaysOk {
///     fn convert(&self, _path: &Path) -> CoreResult<()> {
///         Ok(())
///     }
/// }
///
/// assert!(AlwaysOk.convert(Path::new("book.epub")).is_ok());
/// ```
pub trait Converter {
    /// Converts the book at `path`, returning an error describing the
    /// failure if the conversion did not succeed.
    fn convert(&self, path: &Path) -> CoreResult<()>;
}

impl<C: Converter + ?Sized> Converter for &C {
    fn convert(&self, path: &Path) -> CoreResult<()> {
        (**self).convert(path)
    }
}
