//! Core library for scanning a Calibre library and batch-converting the
//! books an operator picks with an external converter script.
//!
//! The workflow is strictly linear: [`find_ebook_files`] scans the library,
//! [`prompt_for_selection`] asks about each book, and [`BatchDispatcher`]
//! runs the converter once per accepted book while a progress indicator
//! ticks beside it.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use bionify_core::{
//!     BatchDispatcher, CommandConverter, CoreConfig, TerminalReporter, find_ebook_files,
//!     prompt_for_selection,
//! };
//! use std::io;
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/Calibre Library"));
//! config.validate().unwrap();
//!
//! let files = find_ebook_files(&config.library_root, &config.formats).unwrap();
//! let batch = prompt_for_selection(&files, &mut io::stdin().lock(), &mut io::stdout()).unwrap();
//!
//! let reporter = TerminalReporter::new();
//! let converter = CommandConverter::new(config.converter.clone());
//! let summary = BatchDispatcher::new(converter, &reporter).dispatch(&batch).unwrap();
//! println!("{} converted", summary.succeeded());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod progress;
pub mod reporting;
pub mod selection;

// Re-exports for public API
pub use config::{ConverterCommand, CoreConfig, FormatSet};
pub use discovery::{DiscoveredFile, find_ebook_files};
pub use error::{CoreError, CoreResult};
pub use external::{CommandConverter, Converter};
pub use processing::{BatchDispatcher, BatchSummary, ConversionOutcome};
pub use progress::{IndicatorState, ProgressIndicator};
pub use reporting::{NullReporter, Reporter, TerminalReporter};
pub use selection::{SelectedBatch, is_affirmative, prompt_for_selection};
