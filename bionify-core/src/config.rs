//! Configuration structures and constants for the bionify-core library.
//!
//! A [`CoreConfig`] is built once per run by the consumer (bionify-cli) and
//! handed to the scanner and dispatcher. Nothing here is global.

use crate::error::{CoreError, CoreResult};

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// Default constants

/// Extensions scanned for when the caller supplies no allow-list.
pub const DEFAULT_FORMATS: &[&str] = &["epub", "mobi", "pdf", "azw3", "fb2"];

/// Converter invoked for each selected book unless overridden.
pub const DEFAULT_CONVERTER_COMMAND: &str = "python apply_bioread.py";

/// Environment variable holding the library root.
pub const LIBRARY_PATH_ENV: &str = "CALIBRE_LIBRARY_PATH";

/// Environment variable holding the converter command.
pub const CONVERTER_ENV: &str = "BIONIFY_CONVERTER";

/// Case-insensitive set of file extensions, stored without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    extensions: BTreeSet<String>,
}

impl FormatSet {
    /// Builds an allow-list from user-supplied extensions.
    ///
    /// Entries are trimmed, stripped of a leading `.` and lower-cased. If no
    /// usable entry remains the default allow-list is returned instead.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut supplied = 0usize;
        let extensions: BTreeSet<String> = extensions
            .into_iter()
            .inspect(|_| supplied += 1)
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();

        if extensions.is_empty() {
            let formats = Self::default();
            if supplied > 0 {
                log::warn!(
                    "No usable extension in the {} format override(s); using the default formats ({})",
                    supplied,
                    formats
                );
            }
            formats
        } else {
            Self { extensions }
        }
    }

    /// Returns true if `extension` (with or without a leading dot) is allowed.
    pub fn contains(&self, extension: &str) -> bool {
        normalize_extension(extension).is_some_and(|ext| self.extensions.contains(&ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for FormatSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_FORMATS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl fmt::Display for FormatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}

fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

/// The external converter: a program plus the arguments placed before the
/// book path.
///
/// Parsed from a whitespace-separated string such as
/// `python apply_bioread.py`. Quoting is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    program: String,
    args: Vec<String>,
}

impl ConverterCommand {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for ConverterCommand {
    fn default() -> Self {
        Self::new("python", ["apply_bioread.py"])
    }
}

impl FromStr for ConverterCommand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| CoreError::Config("converter command is empty".to_string()))?;
        Ok(Self::new(program, parts))
    }
}

impl fmt::Display for ConverterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Main configuration structure for one bionify run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Root of the Calibre library to scan
    pub library_root: PathBuf,

    /// Extensions considered e-books
    pub formats: FormatSet,

    /// Converter invoked once per selected book
    pub converter: ConverterCommand,
}

impl CoreConfig {
    /// Creates a configuration for `library_root` with default formats and
    /// converter.
    pub fn new(library_root: PathBuf) -> Self {
        Self {
            library_root,
            formats: FormatSet::default(),
            converter: ConverterCommand::default(),
        }
    }

    pub fn with_formats(mut self, formats: FormatSet) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_converter(mut self, converter: ConverterCommand) -> Self {
        self.converter = converter;
        self
    }

    /// Checks values that cannot be enforced by construction.
    pub fn validate(&self) -> CoreResult<()> {
        if self.library_root.as_os_str().is_empty() {
            return Err(CoreError::ConfigurationMissing(LIBRARY_PATH_ENV.to_string()));
        }
        if self.converter.program().is_empty() {
            return Err(CoreError::Config("converter program is empty".to_string()));
        }
        Ok(())
    }
}
