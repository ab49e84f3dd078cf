//! File discovery module for finding e-books to convert.
//!
//! Walks the whole library tree below the configured root and keeps every
//! file whose extension is on the allow-list (case-insensitive). Entries are
//! visited depth-first and sorted by file name inside each directory, so two
//! scans of an unchanged tree return the same sequence.

use crate::config::FormatSet;
use crate::error::{CoreError, CoreResult};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// A file found by [`find_ebook_files`].
///
/// Only the scanner constructs these, which keeps every selected batch tied
/// to a scan of the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    path: PathBuf,
}

impl DiscoveredFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Full path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the file, used when talking to the operator.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Lower-cased extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        self.path
            .file_name()
            .and_then(OsStr::to_str)
            .and_then(last_extension_segment)
            .map(str::to_ascii_lowercase)
    }
}

/// Recursively finds e-book files under `root`.
///
/// # Errors
///
/// * `CoreError::FilesystemAccess` if `root` does not exist, is not a
///   directory, or cannot be read.
///
/// Unreadable entries below the root are logged and skipped. An empty result
/// is not an error.
///
/// # Examples
///
/// ```rust,no_run
/// use bionify_core::config::FormatSet;
/// use bionify_core::find_ebook_files;
/// use std::path::Path;
///
/// let books = find_ebook_files(Path::new("/home/me/Calibre Library"), &FormatSet::default())?;
/// for book in &books {
///     println!("{}", book.display_name());
/// }
/// # Ok::<(), bionify_core::CoreError>(())
/// ```
pub fn find_ebook_files(root: &Path, formats: &FormatSet) -> CoreResult<Vec<DiscoveredFile>> {
    let metadata = fs::metadata(root).map_err(|e| CoreError::filesystem(root, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::filesystem(root, "not a directory"));
    }
    // Surface an unreadable root as an error rather than an empty library.
    fs::read_dir(root).map_err(|e| CoreError::filesystem(root, e))?;

    let mut files = Vec::new();
    let mut skipped_count = 0usize;
    let mut unreadable_count = 0usize;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(CoreError::filesystem(root, e)),
            Err(e) => {
                log::warn!("Skipping unreadable library entry: {}", e);
                unreadable_count += 1;
                continue;
            }
        };

        if !is_file_entry(&entry) {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .and_then(last_extension_segment)
            .is_some_and(|ext| formats.contains(ext));

        if matches {
            files.push(DiscoveredFile::new(entry.into_path()));
        } else {
            skipped_count += 1;
        }
    }

    log::debug!(
        "Found {} e-book(s) under {} ({} other file(s) skipped, {} unreadable)",
        files.len(),
        root.display(),
        skipped_count,
        unreadable_count
    );
    for file in files.iter().take(5) {
        log::debug!("  {}", file.path().display());
    }
    if files.len() > 5 {
        log::debug!("  ... and {} more", files.len() - 5);
    }

    Ok(files)
}

/// Text after the last `.` of a file name. A leading dot counts, so a file
/// named `.epub` has the extension `epub`.
fn last_extension_segment(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Regular files, plus symlinks that resolve to one. Directory symlinks are
/// not descended into.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
