//! Interactive selection of the books to convert.
//!
//! Every discovered file gets one yes/no question. Only the token `y`
//! (case-insensitive, surrounding whitespace ignored) accepts; anything else
//! rejects, and there is no "please retry" path.

use crate::discovery::DiscoveredFile;
use crate::error::CoreResult;

use std::io::{BufRead, Write};

/// The operator-approved files, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedBatch {
    files: Vec<DiscoveredFile>,
    unanswered: usize,
}

impl SelectedBatch {
    pub(crate) fn new(files: Vec<DiscoveredFile>, unanswered: usize) -> Self {
        Self { files, unanswered }
    }

    pub fn files(&self) -> &[DiscoveredFile] {
        &self.files
    }

    /// Files rejected because input ended before they were answered.
    pub fn unanswered(&self) -> usize {
        self.unanswered
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Returns true if an operator response accepts the file.
pub fn is_affirmative(response: &str) -> bool {
    response.trim().eq_ignore_ascii_case("y")
}

/// Asks the operator about each file in turn and returns the accepted ones.
///
/// Blocks on `input` until every file has an answer. If `input` reaches end
/// of file first, the files not yet asked about are rejected.
///
/// # Errors
///
/// `CoreError::Io` if writing a prompt or reading a response fails.
pub fn prompt_for_selection<R, W>(
    files: &[DiscoveredFile],
    input: &mut R,
    output: &mut W,
) -> CoreResult<SelectedBatch>
where
    R: BufRead,
    W: Write,
{
    let mut selected = Vec::new();
    let mut unanswered = 0;
    let mut line = String::new();

    for (index, file) in files.iter().enumerate() {
        write!(
            output,
            "Would you like to convert '{}'? (y/n): ",
            file.display_name()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            unanswered = files.len() - index;
            log::info!(
                "Input closed before all books were answered; rejecting the remaining {}",
                unanswered
            );
            break;
        }

        let accepted = is_affirmative(&line);
        log::debug!(
            "{} '{}'",
            if accepted { "Accepted" } else { "Rejected" },
            file.display_name()
        );
        if accepted {
            selected.push(file.clone());
        }
    }

    Ok(SelectedBatch::new(selected, unanswered))
}
