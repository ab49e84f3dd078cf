//! Runs the configured converter command as a child process.

use crate::config::ConverterCommand;
use crate::error::{CoreError, CoreResult};
use crate::external::Converter;

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

/// Placeholder used when a failing converter prints nothing.
const NO_DIAGNOSTICS: &str = "no diagnostic output";

/// `Converter` that invokes `program args... <path>` and waits for it.
///
/// There is no timeout. A converter that never exits blocks the batch.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    command: ConverterCommand,
}

impl CommandConverter {
    pub fn new(command: ConverterCommand) -> Self {
        Self { command }
    }
}

impl Converter for CommandConverter {
    fn convert(&self, path: &Path) -> CoreResult<()> {
        let mut cmd = Command::new(self.command.program());
        cmd.args(self.command.args())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Running converter: {} {}", self.command, path.display());

        let output = cmd.output().map_err(|e| CoreError::ConverterLaunch {
            program: self.command.program().to_string(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stdout.lines() {
            debug!("converter stdout: {}", line);
        }
        for line in stderr.lines() {
            debug!("converter stderr: {}", line);
        }

        if output.status.success() {
            if let Some(notes) = success_notes(&stderr) {
                warn!("Converter reported for {}: {}", path.display(), notes);
            }
            return Ok(());
        }

        let diagnostics = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .unwrap_or(NO_DIAGNOSTICS)
            .to_string();

        Err(CoreError::ConversionFailed {
            path: path.to_path_buf(),
            status: describe_status(output.status),
            diagnostics,
        })
    }
}

/// Trimmed stderr of a successful run, if it printed anything.
fn success_notes(stderr: &str) -> Option<&str> {
    Some(stderr.trim()).filter(|text| !text.is_empty())
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
