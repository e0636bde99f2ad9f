//! Utilities for running external commands with captured output

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of one external command invocation.
///
/// Unlike `std::process::Output` this carries the exit code directly, so
/// callers (and test doubles) can classify it without platform-specific
/// `ExitStatus` construction.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Run a command synchronously and capture its output.
///
/// Blocks until the child exits; no timeout is enforced. A non-zero exit
/// code is NOT treated as an error here — callers classify the code
/// themselves, since some non-zero codes are expected outcomes.
pub fn run_command(program: &Path, args: &[String]) -> Result<CommandOutput> {
    debug!("Running command: {} {}", program.display(), args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to execute {}", program.display()))?;

    Ok(output.into())
}
