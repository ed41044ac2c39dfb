//! External process execution
//!
//! One entry point, [`run_streamed`]: spawn a command with a piped stdout,
//! relay that pipe to the console while waiting for the process, then map
//! the exit status to a [`RunOutcome`]. Stderr stays attached to the
//! parent so error output is visible without relaying.

use std::process::{Command, ExitStatus, Stdio};

use self::drain::StreamDrain;

pub mod drain;

/// Tri-state result of one subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The process ran and exited with code zero
    Success,
    /// The process could not be started at all
    LaunchFailure(String),
    /// The process ran but exited unsuccessfully
    ExitFailure(String),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }

    /// The failure diagnostic, consuming the outcome.
    pub fn into_diagnostic(self) -> String {
        match self {
            RunOutcome::Success => "success".to_string(),
            RunOutcome::LaunchFailure(d) | RunOutcome::ExitFailure(d) => d,
        }
    }
}

/// Run an external command, relaying its stdout to the console as it
/// arrives.
///
/// The stdout pipe is configured before the process starts. If the spawn
/// itself fails there is nothing to wait on and the launch error is
/// returned directly. After `wait` returns, the relay is cancelled and
/// joined regardless of exit status.
pub fn run_streamed(program: &str, args: &[String]) -> RunOutcome {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => return RunOutcome::LaunchFailure(e.to_string()),
    };

    // Piped above, so the handle is always present.
    let relay = child.stdout.take().map(StreamDrain::stdout);

    let waited = child.wait();

    if let Some(relay) = relay {
        relay.cancel();
    }

    match waited {
        Ok(status) if status.success() => RunOutcome::Success,
        Ok(status) => RunOutcome::ExitFailure(describe_status(status)),
        Err(e) => RunOutcome::ExitFailure(format!("wait failed: {e}")),
    }
}

/// Check whether a program is invocable at all via a `--version` probe.
pub fn probe(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with code {code}"),
        None => "terminated by signal".to_string(),
    }
}
