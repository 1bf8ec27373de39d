//! engine::exec
//!
//! Runs a single task's command through the platform shell.
//!
//! # Output
//!
//! Standard output and standard error are captured and joined (stdout
//! first) into one text blob. Nothing is streamed; the call blocks until the
//! command exits.
//!
//! # Failures
//!
//! A failing command that printed something fails with exactly that text,
//! so the user sees the tool's own diagnostics. A failing command that
//! printed nothing fails with the process error instead.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::core::config::Task;

/// Errors from running a task.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The shell could not be started (bad directory, missing shell).
    #[error("failed to start command: {0}")]
    Spawn(#[source] std::io::Error),

    /// The command failed without printing anything.
    #[error("command exited with {0}")]
    Exit(ExitStatus),

    /// The command failed; the message is its captured output.
    #[error("{0}")]
    Output(String),
}

/// Something that can run a task and capture its output.
pub trait Execute {
    /// Run `task`, returning its captured output on success.
    fn run(&self, task: &Task) -> Result<String, ExecError>;
}

/// Runs tasks with `/bin/sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    cwd: PathBuf,
}

impl ShellExecutor {
    /// Create an executor whose relative task directories resolve against
    /// `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Directory the task's command runs in.
    pub fn working_dir(&self, task: &Task) -> PathBuf {
        match task.directory() {
            Some(dir) => self.cwd.join(dir),
            None => self.cwd.clone(),
        }
    }

    fn shell_command(command: &str, dir: &Path) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        } else {
            let mut cmd = Command::new("/bin/sh");
            cmd.args(["-c", command]);
            cmd
        };
        cmd.current_dir(dir);
        cmd
    }
}

impl Execute for ShellExecutor {
    fn run(&self, task: &Task) -> Result<String, ExecError> {
        let dir = self.working_dir(task);
        tracing::debug!(task = %task.name, dir = %dir.display(), "running command");

        let output = Self::shell_command(&task.command, &dir)
            .output()
            .map_err(ExecError::Spawn)?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(task = %task.name, status = %output.status, "command finished");

        if output.status.success() {
            Ok(combined)
        } else if combined.is_empty() {
            Err(ExecError::Exit(output.status))
        } else {
            Err(ExecError::Output(combined))
        }
    }
}
