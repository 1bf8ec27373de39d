//! engine
//!
//! Task selection and execution.
//!
//! # Architecture
//!
//! ```text
//! Config tasks -> select (against ChangeSet) -> execute -> report
//! ```
//!
//! - [`select`] decides per task whether it applies
//! - [`exec`] runs one task's command through the platform shell
//! - [`runner`] drives the loop and produces a [`RunReport`]
//!
//! # Invariants
//!
//! - Tasks run one at a time, in configured order
//! - The change-set is computed at most once per run and never when every
//!   task runs unconditionally
//! - Task failures are counted, never propagated as errors

pub mod exec;
pub mod runner;
pub mod select;

pub use exec::{ExecError, Execute, ShellExecutor};
pub use runner::{run_tasks, RunReport, Verdict};
pub use select::select;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// The directory Ready operates in: `--cwd` if given, else the process
    /// working directory.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}
