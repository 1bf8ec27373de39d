//! run command - Run the tasks relevant to the current changes

use crate::core::config::Config;
use crate::engine::{run_tasks, Context, ShellExecutor};
use crate::git::ChangeSet;
use crate::ui::output::{Reporter, Verbosity};
use anyhow::{Context as _, Result};
use std::io::Write;

/// Run the configured tasks, writing progress to `out`.
///
/// Returns the exit code for the run: 1 if any task failed (or nothing ran
/// and `fail_when_idle` is set), 0 otherwise.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `all` - Run every task without consulting git
/// * `out` - Where progress and the verdict are written
///
/// # Errors
///
/// Configuration and change-set failures abort before any task runs.
pub fn run(ctx: &Context, all: bool, out: impl Write) -> Result<u8> {
    let cwd = ctx.working_dir()?;
    let config = Config::load(&cwd).context("Failed to get config")?;
    let settings = config.settings();

    let changes = if all {
        None
    } else {
        let changes = ChangeSet::inspect(&cwd, settings.changes)
            .context("Error determining files with changes")?;
        Some(changes)
    };

    let executor = ShellExecutor::new(&cwd);
    let mut reporter = Reporter::new(out, Verbosity::from_quiet(ctx.quiet));
    let report = run_tasks(config.tasks(), changes.as_ref(), &executor, &mut reporter)
        .context("Failed to write output")?;

    tracing::debug!(
        successes = report.successes,
        failures = report.failures,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "run finished"
    );

    Ok(report.exit_code(settings.fail_when_idle))
}
