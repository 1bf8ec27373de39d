//! engine::runner
//!
//! The run loop: select, execute, count, report.
//!
//! # Invariants
//!
//! - Tasks are visited once each, in configured order
//! - A failing task never stops the loop; every selected task gets to run
//! - The verdict depends only on the final counters

use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::exec::Execute;
use super::select::select;
use crate::core::config::Task;
use crate::git::ChangeSet;
use crate::ui::output::Reporter;

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Tasks that ran and succeeded
    pub successes: usize,
    /// Tasks that ran and failed
    pub failures: usize,
    /// Wall-clock time of the whole loop
    pub elapsed: Duration,
}

/// Final outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No task was applicable.
    Idle,
    /// At least one task failed.
    Failed(usize),
    /// Every task that ran succeeded.
    Passed(usize),
}

impl RunReport {
    /// Number of tasks that ran.
    pub fn ran(&self) -> usize {
        self.successes + self.failures
    }

    /// Classify the run.
    pub fn verdict(&self) -> Verdict {
        if self.ran() == 0 {
            Verdict::Idle
        } else if self.failures > 0 {
            Verdict::Failed(self.failures)
        } else {
            Verdict::Passed(self.successes)
        }
    }

    /// Process exit code for this run.
    ///
    /// `fail_when_idle` decides whether a run with nothing to do blocks the
    /// commit.
    pub fn exit_code(&self, fail_when_idle: bool) -> u8 {
        match self.verdict() {
            Verdict::Idle if fail_when_idle => 1,
            Verdict::Idle | Verdict::Passed(_) => 0,
            Verdict::Failed(_) => 1,
        }
    }
}

/// Run every applicable task and report progress and the verdict.
///
/// `changes` is `None` to run every task regardless of what changed.
///
/// # Errors
///
/// Only failures to write to the reporter are errors; task failures are
/// counted in the returned report.
pub fn run_tasks<E, W>(
    tasks: &[Task],
    changes: Option<&ChangeSet>,
    executor: &E,
    reporter: &mut Reporter<W>,
) -> io::Result<RunReport>
where
    E: Execute + ?Sized,
    W: Write,
{
    let start = Instant::now();
    let mut report = RunReport::default();

    for task in tasks {
        if !select(task, changes) {
            tracing::debug!(task = %task.name, "skipped");
            continue;
        }

        reporter.running(&task.name)?;

        match executor.run(task) {
            Ok(output) => {
                report.successes += 1;
                reporter.success(&output)?;
            }
            Err(err) => {
                tracing::debug!(task = %task.name, error = ?err, "task failed");
                report.failures += 1;
                reporter.failure(&task.name, &err)?;
            }
        }
    }

    report.elapsed = start.elapsed();

    match report.verdict() {
        Verdict::Idle => reporter.nothing_to_do()?,
        Verdict::Failed(failures) => reporter.failed(failures)?,
        Verdict::Passed(successes) => reporter.completed(successes, report.elapsed)?,
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::exec::ExecError;
    use crate::ui::output::Verbosity;
    use std::cell::RefCell;

    /// Executor that fails tasks whose command is `fail` and records calls.
    #[derive(Default)]
    struct FakeExecutor {
        calls: RefCell<Vec<String>>,
    }

    impl Execute for FakeExecutor {
        fn run(&self, task: &Task) -> Result<String, ExecError> {
            self.calls.borrow_mut().push(task.name.clone());
            match task.command.as_str() {
                "fail" => Err(ExecError::Output(format!("{} broke", task.name))),
                "quiet" => Ok(String::new()),
                other => Ok(other.to_string()),
            }
        }
    }

    fn run(tasks: &[Task], changes: Option<&ChangeSet>) -> (RunReport, Vec<String>, String) {
        let exec = FakeExecutor::default();
        let mut reporter = Reporter::new(Vec::new(), Verbosity::Normal);
        let report = run_tasks(tasks, changes, &exec, &mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        (report, exec.calls.into_inner(), text)
    }

    #[test]
    fn failure_in_the_middle_does_not_stop_the_loop() {
        let tasks = [
            Task::new("one", "ok"),
            Task::new("two", "fail"),
            Task::new("three", "ok"),
        ];
        let (report, calls, text) = run(&tasks, None);

        assert_eq!(calls, ["one", "two", "three"]);
        assert_eq!(report.successes, 2);
        assert_eq!(report.failures, 1);
        assert_eq!(report.verdict(), Verdict::Failed(1));
        assert_eq!(report.exit_code(false), 1);
        assert!(text.contains("Failure ❌\n\ntwo broke\n"));
        assert!(text.contains("Got 1 failure"));
    }

    #[test]
    fn nothing_applicable_is_idle() {
        let tasks = [Task::new("one", "ok"), Task::new("web", "ok").in_directory("web")];
        let changes = ChangeSet::from_output("");
        let (report, calls, text) = run(&tasks, Some(&changes));

        assert!(calls.is_empty());
        assert_eq!(report.ran(), 0);
        assert_eq!(report.verdict(), Verdict::Idle);
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.exit_code(true), 1);
        assert_eq!(text, "Nothing to do 💤\n");
    }

    #[test]
    fn only_matching_directories_run() {
        let tasks = [
            Task::new("api", "ok").in_directory("api"),
            Task::new("web", "ok").in_directory("web"),
            Task::new("all", "quiet"),
        ];
        let changes = ChangeSet::from_output("web/app.ts\n");
        let (report, calls, _) = run(&tasks, Some(&changes));

        assert_eq!(calls, ["web", "all"]);
        assert_eq!(report.verdict(), Verdict::Passed(2));
        assert_eq!(report.exit_code(false), 0);
    }

    #[test]
    fn success_summary_counts_tasks() {
        let tasks = [Task::new("one", "quiet"), Task::new("two", "printed")];
        let (_, _, text) = run(&tasks, None);

        assert!(text.contains("Running task two... ⏳ Success ✅\n\nprinted\n"));
        assert!(text.contains("2 tasks completed successfully in "));
    }

    #[test]
    fn several_failures_are_pluralized() {
        let tasks = [Task::new("a", "fail"), Task::new("b", "fail")];
        let (report, _, text) = run(&tasks, None);

        assert_eq!(report.failures, 2);
        assert!(text.contains("Got 2 failures. Please fix them"));
    }
}
