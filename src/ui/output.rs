//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Progress lines (running, success) respect the quiet flag. Failure
//! details and verdict lines are always written since they explain the
//! exit code.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
}

impl Verbosity {
    /// Create verbosity from the quiet flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a fatal error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{} 💥", message);
}

/// Writes the progress and summary of a task run.
pub struct Reporter<W: Write> {
    out: W,
    verbosity: Verbosity,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    /// Consume the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// A task is about to run.
    pub fn running(&mut self, name: &str) -> io::Result<()> {
        if self.quiet() {
            return Ok(());
        }
        write!(self.out, "Running task {}... ⏳ ", name)?;
        self.out.flush()
    }

    /// A task succeeded with `output` (possibly empty).
    pub fn success(&mut self, output: &str) -> io::Result<()> {
        if self.quiet() {
            return Ok(());
        }
        if output.is_empty() {
            write!(self.out, "Success ✅\n\n")
        } else {
            write!(self.out, "Success ✅\n\n{}\n", output)
        }
    }

    /// A task failed with `message`.
    ///
    /// In quiet mode no running line precedes this, so the task is named.
    pub fn failure(&mut self, name: &str, message: impl Display) -> io::Result<()> {
        if self.quiet() {
            write!(self.out, "Task {} failed ❌\n\n{}\n", name, message)
        } else {
            write!(self.out, "Failure ❌\n\n{}\n", message)
        }
    }

    /// No task was applicable.
    pub fn nothing_to_do(&mut self) -> io::Result<()> {
        writeln!(self.out, "Nothing to do 💤")
    }

    /// Some tasks failed.
    pub fn failed(&mut self, failures: usize) -> io::Result<()> {
        if failures == 1 {
            write!(self.out, "Got 1 failure. Please fix it and try again ⚠️ \n\n")
        } else {
            write!(
                self.out,
                "Got {} failures. Please fix them and try again ⚠️ \n\n",
                failures
            )
        }
    }

    /// Every task that ran succeeded.
    pub fn completed(&mut self, successes: usize, elapsed: Duration) -> io::Result<()> {
        write!(
            self.out,
            "{} tasks completed successfully in {} ✨\n\n",
            successes,
            format_elapsed(elapsed)
        )
    }
}

/// Format a duration rounded to the millisecond, e.g. `0s`, `12ms`,
/// `1.5s`, `2m3.25s`, `1h0m0s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = (elapsed.as_micros() + 500) / 1000;
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let hours = millis / 3_600_000;
    let minutes = millis % 3_600_000 / 60_000;
    let seconds = format_seconds(millis % 60_000);

    if hours > 0 {
        format!("{}h{}m{}", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}", minutes, seconds)
    } else {
        seconds
    }
}

fn format_seconds(millis: u128) -> String {
    let whole = millis / 1000;
    let frac = millis % 1000;
    if frac == 0 {
        format!("{}s", whole)
    } else {
        let frac = format!("{:03}", frac);
        format!("{}.{}s", whole, frac.trim_end_matches('0'))
    }
}
