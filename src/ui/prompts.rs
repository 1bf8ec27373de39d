//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts read from any `BufRead` and write to any `Write` so they can be
//! driven from tests. Only an explicit `yes` counts as consent.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Ask a yes/no question and read one line of answer.
///
/// Returns `Ok(true)` only if the answer is exactly `yes` (surrounding
/// whitespace ignored). End of input counts as a refusal.
pub fn confirm<R, W>(message: &str, input: &mut R, output: &mut W) -> Result<bool, PromptError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{} [yes/no]", message)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim() == "yes")
}
