//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the working directory from the context
//! 2. Calls into the engine or core
//! 3. Writes user-facing output to the writer it is given
//!
//! Handlers take their output (and input, for prompts) as parameters so
//! they can be exercised without a terminal.

mod completion;
mod init;
mod run;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use init::init;
pub use run::run;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::Result;
use std::io;

/// Dispatch a command to its handler, returning the process exit code.
///
/// With no subcommand the task run is performed; `all` is the top-level
/// `--all` flag.
pub fn dispatch(command: Option<Command>, all: bool, ctx: &Context) -> Result<u8> {
    match command {
        None => run::run(ctx, all, io::stdout()),
        Some(Command::Run { all: run_all }) => run::run(ctx, all || run_all, io::stdout()),
        Some(Command::Init { force }) => {
            init::init(ctx, force, &mut io::stdin().lock(), &mut io::stdout())?;
            Ok(0)
        }
        Some(Command::Completion { shell }) => {
            completion::completion(shell, &mut io::stdout())?;
            Ok(0)
        }
    }
}
