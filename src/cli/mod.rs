//! cli
//!
//! Command-line interface layer for Ready.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Turn handler results into a process exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which call into [`crate::engine`] and [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::engine;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the exit
/// code the process should end with.
pub fn run() -> Result<u8> {
    let cli = Cli::parse_args();

    crate::logging::init(cli.debug);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, cli.all, &ctx)
}
