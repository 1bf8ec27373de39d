//! Ready - a git pre-commit task runner
//!
//! Ready reads a list of tasks (a name, a shell command and an optional
//! directory), works out which of them the pending changes affect, runs
//! those one after another and fails the commit if any of them fail.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches)
//! - [`engine`] - Task selection, execution and the run loop
//! - [`core`] - Task file schema and loading, pre-commit hook script
//! - [`git`] - Repository discovery and change-set queries
//! - [`ui`] - User-facing output and prompts
//! - [`logging`] - Developer diagnostics
//! - [`signals`] - Interrupt handling
//!
//! # Guarantees
//!
//! 1. Tasks run sequentially in configured order
//! 2. A failing task never prevents later tasks from running
//! 3. The exit code is 1 whenever any task failed

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod logging;
pub mod signals;
pub mod ui;
