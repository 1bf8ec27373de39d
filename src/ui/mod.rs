//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive confirmations
//! - [`output`] - Output formatting and the run reporter
//!
//! # Design
//!
//! Everything the user reads goes through this module. Developer
//! diagnostics go through `tracing` instead (see [`crate::logging`]).

pub mod output;
pub mod prompts;
