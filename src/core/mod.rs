//! core
//!
//! Core domain types for Ready.
//!
//! # Modules
//!
//! - [`config`] - Task file schema and loading
//! - [`hook`] - Pre-commit hook script and installation

pub mod config;
pub mod hook;
