//! git
//!
//! Everything Ready needs from Git.
//!
//! # Responsibilities
//!
//! - Repository discovery and hook directory lookup (`git2`)
//! - Change-set queries (`git diff` subprocess, output kept as text)
//!
//! No other module talks to git directly.
//!
//! # Example
//!
//! ```ignore
//! use ready::git::{ChangeMode, ChangeSet, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let changes = ChangeSet::inspect(Path::new("."), ChangeMode::Staged)?;
//! if changes.mentions("web") {
//!     println!("web changed");
//! }
//! ```

mod changes;
mod interface;

pub use changes::{ChangeMode, ChangeSet};
pub use interface::{Git, GitError};
