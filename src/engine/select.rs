//! engine::select
//!
//! Decides whether a task applies to the current change-set.

use crate::core::config::Task;
use crate::git::ChangeSet;

/// Decide whether `task` should run.
///
/// `changes` is `None` when every task runs unconditionally (`--all`); git
/// is never queried in that case.
///
/// Otherwise a task runs only if something changed, and a task with a
/// directory additionally needs the change-set to mention that directory.
pub fn select(task: &Task, changes: Option<&ChangeSet>) -> bool {
    let Some(changes) = changes else {
        return true;
    };

    if changes.is_empty() {
        return false;
    }

    match task.directory() {
        Some(dir) => changes.mentions(dir),
        None => true,
    }
}
