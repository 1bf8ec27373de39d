//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Task File
//!
//! The task file lives in the directory Ready is started from and is named
//! `ready.yaml`, `ready.yml` or `ready.toml`.
//!
//! # Validation
//!
//! Values are validated after parsing: every task needs a non-blank command.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::git::ChangeMode;

/// The whole task file.
///
/// # Example
///
/// ```yaml
/// tasks:
///   - name: format
///     command: cargo fmt --check
///   - name: web lint
///     command: npm run lint
///     directory: web
/// settings:
///   changes: staged
///   fail_when_idle: false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TaskFile {
    /// Tasks in execution order
    pub tasks: Vec<Task>,

    /// Optional run settings
    #[serde(default)]
    pub settings: Settings,
}

impl TaskFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any task is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, task) in self.tasks.iter().enumerate() {
            task.validate().map_err(|message| {
                ConfigError::InvalidValue(format!("task {}: {}", index + 1, message))
            })?;
        }
        Ok(())
    }
}

/// A single configured task.
///
/// Identity is the task's position in [`TaskFile::tasks`]; names are not
/// required to be unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Shell command line
    pub command: String,

    /// Working directory, also used as the change-set filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Task {
    /// Create a task without a directory.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            directory: None,
        }
    }

    /// Set the working directory.
    pub fn in_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// The directory filter, if any.
    ///
    /// An empty string is treated as no directory at all.
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref().filter(|d| !d.is_empty())
    }

    fn validate(&self) -> Result<(), String> {
        if self.command.trim().is_empty() {
            return Err(format!("'{}' has an empty command", self.name));
        }
        Ok(())
    }
}

/// Run settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Which git query decides what changed
    pub changes: ChangeMode,

    /// Exit non-zero when no task was applicable
    pub fail_when_idle: bool,
}
