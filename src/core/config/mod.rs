//! core::config
//!
//! Task file discovery and loading.
//!
//! # Locations
//!
//! The task file is looked up in the working directory only. The first of
//! these that exists wins:
//! 1. `ready.yaml`
//! 2. `ready.yml`
//! 3. `ready.toml`
//!
//! A missing or malformed file is fatal: nothing runs without tasks.
//!
//! # Example
//!
//! ```no_run
//! use ready::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new(".")).unwrap();
//! for task in config.tasks() {
//!     println!("{}: {}", task.name, task.command);
//! }
//! ```

pub mod schema;

pub use schema::{Settings, Task, TaskFile};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["ready.yaml", "ready.yml", "ready.toml"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no task file found in '{dir}' (expected one of: {})", CONFIG_FILE_NAMES.join(", "))]
    NotFound { dir: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Supported task file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// Loaded task configuration.
#[derive(Debug, Clone)]
pub struct Config {
    file: TaskFile,
}

impl Config {
    /// Discover and load the task file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if no task file exists, or if it cannot be read,
    /// parsed or validated.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::discover(dir).ok_or_else(|| ConfigError::NotFound {
            dir: dir.to_path_buf(),
        })?;
        Self::load_file(&path)
    }

    /// Load a specific task file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = Self::parse(&contents, Format::from_path(path)).map_err(|message| {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                message,
            }
        })?;
        file.validate()?;

        tracing::debug!(path = %path.display(), tasks = file.tasks.len(), "loaded task file");

        Ok(Self { file })
    }

    /// Find the first task file present in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    fn parse(contents: &str, format: Format) -> Result<TaskFile, String> {
        match format {
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Tasks in configured order.
    pub fn tasks(&self) -> &[Task] {
        &self.file.tasks
    }

    /// Run settings.
    pub fn settings(&self) -> Settings {
        self.file.settings
    }
}
