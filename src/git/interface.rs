//! git::interface
//!
//! Repository discovery using git2.
//!
//! Ready only needs to know where a repository lives: its `.git` directory,
//! its work tree and the directory git runs hooks from. Change-set queries
//! go through the `git` CLI instead (see [`super::changes`]).
//!
//! # Example
//!
//! ```ignore
//! use ready::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("./src"))?;
//! println!("hooks live in {}", git.hooks_dir()?.display());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The git executable could not be started.
    #[error("failed to run git {args}: {source}")]
    Spawn {
        /// Arguments passed to git
        args: String,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error("git {args} failed ({status}): {output}")]
    CommandFailed {
        /// Arguments passed to git
        args: String,
        /// Exit status description
        status: String,
        /// Combined output of the command
        output: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Handle on a discovered repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Path of the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Path of the work tree.
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    /// Directory git runs hooks from.
    ///
    /// Honors `core.hooksPath`; a relative value is resolved against the
    /// work tree, as git does. Defaults to `<git-dir>/hooks`.
    pub fn hooks_dir(&self) -> Result<PathBuf, GitError> {
        let configured = match self.repo.config()?.get_path("core.hooksPath") {
            Ok(path) if path.as_os_str().is_empty() => None,
            Ok(path) => Some(path),
            Err(err) if err.code() == git2::ErrorCode::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        match configured {
            Some(path) if path.is_absolute() => Ok(path),
            Some(path) => Ok(self.work_dir()?.join(path)),
            None => Ok(self.git_dir().join("hooks")),
        }
    }
}
