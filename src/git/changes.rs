//! git::changes
//!
//! Change-set inspection through the `git` CLI.
//!
//! The change-set is the combined output of one `git diff` query, kept as
//! opaque text. Task selection only ever asks two questions of it: is it
//! empty, and does it mention a directory.

use std::fmt;
use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::GitError;

/// Which git query defines "changed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeMode {
    /// Files added or modified in the index.
    #[default]
    Staged,
    /// Files differing between the work tree and `HEAD`.
    Worktree,
    /// Directory summary of the work tree against `HEAD`.
    Dirstat,
}

impl ChangeMode {
    /// Arguments passed to `git` for this mode.
    pub fn git_args(self) -> &'static [&'static str] {
        match self {
            ChangeMode::Staged => &["diff", "--name-only", "--cached", "--diff-filter=AM"],
            ChangeMode::Worktree => &["diff", "--name-only", "HEAD"],
            ChangeMode::Dirstat => &["diff", "--dirstat=files,0", "HEAD"],
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeMode::Staged => "staged",
            ChangeMode::Worktree => "worktree",
            ChangeMode::Dirstat => "dirstat",
        };
        f.write_str(name)
    }
}

/// Pending changes as reported by git.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    raw: String,
}

impl ChangeSet {
    /// Wrap raw git output.
    pub fn from_output(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Query git in `cwd` using `mode`.
    ///
    /// # Errors
    ///
    /// Any failure to run git, or a non-zero exit, is returned as a
    /// [`GitError`]; callers treat it as fatal for the whole run.
    pub fn inspect(cwd: &Path, mode: ChangeMode) -> Result<Self, GitError> {
        let args = mode.git_args();
        let joined = args.join(" ");

        tracing::debug!(mode = %mode, cwd = %cwd.display(), "inspecting change set");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| GitError::Spawn {
                args: joined.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                args: joined,
                status: output.status.to_string(),
                output: combined.trim_end().to_string(),
            });
        }

        tracing::debug!(bytes = combined.len(), "change set captured");

        Ok(Self { raw: combined })
    }

    /// True when git reported nothing.
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// True when `dir` occurs anywhere in the output.
    ///
    /// This is plain substring matching, not path matching: `api` also
    /// matches `services/api-gateway/main.rs`.
    pub fn mentions(&self, dir: &str) -> bool {
        self.raw.contains(dir)
    }
}
