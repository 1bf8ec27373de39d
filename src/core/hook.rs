//! core::hook
//!
//! The pre-commit hook script and its installation.
//!
//! The hook runs `ready`, forwards a failing exit status, and refuses the
//! commit if the run changed tracked files (formatters rewriting sources,
//! for instance) so the user can review and stage those changes first.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name git looks for in the hooks directory.
pub const HOOK_NAME: &str = "pre-commit";

/// Contents of the installed hook.
pub const HOOK_SCRIPT: &str = r#"#!/bin/sh
# Hook created by Ready

initial_state=$(git diff --name-only)

ready

exit_status=$?
if [ $exit_status -ne 0 ]; then
	exit $exit_status
fi

latest_state=$(git diff --name-only)
if [ "$latest_state" != "$initial_state" ]; then
	echo "Some files have been modified by the hook. Please handle them and commit again 🔧"
	exit 1
fi

exit 0
"#;

/// Errors from hook installation.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("creating hooks directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("creating file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("making '{path}' executable: {source}")]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Path of the pre-commit hook inside `hooks_dir`.
pub fn hook_path(hooks_dir: &Path) -> PathBuf {
    hooks_dir.join(HOOK_NAME)
}

/// Write the hook script to `path`, replacing any existing file, and mark
/// it executable.
pub fn write_hook(path: &Path) -> Result<(), HookError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| HookError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, HOOK_SCRIPT).map_err(|source| HookError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    make_executable(path)?;

    tracing::debug!(path = %path.display(), "hook written");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), HookError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        HookError::Permissions {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), HookError> {
    Ok(())
}
