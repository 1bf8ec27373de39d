//! init command - Install the pre-commit hook

use crate::core::hook::{hook_path, write_hook};
use crate::engine::Context;
use crate::git::Git;
use crate::ui::prompts;
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};

/// Install the pre-commit hook in the repository containing the working
/// directory.
///
/// An existing hook is only replaced when `force` is set or the user
/// answers `yes`; any other answer leaves it untouched and still succeeds.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `force` - Skip the overwrite confirmation
/// * `input` - Where the confirmation answer is read from
/// * `out` - Where messages are written
pub fn init(
    ctx: &Context,
    force: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let git = Git::open(&cwd).context("Failed to open repository")?;
    let hooks_dir = git
        .hooks_dir()
        .context("Failed to locate hooks directory")?;
    let path = hook_path(&hooks_dir);

    if path.exists() && !force {
        let overwrite = prompts::confirm(
            "A pre-commit hook already exists ℹ️  Do you want to overwrite it?",
            input,
            out,
        )?;
        if !overwrite {
            writeln!(out, "Ready stopped 🛑")?;
            return Ok(());
        }
    }

    write_hook(&path).context("Error installing hook")?;

    if !ctx.quiet {
        writeln!(out, "Ready ready ✅")?;
    }

    Ok(())
}
