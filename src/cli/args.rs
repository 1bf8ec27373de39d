//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ready - run the tasks your staged changes need before every commit
#[derive(Parser, Debug)]
#[command(name = "ready")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
WORKFLOW EXAMPLES:
    # Install the pre-commit hook in this repository
    ready init

    # Run the tasks relevant to staged changes (what the hook does)
    ready

    # Run every task regardless of what changed
    ready --all")]
pub struct Cli {
    /// Run as if ready was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only print the final verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Run all tasks without looking at changes
    #[arg(long)]
    pub all: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the tasks relevant to the current changes (default)
    #[command(
        name = "run",
        long_about = "Run the configured tasks.\n\n\
            Tasks are read from ready.yaml (or ready.yml / ready.toml) in the current \
            directory. A task runs when git reports changes and, if the task has a \
            directory, when that directory appears in the changes. Every selected task \
            runs even if an earlier one fails; the exit code is 1 if any failed."
    )]
    Run {
        /// Run all tasks without looking at changes
        #[arg(long)]
        all: bool,
    },

    /// Install the pre-commit hook
    #[command(
        name = "init",
        long_about = "Install a pre-commit hook that runs ready.\n\n\
            If a pre-commit hook already exists you are asked before it is replaced; \
            only an answer of 'yes' overwrites it.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Install, asking before replacing an existing hook
    ready init

    # Replace any existing hook without asking
    ready init --force"
    )]
    Init {
        /// Overwrite an existing hook without asking
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by `ready completion`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
