//! Command-line interface.

pub mod completions;
pub mod cp;
pub mod init;
pub mod insert;
pub mod list;
pub mod mv;
pub mod output;
pub mod prompt;
pub mod rm;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Grotto - a git-native password manager with per-secret history.
#[derive(Parser)]
#[command(
    name = "grotto",
    about = "Git-native password manager with per-secret branch history",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Connect a git repository and a locked key file
    Init {
        /// Path of the git repository that holds the store
        repository: PathBuf,
        /// Path of the passphrase-protected age key file
        #[arg(short, long)]
        key: PathBuf,
    },

    /// Store a new secret (prompted twice, hidden input)
    Insert {
        /// Secret path (e.g. email/work)
        path: String,
    },

    /// Decrypt a secret and print it
    Show {
        /// Secret path
        path: String,
    },

    /// List stored secrets as a namespace tree
    List {
        /// Only show paths starting with this prefix
        prefix: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a secret, freezing its history behind a tag
    Rm {
        /// Secret path
        path: String,
    },

    /// Move a secret and its history to a new path
    Mv {
        /// Current secret path
        old: String,
        /// New secret path
        new: String,
    },

    /// Copy a secret and its history to a second path
    Cp {
        /// Source secret path
        old: String,
        /// Destination secret path
        new: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command. A bare invocation lists the store.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Some(Init { repository, key }) => init::execute(&repository, &key),
        Some(Insert { path }) => insert::execute(&path),
        Some(Show { path }) => show::execute(&path),
        Some(List { prefix, json }) => list::execute(prefix.as_deref(), json),
        Some(Rm { path }) => rm::execute(&path),
        Some(Mv { old, new }) => mv::execute(&old, &new),
        Some(Cp { old, new }) => cp::execute(&old, &new),
        Some(Completions { shell }) => completions::execute(shell),
        None => list::execute(None, false),
    }
}
