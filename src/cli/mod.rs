//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod generator;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PwmVaultError, Result};

/// Minimum password length to prevent trivially weak master passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// PwmVault CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "pwmvault",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: <data dir>/vault.pwm)
    #[arg(long, global = true)]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new empty vault
    Init,

    /// Add an entry to the vault
    Add {
        /// Entry name (e.g. "Bank")
        name: String,

        /// Account or login name
        #[arg(short, long, default_value = "")]
        username: String,

        /// Password value (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,

        /// Website or service URL
        #[arg(long, default_value = "")]
        url: String,

        /// Comma-joined tag labels (e.g. "finance,important")
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List entries, optionally filtered by tag or search query
    List {
        /// Only show entries carrying this tag (repeatable, any match)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Case-insensitive search over name, username, url, tags, notes
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single entry's details
    Show {
        /// Entry name or id
        entry: String,

        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Copy an entry's password to the clipboard (cleared after a delay)
    Copy {
        /// Entry name or id
        entry: String,
    },

    /// Update fields of an existing entry
    Edit {
        /// Entry name or id
        entry: String,

        /// New entry name
        #[arg(long)]
        name: Option<String>,

        /// New account or login name
        #[arg(short, long)]
        username: Option<String>,

        /// New password value
        #[arg(short, long)]
        password: Option<String>,

        /// Blank out the stored password
        #[arg(long, conflicts_with = "password")]
        clear_password: bool,

        /// New website or service URL
        #[arg(long)]
        url: Option<String>,

        /// New comma-joined tag labels
        #[arg(short, long)]
        tags: Option<String>,

        /// New free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an entry from the vault
    Delete {
        /// Entry name or id
        entry: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the vault's master password
    Rotate,

    /// Export decrypted entries to a file or stdout (plain text!)
    Export {
        /// Output format: json (default) or csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import entries from a JSON file (replaces the current list)
    Import {
        /// Path to the JSON file to import
        file: String,
    },

    /// Generate a random password without touching the vault
    Generate {
        /// Password length (clamped to 8..=64)
        #[arg(short, long)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Manage the tag library (name → color, stored outside the vault)
    Tags {
        #[command(subcommand)]
        action: TagsAction,
    },

    /// Print the vault file location
    Path,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Tags subcommands for the unencrypted tag-library prefs.
#[derive(clap::Subcommand)]
pub enum TagsAction {
    /// List all known tags and their colors
    List,

    /// Add a tag or change its color
    Set {
        /// Tag name
        name: String,
        /// Display color as #rrggbb
        #[arg(default_value = "#8aa2ff")]
        color: String,
    },

    /// Remove a tag from the library
    Remove {
        /// Tag name
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PWMVAULT_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PWMVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PwmVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`
/// and `rotate`).
///
/// Also respects `PWMVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PWMVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PwmVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PwmVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault file path from the CLI arguments or settings.
pub fn vault_path(cli: &Cli) -> Result<std::path::PathBuf> {
    if let Some(ref path) = cli.vault {
        return Ok(std::path::PathBuf::from(path));
    }
    Settings::load()?.vault_path()
}
