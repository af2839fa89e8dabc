//! `pwmvault init` — create a new, empty vault.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;

    // Refuse to clobber an existing vault.
    if path.exists() {
        output::tip("Use `pwmvault add` to add entries to the existing vault.");
        return Err(PwmVaultError::VaultAlreadyExists(path));
    }

    // Make sure the data directory exists before the first save.
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            output::info(&format!("Created vault directory: {}", parent.display()));
        }
    }

    // Prompt for a new password (with confirmation) and write the vault.
    let password = prompt_new_password()?;
    VaultStore::create(&path, password.as_bytes())?;

    output::success(&format!("Vault created at {}", path.display()));
    output::tip("Run `pwmvault add <NAME>` to add an entry.");
    output::tip("Run `pwmvault list` to see all entries.");

    Ok(())
}
