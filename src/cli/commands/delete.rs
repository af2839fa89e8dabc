//! `pwmvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, selector: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry '{selector}'?"))
            .default(false)
            .interact()
            .map_err(|e| PwmVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let mut store = VaultStore::open(&path, master.as_bytes())?;

    let entry = store
        .find(selector)
        .ok_or_else(|| PwmVaultError::EntryNotFound(selector.to_string()))?;
    let id = entry.id.clone();
    let name = entry.name.clone();

    store.remove(&id)?;
    store.save(master.as_bytes())?;

    output::success(&format!("Deleted entry '{name}'"));
    Ok(())
}
