//! `pwmvault rotate` — change the vault master password.
//!
//! Decrypts the vault with the current password, then saves it under the
//! new one. The save path already regenerates salt and nonce (and so the
//! key) on every write, so rotation is just open + save.

use crate::cli::output;
use crate::cli::{prompt_new_password, prompt_password, vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `rotate` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;

    // Unlock with the current password first.
    output::info("Unlocking with the current master password.");
    let current = prompt_password()?;
    let store = VaultStore::open(&path, current.as_bytes())?;

    // Then pick the new one (with confirmation).
    let new_password = prompt_new_password()?;
    store.save(new_password.as_bytes())?;

    output::success(&format!(
        "Master password changed — {} entries re-encrypted",
        store.entry_count()
    ));
    Ok(())
}
