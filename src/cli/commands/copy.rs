//! `pwmvault copy` — copy an entry's password to the clipboard, then
//! clear it after the configured delay.
//!
//! The clear is best-effort: a clipboard that vanishes mid-wait (remote
//! session ended, display gone) must not be reported as a vault failure.

use std::thread;
use std::time::Duration;

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::{PwmVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `copy` command.
pub fn execute(cli: &Cli, selector: &str) -> Result<()> {
    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let store = VaultStore::open(&path, master.as_bytes())?;

    let entry = store
        .find(selector)
        .ok_or_else(|| PwmVaultError::EntryNotFound(selector.to_string()))?;

    if entry.password.is_empty() {
        output::warning(&format!("Entry '{}' has no password set.", entry.name));
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| PwmVaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(entry.password.clone())
        .map_err(|e| PwmVaultError::ClipboardError(e.to_string()))?;

    let clear_secs = Settings::load()?.clipboard_clear_secs;
    if clear_secs == 0 {
        output::success(&format!("Copied password for '{}'", entry.name));
        return Ok(());
    }

    output::success(&format!(
        "Copied password for '{}' — clearing clipboard in {clear_secs}s",
        entry.name
    ));

    thread::sleep(Duration::from_secs(clear_secs));

    // Only clear if the clipboard still holds our value, so we never wipe
    // something the user copied in the meantime.
    match clipboard.get_text() {
        Ok(current) if current == entry.password => {
            if clipboard.set_text(String::new()).is_ok() {
                output::info("Clipboard cleared.");
            }
        }
        _ => {}
    }

    Ok(())
}
