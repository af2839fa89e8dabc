//! `pwmvault import` — import entries from a JSON file.
//!
//! The file must hold a JSON array of entry objects. Missing fields
//! default to empty strings and entries without an id get one minted, so
//! exports from other tools import cleanly. The imported list *replaces*
//! the current vault contents.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::{Entry, VaultStore};

/// Execute the `import` command.
pub fn execute(cli: &Cli, file: &str) -> Result<()> {
    let entries = read_entries(Path::new(file))?;

    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let mut store = VaultStore::open(&path, master.as_bytes())?;

    let count = entries.len();
    store.replace_all(entries);
    store.save(master.as_bytes())?;

    output::success(&format!("Imported {count} entries from {file}"));
    Ok(())
}

/// Parse and normalize the entries in an import file.
fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PwmVaultError::CommandFailed(format!("cannot read {}: {e}", path.display())))?;

    let mut entries: Vec<Entry> = serde_json::from_str(&contents).map_err(|e| {
        PwmVaultError::SerializationError(format!("import is not a JSON entry array: {e}"))
    })?;

    for entry in &mut entries {
        entry.ensure_id();
    }

    Ok(entries)
}
