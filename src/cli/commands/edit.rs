//! `pwmvault edit` — update fields of an existing entry.

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::VaultStore;

/// Optional replacement values for each editable field.
#[derive(Default)]
pub struct FieldUpdates<'a> {
    pub name: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub clear_password: bool,
    pub url: Option<&'a str>,
    pub tags: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl FieldUpdates<'_> {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && !self.clear_password
            && self.url.is_none()
            && self.tags.is_none()
            && self.notes.is_none()
    }
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, selector: &str, updates: &FieldUpdates) -> Result<()> {
    if updates.is_empty() {
        return Err(PwmVaultError::CommandFailed(
            "nothing to change — pass at least one field flag".into(),
        ));
    }

    if let Some(name) = updates.name {
        if name.trim().is_empty() {
            return Err(PwmVaultError::CommandFailed(
                "entry name cannot be empty".into(),
            ));
        }
    }

    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let mut store = VaultStore::open(&path, master.as_bytes())?;

    let mut entry = store
        .find(selector)
        .ok_or_else(|| PwmVaultError::EntryNotFound(selector.to_string()))?
        .clone();

    if let Some(name) = updates.name {
        entry.name = name.trim().to_string();
    }
    if let Some(username) = updates.username {
        entry.username = username.trim().to_string();
    }
    if let Some(password) = updates.password {
        entry.password = password.to_string();
    }
    if updates.clear_password {
        entry.password.clear();
    }
    if let Some(url) = updates.url {
        entry.url = url.trim().to_string();
    }
    if let Some(tags) = updates.tags {
        entry.tags = tags.trim().to_string();
    }
    if let Some(notes) = updates.notes {
        entry.notes = notes.to_string();
    }

    let display_name = entry.name.clone();
    store.upsert(entry);
    store.save(master.as_bytes())?;

    output::success(&format!("Updated entry '{display_name}'"));
    Ok(())
}
