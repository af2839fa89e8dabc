//! `pwmvault add` — add a new entry to the vault.

use zeroize::Zeroizing;

use crate::cli::generator::{self, CharsetOptions};
use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::config::Settings;
use crate::errors::{PwmVaultError, Result};
use crate::vault::{Entry, VaultStore};

/// Arguments of the `add` command, forwarded from the clap struct.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    name: &str,
    username: &str,
    password_arg: Option<&str>,
    generate: bool,
    url: &str,
    tags: &str,
    notes: &str,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PwmVaultError::CommandFailed(
            "entry name cannot be empty".into(),
        ));
    }

    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let mut store = VaultStore::open(&path, master.as_bytes())?;

    // Resolve the entry password: flag value, generated, or prompted.
    let entry_password: Zeroizing<String> = if let Some(value) = password_arg {
        Zeroizing::new(value.to_string())
    } else if generate {
        let settings = Settings::load()?;
        let length = generator::clamp_length(settings.generator_length);
        Zeroizing::new(generator::generate_password(
            length,
            &CharsetOptions::default(),
        ))
    } else {
        Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt(format!("Password for '{name}'"))
                .allow_empty_password(true)
                .interact()
                .map_err(|e| PwmVaultError::CommandFailed(format!("password prompt: {e}")))?,
        )
    };

    let mut entry = Entry::new(name.trim());
    entry.username = username.trim().to_string();
    entry.password = entry_password.to_string();
    entry.url = url.trim().to_string();
    entry.tags = tags.trim().to_string();
    entry.notes = notes.to_string();

    store.upsert(entry);
    store.save(master.as_bytes())?;

    output::success(&format!("Added entry '{name}'"));
    if generate {
        output::tip("Run `pwmvault copy` to put the generated password on the clipboard.");
    }

    Ok(())
}
