//! `pwmvault show` — print a single entry's details.

use console::style;

use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `show` command.
pub fn execute(cli: &Cli, selector: &str, reveal: bool) -> Result<()> {
    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let store = VaultStore::open(&path, master.as_bytes())?;

    let entry = store
        .find(selector)
        .ok_or_else(|| PwmVaultError::EntryNotFound(selector.to_string()))?;

    let password = if reveal {
        entry.password.clone()
    } else if entry.password.is_empty() {
        String::new()
    } else {
        "\u{2022}".repeat(8)
    };

    println!("{}", style(&entry.name).bold());
    print_field("id", &entry.id);
    print_field("username", &entry.username);
    print_field("password", &password);
    print_field("url", &entry.url);
    print_field("tags", &entry.tags);
    print_field("notes", &entry.notes);

    if !reveal && !entry.password.is_empty() {
        println!(
            "{}",
            style("(pass --reveal to print the password)").dim()
        );
    }

    Ok(())
}

fn print_field(label: &str, value: &str) {
    println!("  {:<10} {}", style(label).dim(), value);
}
