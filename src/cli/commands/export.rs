//! `pwmvault export` — export decrypted entries in various formats.
//!
//! Supported formats:
//! - `json` (default): pretty-printed array of full entries
//! - `csv`: header `name,username,password,url,tags,notes`
//!
//! The output is plain text by the user's explicit choice — exporting is
//! the trust boundary where the vault's protection deliberately ends.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::{PwmVaultError, Result};
use crate::vault::{Entry, VaultStore};

/// Execute the `export` command.
pub fn execute(cli: &Cli, format: &str, output_path: Option<&str>) -> Result<()> {
    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let store = VaultStore::open(&path, master.as_bytes())?;

    let content = match format {
        "json" => format_as_json(store.entries())?,
        "csv" => format_as_csv(store.entries()),
        other => {
            return Err(PwmVaultError::CommandFailed(format!(
                "unknown export format '{other}' — use 'json' or 'csv'"
            )));
        }
    };

    match output_path {
        Some(dest) => {
            let dest_path = Path::new(dest);

            // Safety: refuse to overwrite vault files.
            if dest_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pwm"))
            {
                return Err(PwmVaultError::CommandFailed(
                    "refusing to export over a .pwm file".into(),
                ));
            }

            fs::write(dest_path, &content).map_err(|e| {
                PwmVaultError::CommandFailed(format!("failed to write export file: {e}"))
            })?;

            output::success(&format!(
                "Exported {} entries to {} (format: {})",
                store.entry_count(),
                dest,
                format
            ));
            output::warning("The export is NOT encrypted — handle it accordingly.");
        }
        None => {
            // Write to stdout (no success message, just raw output).
            print!("{content}");
        }
    }

    Ok(())
}

/// Format entries as a pretty-printed JSON array.
fn format_as_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| PwmVaultError::SerializationError(format!("JSON export: {e}")))
}

/// Format entries as CSV with the fixed column order the header names.
fn format_as_csv(entries: &[Entry]) -> String {
    let mut out = String::from("name,username,password,url,tags,notes\n");
    for e in entries {
        let notes = e.notes.replace('\n', " ");
        let row = [
            e.name.as_str(),
            e.username.as_str(),
            e.password.as_str(),
            e.url.as_str(),
            e.tags.as_str(),
            notes.as_str(),
        ]
        .map(csv_escape)
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a quote, comma, or newline;
/// embedded quotes are doubled.
fn csv_escape(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
