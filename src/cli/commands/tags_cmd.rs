//! `pwmvault tags` — manage the unencrypted tag library.

use comfy_table::{ContentArrangement, Table};

use crate::cli::output;
use crate::cli::TagsAction;
use crate::config::TagLibrary;
use crate::errors::{PwmVaultError, Result};

/// Execute the `tags` command.
pub fn execute(action: &TagsAction) -> Result<()> {
    match action {
        TagsAction::List => list(),
        TagsAction::Set { name, color } => set(name, color),
        TagsAction::Remove { name } => remove(name),
    }
}

fn list() -> Result<()> {
    let lib = TagLibrary::load();

    if lib.tags.is_empty() {
        output::info("No tags in the library yet.");
        output::tip("Run `pwmvault tags set <NAME> [COLOR]` to add one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Color"]);
    for tag in &lib.tags {
        table.add_row(vec![tag.name.clone(), tag.color.clone()]);
    }
    println!("{table}");

    Ok(())
}

fn set(name: &str, color: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PwmVaultError::CommandFailed(
            "tag name cannot be empty".into(),
        ));
    }
    validate_color(color)?;

    let mut lib = TagLibrary::load();
    lib.set(name.trim(), color);
    lib.save()?;

    output::success(&format!("Tag '{}' set to {color}", name.trim()));
    Ok(())
}

fn remove(name: &str) -> Result<()> {
    let mut lib = TagLibrary::load();
    if !lib.remove(name) {
        return Err(PwmVaultError::CommandFailed(format!(
            "tag '{name}' is not in the library"
        )));
    }
    lib.save()?;

    output::success(&format!("Removed tag '{name}'"));
    Ok(())
}

/// Accept only `#rrggbb` colors.
fn validate_color(color: &str) -> Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit());

    if !valid {
        return Err(PwmVaultError::CommandFailed(format!(
            "color '{color}' is invalid — expected #rrggbb"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_color_accepts_hex_triplets() {
        assert!(validate_color("#8aa2ff").is_ok());
        assert!(validate_color("#FFFFFF").is_ok());
    }

    #[test]
    fn validate_color_rejects_malformed_values() {
        assert!(validate_color("8aa2ff").is_err());
        assert!(validate_color("#8aa2f").is_err());
        assert!(validate_color("#8aa2fg").is_err());
        assert!(validate_color("").is_err());
    }
}
