//! `pwmvault path` — print the resolved vault file location.

use crate::cli::output;
use crate::cli::{vault_path, Cli};
use crate::errors::Result;

/// Execute the `path` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;
    println!("{}", path.display());

    if !path.exists() {
        output::info("No vault exists there yet — run `pwmvault init` to create one.");
    }

    Ok(())
}
