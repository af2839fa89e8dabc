//! `pwmvault generate` — print a random password without opening the vault.

use crate::cli::generator::{clamp_length, generate_password, CharsetOptions};
use crate::config::Settings;
use crate::errors::{PwmVaultError, Result};

/// Execute the `generate` command.
pub fn execute(
    length: Option<usize>,
    no_upper: bool,
    no_lower: bool,
    no_digits: bool,
    no_symbols: bool,
) -> Result<()> {
    let opts = CharsetOptions {
        upper: !no_upper,
        lower: !no_lower,
        digits: !no_digits,
        symbols: !no_symbols,
    };

    if !opts.any_enabled() {
        return Err(PwmVaultError::CommandFailed(
            "at least one character set must stay enabled".into(),
        ));
    }

    let requested = match length {
        Some(len) => len,
        None => Settings::load()?.generator_length,
    };

    println!("{}", generate_password(clamp_length(requested), &opts));
    Ok(())
}
