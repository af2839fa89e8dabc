//! Charset-based random password generation.
//!
//! Independent of the vault crypto: characters are drawn uniformly from
//! the union of the enabled sets using the OS random source, avoiding the
//! modulo bias a naive `random % len` picks up.

use rand::Rng;

/// Shortest password `clamp_length` allows.
pub const MIN_LENGTH: usize = 8;

/// Longest password `clamp_length` allows.
pub const MAX_LENGTH: usize = 64;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-={}[]:;,.?";

/// Which character sets to draw from.
#[derive(Debug, Clone, Copy)]
pub struct CharsetOptions {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetOptions {
    /// The combined alphabet for the enabled sets.
    fn alphabet(&self) -> String {
        let mut all = String::new();
        if self.upper {
            all.push_str(UPPER);
        }
        if self.lower {
            all.push_str(LOWER);
        }
        if self.digits {
            all.push_str(DIGITS);
        }
        if self.symbols {
            all.push_str(SYMBOLS);
        }
        all
    }

    /// Returns `true` if at least one character set is enabled.
    pub fn any_enabled(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols
    }
}

/// Clamp a requested length into the supported range.
pub fn clamp_length(requested: usize) -> usize {
    requested.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generate a random password of `length` characters.
///
/// Returns an empty string when no character set is enabled; callers
/// should check `CharsetOptions::any_enabled` first and report an error.
pub fn generate_password(length: usize, opts: &CharsetOptions) -> String {
    let alphabet: Vec<char> = opts.alphabet().chars().collect();
    if alphabet.is_empty() {
        return String::new();
    }

    let mut rng = rand::rngs::OsRng;
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        let pw = generate_password(24, &CharsetOptions::default());
        assert_eq!(pw.len(), 24);
    }

    #[test]
    fn respects_charset_selection() {
        let opts = CharsetOptions {
            upper: false,
            lower: false,
            digits: true,
            symbols: false,
        };
        let pw = generate_password(64, &opts);
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn no_charset_yields_empty_string() {
        let opts = CharsetOptions {
            upper: false,
            lower: false,
            digits: false,
            symbols: false,
        };
        assert!(!opts.any_enabled());
        assert_eq!(generate_password(16, &opts), "");
    }

    #[test]
    fn clamp_length_bounds() {
        assert_eq!(clamp_length(1), MIN_LENGTH);
        assert_eq!(clamp_length(16), 16);
        assert_eq!(clamp_length(500), MAX_LENGTH);
    }

    #[test]
    fn two_passwords_differ() {
        let opts = CharsetOptions::default();
        // 64 chars from a ~85-char alphabet: a collision would be astonishing.
        assert_ne!(generate_password(64, &opts), generate_password(64, &opts));
    }
}
