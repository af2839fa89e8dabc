use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PwmVaultError, Result};

/// User-level configuration, loaded from `pwmvault.toml` in the config
/// directory.
///
/// Every field has a sensible default so PwmVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the vault file lives in. Defaults to the platform data
    /// directory (e.g. `~/.local/share/pwmvault`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// File name of the vault inside the data directory.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Seconds before a copied password is cleared from the clipboard.
    /// Zero disables the timed clear.
    #[serde(default = "default_clipboard_clear_secs")]
    pub clipboard_clear_secs: u64,

    /// Default length for generated passwords.
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "vault.pwm".to_string()
}

fn default_clipboard_clear_secs() -> u64 {
    15
}

fn default_generator_length() -> usize {
    16
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            vault_file: default_vault_file(),
            clipboard_clear_secs: default_clipboard_clear_secs(),
            generator_length: default_generator_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the config directory.
    const FILE_NAME: &'static str = "pwmvault.toml";

    /// Load settings from `<config dir>/pwmvault/pwmvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join(Self::FILE_NAME)),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit config file path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PwmVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the directory the vault file lives in.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("pwmvault"))
            .ok_or_else(|| PwmVaultError::ConfigError("no platform data directory".into()))
    }

    /// Build the full path to the vault file.
    ///
    /// Example: `~/.local/share/pwmvault/vault.pwm`
    pub fn vault_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.vault_file))
    }
}

/// The per-user config directory for pwmvault files.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pwmvault"))
}
