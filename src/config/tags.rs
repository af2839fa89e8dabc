//! Unencrypted tag-library preferences (tag name → display color).
//!
//! Tag colors are orthogonal UI metadata, not credentials, so they live
//! outside the vault's authenticated payload in a plain JSON prefs file.
//! Entries keep their own comma-joined tag strings inside the encrypted
//! payload; this library only decides how known labels are displayed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PwmVaultError, Result};

/// A named tag with a `#rrggbb` display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
}

/// The on-disk tag library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagLibrary {
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl TagLibrary {
    /// File name inside the config directory.
    const FILE_NAME: &'static str = "tags.json";

    /// Load the tag library from the default prefs location.
    ///
    /// A missing or unparseable file yields an empty library — tag colors
    /// are best-effort display metadata and never block vault access.
    pub fn load() -> Self {
        match super::settings::config_dir() {
            Some(dir) => Self::load_from(&dir.join(Self::FILE_NAME)),
            None => Self::default(),
        }
    }

    /// Load from an explicit path (missing/corrupt file → empty library).
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Persist the library to the default prefs location.
    pub fn save(&self) -> Result<()> {
        let dir = super::settings::config_dir()
            .ok_or_else(|| PwmVaultError::ConfigError("no platform config directory".into()))?;
        self.save_to(&dir.join(Self::FILE_NAME))
    }

    /// Persist the library to an explicit path, creating parent dirs.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PwmVaultError::SerializationError(format!("tag library: {e}")))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Look up the color for a tag name.
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.color.as_str())
    }

    /// Add a tag or update an existing tag's color.
    pub fn set(&mut self, name: &str, color: &str) {
        match self.tags.iter_mut().find(|t| t.name == name) {
            Some(tag) => tag.color = color.to_string(),
            None => self.tags.push(Tag {
                name: name.to_string(),
                color: color.to_string(),
            }),
        }
        self.tags.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Remove a tag by name. Returns `true` if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t.name != name);
        self.tags.len() != before
    }

    /// Path of the default prefs file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        super::settings::config_dir().map(|d| d.join(Self::FILE_NAME))
    }
}
