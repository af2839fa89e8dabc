//! The `Entry` type and the entry-list payload codec.
//!
//! The vault's plaintext payload is the ordered list of entries serialized
//! as pretty-printed JSON — self-describing, field names preserved, and
//! human-diffable once decrypted. Entry order is meaningful (newest first,
//! as maintained by `VaultStore::upsert`) and survives a round-trip exactly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PwmVaultError, Result};

/// A single credential entry stored in the vault.
///
/// All fields are plain strings. `tags` is a comma-joined label list
/// (e.g. `"finance,important"`); `id` is a UUID v4 string assigned when
/// the entry is created and stable for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub tags: String,
    pub notes: String,
}

impl Entry {
    /// Create a new entry with a freshly minted id.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Split the comma-joined `tags` field into trimmed, non-empty labels.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Returns `true` if the entry carries the given tag label.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list().iter().any(|t| *t == tag)
    }

    /// Case-insensitive substring match over name, username, url, tags,
    /// and notes — the same haystack the search box filters on.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {} {} {}",
            self.name, self.username, self.url, self.tags, self.notes
        )
        .to_lowercase();
        haystack.contains(&q)
    }

    /// Ensure the entry has an id, minting one if it is blank.
    ///
    /// Used when importing entries from external JSON where ids may be
    /// missing.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }
}

/// Serialize an ordered entry list into the plaintext payload bytes.
pub fn encode_entries(entries: &[Entry]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(entries)
        .map_err(|e| PwmVaultError::SerializationError(format!("entry list: {e}")))
}

/// Parse plaintext payload bytes back into the ordered entry list.
///
/// The bytes were already authenticated by the AEAD tag, so a parse
/// failure here indicates a serialization bug rather than tampering —
/// it is reported as `PayloadCorrupt` and should not occur in practice.
pub fn decode_entries(payload: &[u8]) -> Result<Vec<Entry>> {
    serde_json::from_slice(payload)
        .map_err(|e| PwmVaultError::PayloadCorrupt(format!("entry list JSON: {e}")))
}
