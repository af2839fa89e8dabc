//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the session state the commands work against: the
//! vault path and the decrypted entry list. The master password is *not*
//! retained — the caller supplies it per operation and every `save`
//! derives a fresh single-use key from a fresh salt.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{PwmVaultError, Result};

use super::container;
use super::entry::Entry;

/// The main vault handle. Create one with `VaultStore::create` or
/// `VaultStore::open`, then use its methods to manage entries.
#[derive(Debug)]
pub struct VaultStore {
    /// Path to the `.pwm` file on disk.
    path: PathBuf,

    /// Decrypted entries, newest first.
    entries: Vec<Entry>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new vault file at `path` holding an empty entry list.
    pub fn create(path: &Path, password: &[u8]) -> Result<Self> {
        if path.exists() {
            return Err(PwmVaultError::VaultAlreadyExists(path.to_path_buf()));
        }

        let store = Self {
            path: path.to_path_buf(),
            entries: Vec::new(),
        };
        store.save(password)?;
        Ok(store)
    }

    /// Open an existing vault file and decrypt its entries.
    ///
    /// A missing file is `VaultNotFound`; everything else surfaces the
    /// container codec's typed failures unchanged (`MalformedContainer`,
    /// `UnsupportedFormat`, `AuthenticationFailed`, `PayloadCorrupt`).
    pub fn open(path: &Path, password: &[u8]) -> Result<Self> {
        if !path.exists() {
            return Err(PwmVaultError::VaultNotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        let entries = container::decode_entries(&data, password)?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Add or update an entry.
    ///
    /// An entry whose id already exists is replaced in place, keeping its
    /// position in the list. New entries go to the front.
    pub fn upsert(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.insert(0, entry),
        }
    }

    /// Find an entry by id, falling back to a case-insensitive name match.
    ///
    /// With duplicate names the first (most recently added) entry wins.
    pub fn find(&self, selector: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.id == selector)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(selector))
            })
    }

    /// Remove an entry by id.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(PwmVaultError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Replace the whole entry list (used by `import`).
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// The decrypted entries, in vault order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries in the vault.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Encrypt the entry list and write the container to disk atomically.
    ///
    /// The file is replaced wholesale: a fresh salt and nonce (and hence a
    /// fresh key) are used every time, and the bytes land in a temp file in
    /// the same directory before a rename, so a crash mid-write can never
    /// leave a truncated vault behind.
    pub fn save(&self, password: &[u8]) -> Result<()> {
        let blob = container::encode_entries(&self.entries, password)?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &blob)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
