//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - The `Entry` type and the JSON entry-list payload codec (`entry`)
//! - The binary container format with authenticated encryption (`container`)
//! - High-level `VaultStore` for creating, opening, and saving vaults (`store`)

pub mod container;
pub mod entry;
pub mod store;

// Re-export the most commonly used items.
pub use entry::Entry;
pub use store::VaultStore;
