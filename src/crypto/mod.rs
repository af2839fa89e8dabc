//! Cryptographic primitives for PwmVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption with a detached tag (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, generate_salt};
pub use encryption::{generate_nonce, open, seal, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, DerivedKey, KEY_LEN, SALT_LEN};
