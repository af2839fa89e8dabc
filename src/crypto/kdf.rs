//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is a fixed tunable constant: high enough to slow
//! brute-force guessing, low enough that unlocking stays interactive.
//! Derivation is deterministic — the same password and salt always yield
//! the same key, which is what lets `decode` reconstruct the key used at
//! encryption time.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A 32-byte symmetric key that zeroes its memory when dropped.
///
/// A `DerivedKey` is owned by a single encrypt or decrypt operation and
/// must not be cached across operations — every save derives a fresh key
/// from a fresh salt.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to build the AEAD cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// An empty password is accepted — it yields a valid (if weak) key, and
/// whether to enforce password strength is the caller's policy.
pub fn derive_key(password: &[u8], salt: &[u8]) -> DerivedKey {
    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut bytes);
    let key = DerivedKey { bytes };
    bytes.zeroize();
    key
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
