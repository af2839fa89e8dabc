//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! The container format stores the 16-byte auth tag in the header, ahead of
//! the ciphertext, so `seal` splits the tag off the combined buffer the
//! cipher produces and `open` stitches it back on before decrypting.
//! Nonces are caller-supplied: the container layer generates a fresh one
//! per encryption and persists it unencrypted in the header.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;

use crate::errors::{PwmVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Generate a cryptographically random 12-byte nonce.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt `plaintext` with a 32-byte `key` and the given nonce.
///
/// Returns the ciphertext and the detached 16-byte auth tag.
pub fn seal(key: &[u8], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PwmVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Encrypt and authenticate; the cipher appends the tag to the ciphertext.
    let mut combined = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| PwmVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Detach the trailing tag so the container can store it in the header.
    let split = combined.len() - TAG_LEN;
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&combined[split..]);
    combined.truncate(split);

    Ok((combined, tag))
}

/// Decrypt `ciphertext` and verify the detached auth tag.
///
/// Any failure — tag mismatch, wrong key (wrong password), wrong nonce —
/// collapses into the same `AuthenticationFailed` error. Distinguishing
/// them would hand an attacker a password-guessing oracle.
pub fn open(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>> {
    if nonce.len() != NONCE_LEN {
        return Err(PwmVaultError::AuthenticationFailed);
    }

    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| PwmVaultError::AuthenticationFailed)?;

    // Re-attach the tag in the position the cipher expects.
    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(Nonce::from_slice(nonce), combined.as_ref())
        .map_err(|_| PwmVaultError::AuthenticationFailed)
}
