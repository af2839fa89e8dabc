//! Binary vault container format.
//!
//! A `.pwm` file has this layout:
//!
//! ```text
//! [PWM1: 4 bytes][salt_len: 1 byte][iv_len: 1 byte][salt][iv][auth tag: 16 bytes][ciphertext]
//! ```
//!
//! - **Magic** (`PWM1`): identifies the file as a PwmVault container.
//! - **salt_len / iv_len**: single-byte lengths of the two fields that
//!   follow (16 and 12 for every container this code writes).
//! - **Salt**: random per save, consumed by PBKDF2 key derivation.
//! - **IV**: random per save, the AES-GCM nonce.
//! - **Auth tag**: 16-byte GCM tag, verified before any plaintext is trusted.
//! - **Ciphertext**: the rest of the buffer — there is no length field.
//!
//! Salt and nonce are regenerated on every encode, so a key is never
//! reused and nonce reuse under the same key cannot occur. The header is
//! not bound into the AEAD as associated data, so the prefix bytes are
//! only covered indirectly by the tag check (see DESIGN.md).

use zeroize::Zeroize;

use crate::crypto::{self, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{PwmVaultError, Result};

/// Magic bytes at the start of every vault container.
pub const MAGIC: &[u8; 4] = b"PWM1";

/// Fixed-size prefix: 4 (magic) + 1 (salt_len) + 1 (iv_len).
pub const PREFIX_LEN: usize = 6;

/// Smallest possible valid container: prefix + salt + iv + tag, with an
/// empty ciphertext.
pub const MIN_CONTAINER_LEN: usize = PREFIX_LEN + SALT_LEN + NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` under `password` and assemble the full container.
///
/// Generates a fresh salt and nonce, derives a single-use key, and emits
/// `header || ciphertext` as one byte buffer. Persistence is the caller's
/// responsibility; this function has no side effects.
pub fn encode(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let salt = crypto::generate_salt();
    let nonce = crypto::generate_nonce();

    let key = crypto::derive_key(password, &salt);
    let (ciphertext, tag) = crypto::seal(key.as_bytes(), &nonce, plaintext)?;

    let mut out = Vec::with_capacity(MIN_CONTAINER_LEN + ciphertext.len());
    out.extend_from_slice(MAGIC);
    out.push(SALT_LEN as u8);
    out.push(NONCE_LEN as u8);
    out.extend_from_slice(&salt);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&tag);
    out.extend_from_slice(&ciphertext);

    Ok(out)
}

/// Parse a container, derive the key, and decrypt + authenticate.
///
/// Failure ladder:
/// - buffer shorter than the minimum header, or any field slice running
///   past the end → `MalformedContainer`
/// - wrong magic → `UnsupportedFormat`
/// - tag mismatch, wrong password, or any other decryption fault →
///   `AuthenticationFailed` (deliberately indistinguishable)
pub fn decode(container: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(PwmVaultError::MalformedContainer(
            "file too small to be a valid vault".into(),
        ));
    }

    if &container[0..4] != MAGIC {
        return Err(PwmVaultError::UnsupportedFormat);
    }

    let salt_len = container[4] as usize;
    let iv_len = container[5] as usize;

    // Walk the variable-length fields with a cursor; every read is
    // bounds-checked against the end of the buffer.
    let mut cursor = PREFIX_LEN;
    let salt = take(container, &mut cursor, salt_len)?;
    let nonce = take(container, &mut cursor, iv_len)?;
    let tag_bytes = take(container, &mut cursor, TAG_LEN)?;
    let ciphertext = &container[cursor..];

    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(tag_bytes);

    let key = crypto::derive_key(password, salt);
    crypto::open(key.as_bytes(), nonce, ciphertext, &tag)
}

/// Convenience wrapper: encode an entry list as the vault payload.
pub fn encode_entries(entries: &[super::Entry], password: &[u8]) -> Result<Vec<u8>> {
    let mut payload = super::entry::encode_entries(entries)?;
    let container = encode(&payload, password);
    payload.zeroize();
    container
}

/// Convenience wrapper: decode a container into its entry list.
pub fn decode_entries(container: &[u8], password: &[u8]) -> Result<Vec<super::Entry>> {
    let mut payload = decode(container, password)?;
    let entries = super::entry::decode_entries(&payload);
    payload.zeroize();
    entries
}

/// Slice `len` bytes out of `buf` at `*cursor`, advancing the cursor.
fn take<'a>(buf: &'a [u8], cursor: &mut usize, len: usize) -> Result<&'a [u8]> {
    let end = cursor
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or_else(|| {
            PwmVaultError::MalformedContainer("field extends past end of file".into())
        })?;
    let slice = &buf[*cursor..end];
    *cursor = end;
    Ok(slice)
}
