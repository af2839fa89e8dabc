//! Integration tests for the binary vault container.
//!
//! These pin down the container's security-relevant behavior: round-trips,
//! the typed failure ladder, tamper detection across every header region,
//! and the fresh-salt/fresh-nonce discipline.

use pwmvault::errors::PwmVaultError;
use pwmvault::vault::container::{decode, decode_entries, encode, encode_entries, MIN_CONTAINER_LEN};
use pwmvault::vault::Entry;

// Region offsets inside a container produced by `encode`:
//   magic 0..4, lengths 4..6, salt 6..22, iv 22..34, tag 34..50, ciphertext 50..
const SALT_START: usize = 6;
const IV_START: usize = 22;
const TAG_START: usize = 34;
const CT_START: usize = 50;

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_plaintext_bytes() {
    let blob = encode(b"some plaintext payload", b"correct horse").unwrap();
    let plain = decode(&blob, b"correct horse").unwrap();
    assert_eq!(plain, b"some plaintext payload");
}

#[test]
fn roundtrip_empty_entry_list_with_hunter2() {
    let blob = encode_entries(&[], b"hunter2").unwrap();

    let entries = decode_entries(&blob, b"hunter2").unwrap();
    assert!(entries.is_empty());

    let err = decode_entries(&blob, b"wrong").unwrap_err();
    assert!(matches!(err, PwmVaultError::AuthenticationFailed));
}

#[test]
fn roundtrip_entry_preserves_every_field() {
    let entry = Entry {
        id: "1".into(),
        name: "Bank".into(),
        username: "alice".into(),
        password: "p@ss".into(),
        url: "bank.example".into(),
        tags: "finance,important".into(),
        notes: String::new(),
    };

    let blob = encode_entries(std::slice::from_ref(&entry), b"hunter2").unwrap();
    let decoded = decode_entries(&blob, b"hunter2").unwrap();

    assert_eq!(decoded, vec![entry]);
}

#[test]
fn roundtrip_preserves_entry_order() {
    let entries: Vec<Entry> = ["c", "a", "b"]
        .iter()
        .map(|name| Entry::new(name))
        .collect();

    let blob = encode_entries(&entries, b"ordering-pw").unwrap();
    let decoded = decode_entries(&blob, b"ordering-pw").unwrap();
    assert_eq!(decoded, entries);
}

#[test]
fn empty_password_is_accepted() {
    // Weak, but valid: the codec does not enforce password policy.
    let blob = encode(b"payload", b"").unwrap();
    assert_eq!(decode(&blob, b"").unwrap(), b"payload");
    assert!(decode(&blob, b"nonempty").is_err());
}

#[test]
fn empty_plaintext_roundtrips() {
    let blob = encode(b"", b"pw").unwrap();
    assert_eq!(blob.len(), MIN_CONTAINER_LEN);
    assert_eq!(decode(&blob, b"pw").unwrap(), b"");
}

// ---------------------------------------------------------------------------
// Wrong password
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_fails_authentication() {
    let blob = encode(b"secret", b"right-password").unwrap();
    let err = decode(&blob, b"wrong-password").unwrap_err();
    assert!(matches!(err, PwmVaultError::AuthenticationFailed));
}

// ---------------------------------------------------------------------------
// Tamper detection — a flipped bit anywhere past the lengths must fail
// authentication, never yield wrong plaintext.
// ---------------------------------------------------------------------------

fn assert_bit_flip_fails_auth(region_start: usize, region_end: usize) {
    let blob = encode(b"tamper target plaintext", b"pw").unwrap();

    for index in [region_start, (region_start + region_end) / 2, region_end - 1] {
        let mut tampered = blob.clone();
        tampered[index] ^= 0x01;

        let err = decode(&tampered, b"pw").unwrap_err();
        assert!(
            matches!(err, PwmVaultError::AuthenticationFailed),
            "bit flip at offset {index} produced {err:?} instead of AuthenticationFailed"
        );
    }
}

#[test]
fn flipped_salt_bit_fails_authentication() {
    // Wrong salt -> wrong derived key -> tag mismatch.
    assert_bit_flip_fails_auth(SALT_START, IV_START);
}

#[test]
fn flipped_iv_bit_fails_authentication() {
    assert_bit_flip_fails_auth(IV_START, TAG_START);
}

#[test]
fn flipped_tag_bit_fails_authentication() {
    assert_bit_flip_fails_auth(TAG_START, CT_START);
}

#[test]
fn flipped_ciphertext_bit_fails_authentication() {
    let blob = encode(b"tamper target plaintext", b"pw").unwrap();
    assert_bit_flip_fails_auth(CT_START, blob.len());
}

// ---------------------------------------------------------------------------
// Structural failures
// ---------------------------------------------------------------------------

#[test]
fn truncated_container_is_malformed() {
    let blob = encode(b"payload", b"pw").unwrap();

    for len in [0, 1, 4, 6, 20, MIN_CONTAINER_LEN - 1] {
        let err = decode(&blob[..len], b"pw").unwrap_err();
        assert!(
            matches!(err, PwmVaultError::MalformedContainer(_)),
            "prefix of {len} bytes produced {err:?} instead of MalformedContainer"
        );
    }
}

#[test]
fn corrupted_magic_is_unsupported_format() {
    let mut blob = encode(b"payload", b"pw").unwrap();
    blob[0] = b'X';

    let err = decode(&blob, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::UnsupportedFormat));
}

#[test]
fn oversized_length_byte_is_malformed() {
    // Claim a 255-byte salt in a minimum-size container: the cursor walk
    // must fail cleanly instead of slicing past the end.
    let mut blob = encode(b"", b"pw").unwrap();
    blob[4] = 255;

    let err = decode(&blob, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::MalformedContainer(_)));
}

// ---------------------------------------------------------------------------
// Non-determinism across saves
// ---------------------------------------------------------------------------

#[test]
fn two_encodes_differ_in_salt_nonce_and_ciphertext() {
    let blob1 = encode(b"identical plaintext", b"same-pw").unwrap();
    let blob2 = encode(b"identical plaintext", b"same-pw").unwrap();

    assert_ne!(&blob1[SALT_START..IV_START], &blob2[SALT_START..IV_START]);
    assert_ne!(&blob1[IV_START..TAG_START], &blob2[IV_START..TAG_START]);
    assert_ne!(&blob1[CT_START..], &blob2[CT_START..]);

    // Both still decode to the same plaintext.
    assert_eq!(decode(&blob1, b"same-pw").unwrap(), b"identical plaintext");
    assert_eq!(decode(&blob2, b"same-pw").unwrap(), b"identical plaintext");
}
