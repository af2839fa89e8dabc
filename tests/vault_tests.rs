//! Integration tests for the VaultStore.

use std::fs;

use pwmvault::errors::PwmVaultError;
use pwmvault::vault::{Entry, VaultStore};
use tempfile::TempDir;

/// Helper: create a temporary vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("test.pwm");
    (dir, path)
}

fn named_entry(name: &str) -> Entry {
    let mut entry = Entry::new(name);
    entry.username = format!("{name}-user");
    entry.password = format!("{name}-pass");
    entry
}

// ---------------------------------------------------------------------------
// Create and re-open round-trip
// ---------------------------------------------------------------------------

#[test]
fn create_vault_and_reopen() {
    let (_dir, path) = vault_path();
    let password = b"test-password";

    let mut store = VaultStore::create(&path, password).expect("create vault");
    assert_eq!(store.entry_count(), 0);

    store.upsert(named_entry("Bank"));
    store.save(password).unwrap();

    let store2 = VaultStore::open(&path, password).expect("open vault");
    assert_eq!(store2.entry_count(), 1);
    assert_eq!(store2.entries()[0].name, "Bank");
    assert_eq!(store2.entries()[0].password, "Bank-pass");
}

#[test]
fn create_refuses_to_overwrite() {
    let (_dir, path) = vault_path();
    VaultStore::create(&path, b"pw").unwrap();

    let err = VaultStore::create(&path, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::VaultAlreadyExists(_)));
}

#[test]
fn open_missing_vault_is_not_found() {
    let (_dir, path) = vault_path();
    let err = VaultStore::open(&path, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::VaultNotFound(_)));
}

#[test]
fn open_with_wrong_password_fails_authentication() {
    let (_dir, path) = vault_path();
    VaultStore::create(&path, b"right").unwrap();

    let err = VaultStore::open(&path, b"wrong").unwrap_err();
    assert!(matches!(err, PwmVaultError::AuthenticationFailed));
}

// ---------------------------------------------------------------------------
// Entry operations
// ---------------------------------------------------------------------------

#[test]
fn new_entries_go_to_the_front() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"pw").unwrap();

    store.upsert(named_entry("First"));
    store.upsert(named_entry("Second"));

    assert_eq!(store.entries()[0].name, "Second");
    assert_eq!(store.entries()[1].name, "First");
}

#[test]
fn upsert_replaces_in_place_by_id() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"pw").unwrap();

    store.upsert(named_entry("Keep"));
    store.upsert(named_entry("Target"));

    let mut updated = store.entries()[0].clone();
    assert_eq!(updated.name, "Target");
    updated.password = "rotated".into();
    store.upsert(updated);

    // Same position, same count, new value.
    assert_eq!(store.entry_count(), 2);
    assert_eq!(store.entries()[0].name, "Target");
    assert_eq!(store.entries()[0].password, "rotated");
}

#[test]
fn find_matches_id_then_name_case_insensitively() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"pw").unwrap();

    let entry = named_entry("Bank");
    let id = entry.id.clone();
    store.upsert(entry);

    assert_eq!(store.find(&id).unwrap().name, "Bank");
    assert_eq!(store.find("bank").unwrap().id, id);
    assert!(store.find("missing").is_none());
}

#[test]
fn remove_deletes_and_errors_on_unknown_id() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"pw").unwrap();

    let entry = named_entry("Gone");
    let id = entry.id.clone();
    store.upsert(entry);

    store.remove(&id).unwrap();
    assert_eq!(store.entry_count(), 0);

    let err = store.remove(&id).unwrap_err();
    assert!(matches!(err, PwmVaultError::EntryNotFound(_)));
}

// ---------------------------------------------------------------------------
// Persistence discipline
// ---------------------------------------------------------------------------

#[test]
fn save_replaces_file_wholesale_with_fresh_randomness() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"pw").unwrap();
    store.upsert(named_entry("Stable"));

    store.save(b"pw").unwrap();
    let bytes1 = fs::read(&path).unwrap();
    store.save(b"pw").unwrap();
    let bytes2 = fs::read(&path).unwrap();

    // Same entries, same password — but fresh salt and nonce every save.
    assert_ne!(bytes1, bytes2);

    let reopened = VaultStore::open(&path, b"pw").unwrap();
    assert_eq!(reopened.entries()[0].name, "Stable");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, path) = vault_path();
    let store = VaultStore::create(&path, b"pw").unwrap();
    store.save(b"pw").unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["test.pwm".to_string()]);
}

#[test]
fn rotate_password_via_save() {
    let (_dir, path) = vault_path();
    let mut store = VaultStore::create(&path, b"old-password").unwrap();
    store.upsert(named_entry("Survivor"));
    store.save(b"old-password").unwrap();

    // Re-save under a new password.
    let store = VaultStore::open(&path, b"old-password").unwrap();
    store.save(b"new-password").unwrap();

    let err = VaultStore::open(&path, b"old-password").unwrap_err();
    assert!(matches!(err, PwmVaultError::AuthenticationFailed));

    let reopened = VaultStore::open(&path, b"new-password").unwrap();
    assert_eq!(reopened.entries()[0].name, "Survivor");
}

#[test]
fn truncated_vault_file_is_malformed() {
    let (_dir, path) = vault_path();
    VaultStore::create(&path, b"pw").unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..10]).unwrap();

    let err = VaultStore::open(&path, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::MalformedContainer(_)));
}

#[test]
fn foreign_file_is_unsupported_format() {
    let (_dir, path) = vault_path();
    // Anything long enough but with the wrong magic.
    fs::write(&path, vec![0u8; 64]).unwrap();

    let err = VaultStore::open(&path, b"pw").unwrap_err();
    assert!(matches!(err, PwmVaultError::UnsupportedFormat));
}
