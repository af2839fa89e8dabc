use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PwmVault.
#[derive(Debug, Error)]
pub enum PwmVaultError {
    // --- Container errors ---
    #[error("Malformed vault container: {0}")]
    MalformedContainer(String),

    #[error("Unsupported file format — not a PWM1 vault")]
    UnsupportedFormat,

    #[error("Authentication failed — wrong password or corrupted vault")]
    AuthenticationFailed,

    #[error("Vault payload corrupt: {0}")]
    PayloadCorrupt(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PwmVault results.
pub type Result<T> = std::result::Result<T, PwmVaultError>;
