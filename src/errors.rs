use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Decryption failed — wrong master secret or corrupted record")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault '{0}' not found")]
    VaultNotFound(String),

    #[error("Vault '{0}' already exists")]
    VaultAlreadyExists(String),

    #[error("Vault decrypted but its payload is not a valid entry list: {0}")]
    VaultCorrupt(String),

    #[error("Entry index {index} is out of range (vault has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    // --- Generator errors ---
    #[error("Password length {requested} is invalid — must be between {min} and {max}")]
    InvalidLength {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Generator profile for '{0}' not found")]
    ProfileNotFound(String),

    #[error("Image fingerprint does not match the one stored for this profile")]
    FingerprintMismatch,

    // --- Fingerprint errors ---
    #[error("Image file not found at {0}")]
    ImageNotFound(PathBuf),

    // --- Storage errors ---
    #[error("Storage backend error: {0}")]
    Storage(String),

    #[error("Malformed vault record: {0}")]
    MalformedRecord(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
