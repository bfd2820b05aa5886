//! Key derivation for the vault and the password generator.
//!
//! Two very different derivations live here on purpose:
//!
//! - The **vault key** is a single unsalted SHA-256 over the master
//!   secret (optionally followed by an image fingerprint).  No salt, no
//!   iteration cost.  Every persisted record depends on this exact
//!   construction — changing it orphans existing vaults.
//! - The **generator secret** is a salted, memory-hard Argon2id
//!   derivation used only by the deterministic password generator.

use argon2::{Algorithm, Argon2, Params, Version};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::crypto::digest::ImageFingerprint;
use crate::errors::{PassVaultError, Result};

/// Length of the vault key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// Length of the raw generator secret in bytes.
///
/// 64 bytes encode to 80 Z85 characters, so every requested password
/// length up to the 64-character maximum stays reachable.
pub const GENERATOR_SECRET_LEN: usize = 64;

/// A wrapper around the 32-byte vault key that zeroes its memory when
/// dropped, so the key cannot linger after the session ends.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Create a `VaultKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive the vault key from a master secret and an optional image
/// fingerprint.
///
/// The fingerprint's hex string bytes are appended to the secret before
/// hashing, so a vault created with an image can only be opened with
/// the same image.  Deterministic: identical inputs always produce the
/// identical key.
pub fn derive_vault_key(master_secret: &[u8], fingerprint: Option<&ImageFingerprint>) -> VaultKey {
    let mut hasher = Sha256::new();
    hasher.update(master_secret);
    if let Some(fp) = fingerprint {
        hasher.update(fp.as_bytes());
    }
    VaultKey::new(hasher.finalize().into())
}

/// Configurable Argon2id parameters for the generator derivation.
///
/// These map 1:1 to the fields in `Settings` so the CLI can pass
/// whatever the user configured in `.passvault.toml`.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Derive the raw generator secret with Argon2id.
///
/// The salt is the caller's literal byte string (site id, fingerprint
/// and username concatenated by the generator).  The same secret +
/// salt + params always produce the same output — determinism is the
/// whole point of the generator.
///
/// Enforces minimum Argon2 parameters to prevent dangerously weak KDF
/// settings.
pub fn derive_generator_secret(
    master_secret: &[u8],
    salt: &[u8],
    argon2_params: &Argon2Params,
) -> Result<[u8; GENERATOR_SECRET_LEN]> {
    if argon2_params.memory_kib < MIN_MEMORY_KIB {
        return Err(PassVaultError::KeyDerivationFailed(format!(
            "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
            argon2_params.memory_kib
        )));
    }
    if argon2_params.iterations < 1 {
        return Err(PassVaultError::KeyDerivationFailed(
            "Argon2 iterations must be at least 1".into(),
        ));
    }
    if argon2_params.parallelism < 1 {
        return Err(PassVaultError::KeyDerivationFailed(
            "Argon2 parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(
        argon2_params.memory_kib,
        argon2_params.iterations,
        argon2_params.parallelism,
        Some(GENERATOR_SECRET_LEN),
    )
    .map_err(|e| PassVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut secret = [0u8; GENERATOR_SECRET_LEN];
    argon2
        .hash_password_into(master_secret, salt, &mut secret)
        .map_err(|e| {
            PassVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}"))
        })?;

    Ok(secret)
}
