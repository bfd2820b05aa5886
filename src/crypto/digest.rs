//! SHA-256 digest utilities and image fingerprinting.
//!
//! An image fingerprint is the lowercase hex SHA-256 of an arbitrary
//! file's bytes.  It is used as auxiliary salt material: mixed into the
//! vault key when a vault is bound to an image, and always part of the
//! deterministic generator salt.  The fingerprint is not a secret — it
//! may be stored as regeneration metadata.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::{PassVaultError, Result};

/// Length of a fingerprint string (SHA-256 = 32 bytes = 64 hex chars).
pub const FINGERPRINT_LEN: usize = 64;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute the SHA-256 digest of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// A fixed-length hex-encoded hash of a file's bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageFingerprint(String);

impl ImageFingerprint {
    /// Fingerprint raw bytes (already read from a file).
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(sha256_hex(data))
    }

    /// Parse a fingerprint from a hex string, validating its shape.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != FINGERPRINT_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PassVaultError::MalformedRecord(format!(
                "fingerprint must be {FINGERPRINT_LEN} hex characters"
            )));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The fingerprint as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex string's raw bytes, as fed into key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Constant-time equality check against another fingerprint.
    ///
    /// Used when verifying a freshly computed fingerprint against one
    /// stored in a generator profile.
    pub fn ct_eq(&self, other: &ImageFingerprint) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::fmt::Display for ImageFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint the file at `path`.
///
/// Fails with `ImageNotFound` before reading anything if the path does
/// not exist — a missing image must never be silently treated as an
/// empty fingerprint, since the fingerprint feeds key derivation.
pub fn fingerprint_file(path: &Path) -> Result<ImageFingerprint> {
    if !path.exists() {
        return Err(PassVaultError::ImageNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    Ok(ImageFingerprint::of_bytes(&data))
}
