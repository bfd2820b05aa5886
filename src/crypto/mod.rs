//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - SHA-256 digests and image fingerprinting (`digest`)
//! - Vault-key and generator-secret derivation (`kdf`)
//! - AES-256-CBC encryption and decryption (`cipher`)

pub mod cipher;
pub mod digest;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_vault_key, ...};
pub use cipher::{decrypt, encrypt, IV_LEN};
pub use digest::{fingerprint_file, sha256, sha256_hex, ImageFingerprint};
pub use kdf::{derive_generator_secret, derive_vault_key, Argon2Params, VaultKey};
