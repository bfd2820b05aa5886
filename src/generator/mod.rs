//! Deterministic site passwords.
//!
//! The generator is an independent path from the vault: it never touches the
//! entry store or the cipher, only the slow-hash derivation. Identical
//! inputs always produce the identical password, which is the whole point —
//! a password can be regenerated anywhere from its non-secret parameters
//! plus the master secret, without ever storing it.

pub mod profile;

use rand::RngCore;
use zeroize::Zeroize;

use crate::crypto::{derive_generator_secret, Argon2Params, ImageFingerprint};
use crate::errors::{PassVaultError, Result};

pub use profile::{GeneratorProfile, ProfileStore};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 64;

/// Everything that determines a generated password except the master secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    pub site_id: String,
    pub username: String,
    pub fingerprint: ImageFingerprint,
    pub length: usize,
}

/// Derives the password for `params` under `master_secret`.
///
/// Steps: Argon2id over the master secret with salt
/// `site_id ++ fingerprint_hex ++ username` (plain byte concatenation — two
/// different component splits that concatenate identically derive the same
/// password), Z85-encode the 64 derived bytes to 80 text characters, keep
/// the last `length` of them.
///
/// Length is checked before any derivation runs, so an out-of-range request
/// costs nothing.
pub fn generate(
    master_secret: &[u8],
    params: &GeneratorParams,
    argon2: &Argon2Params,
) -> Result<String> {
    check_length(params.length)?;

    let mut salt = Vec::with_capacity(
        params.site_id.len() + params.fingerprint.as_str().len() + params.username.len(),
    );
    salt.extend_from_slice(params.site_id.as_bytes());
    salt.extend_from_slice(params.fingerprint.as_str().as_bytes());
    salt.extend_from_slice(params.username.as_bytes());

    let mut derived = derive_generator_secret(master_secret, &salt, argon2)?;
    let encoded = z85::encode(&derived);
    derived.zeroize();

    if encoded.len() < params.length {
        return Err(PassVaultError::InvalidLength {
            requested: params.length,
            min: MIN_PASSWORD_LEN,
            max: MAX_PASSWORD_LEN,
        });
    }

    Ok(encoded[encoded.len() - params.length..].to_string())
}

fn check_length(length: usize) -> Result<()> {
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&length) {
        return Err(PassVaultError::InvalidLength {
            requested: length,
            min: MIN_PASSWORD_LEN,
            max: MAX_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Characters used for one-off random passwords in the add-entry flow.
const RANDOM_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+";

/// Default length of a one-off random password.
pub const RANDOM_PASSWORD_LEN: usize = 16;

/// A non-deterministic throwaway password from the OS RNG.
///
/// Bytes are reduced modulo the charset size, so the distribution carries a
/// slight bias toward the front of the charset.
pub fn random_password(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    let password = bytes
        .iter()
        .map(|b| RANDOM_CHARSET[*b as usize % RANDOM_CHARSET.len()] as char)
        .collect();
    bytes.zeroize();
    password
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
