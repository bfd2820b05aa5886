//! AES-256-CBC encryption and decryption.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! returns it alongside the ciphertext.  The IV is never accepted from
//! the caller on encryption — reusing an IV under the same key for two
//! different plaintexts breaks CBC confidentiality, so fresh generation
//! is enforced by construction.  On decryption the IV is caller-supplied
//! because it is read back from the persisted record.
//!
//! CBC carries no authentication tag.  A tampered ciphertext either
//! fails PKCS#7 unpadding or decrypts to garbage; the codec layer is
//! responsible for rejecting garbage that is not a valid entry list.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::crypto::kdf::VaultKey;
use crate::errors::{PassVaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Size of the CBC initialization vector in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` under `key` with a freshly drawn random IV.
///
/// Returns the IV and the PKCS#7-padded ciphertext.
pub fn encrypt(plaintext: &[u8], key: &VaultKey) -> ([u8; IV_LEN], Vec<u8>) {
    // Draw a fresh IV from the OS RNG on every call.
    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into());
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    (iv, ciphertext)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails with `DecryptionFailed` if the ciphertext is empty, not a
/// whole number of blocks, or does not unpad cleanly.  A wrong key may
/// still unpad by chance and yield garbage — the caller must validate
/// the plaintext it gets back.
pub fn decrypt(ciphertext: &[u8], key: &VaultKey, iv: &[u8; IV_LEN]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % IV_LEN != 0 {
        return Err(PassVaultError::DecryptionFailed);
    }

    let cipher = Aes256CbcDec::new(key.as_bytes().into(), iv.into());
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)
}
