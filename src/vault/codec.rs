//! Sealed record layout for vault payloads.
//!
//! A vault persists as one `EncryptedRecord`: the AES-CBC IV and the
//! ciphertext, each hex-encoded. The plaintext inside is the JSON array of
//! entries. Failures split by layer: anything wrong with the hex, the IV
//! width, or the padding is `DecryptionFailed`; a clean decrypt that yields
//! unparseable JSON means the stored payload itself is damaged and is
//! reported as `VaultCorrupt`.

use crate::crypto::{decrypt, encrypt, VaultKey, IV_LEN};
use crate::errors::{PassVaultError, Result};
use crate::vault::entry::VaultEntry;

/// One sealed vault payload. Both fields are lowercase hex on write;
/// decoding accepts either case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedRecord {
    pub iv: String,
    pub ciphertext: String,
}

/// Serializes entries to JSON and seals them under `key` with a fresh IV.
pub fn seal_entries(entries: &[VaultEntry], key: &VaultKey) -> Result<EncryptedRecord> {
    let plaintext = serde_json::to_vec(entries)
        .map_err(|err| PassVaultError::Serialization(err.to_string()))?;
    let (iv, ciphertext) = encrypt(&plaintext, key);
    Ok(EncryptedRecord {
        iv: hex::encode(iv),
        ciphertext: hex::encode(ciphertext),
    })
}

/// Opens a sealed record back into its entries.
pub fn open_entries(record: &EncryptedRecord, key: &VaultKey) -> Result<Vec<VaultEntry>> {
    let iv_bytes = hex::decode(&record.iv).map_err(|_| PassVaultError::DecryptionFailed)?;
    let iv: [u8; IV_LEN] = iv_bytes
        .as_slice()
        .try_into()
        .map_err(|_| PassVaultError::DecryptionFailed)?;
    let ciphertext =
        hex::decode(&record.ciphertext).map_err(|_| PassVaultError::DecryptionFailed)?;
    let plaintext = decrypt(&ciphertext, key, &iv)?;
    serde_json::from_slice(&plaintext).map_err(|err| PassVaultError::VaultCorrupt(err.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::derive_vault_key;

    #[test]
    fn short_iv_is_a_decryption_failure() {
        let key = derive_vault_key(b"secret", None);
        let record = EncryptedRecord {
            iv: "0001".into(),
            ciphertext: "00112233445566778899aabbccddeeff".into(),
        };
        assert!(matches!(
            open_entries(&record, &key),
            Err(PassVaultError::DecryptionFailed)
        ));
    }

    #[test]
    fn non_hex_ciphertext_is_a_decryption_failure() {
        let key = derive_vault_key(b"secret", None);
        let record = EncryptedRecord {
            iv: "000102030405060708090a0b0c0d0e0f".into(),
            ciphertext: "not hex at all".into(),
        };
        assert!(matches!(
            open_entries(&record, &key),
            Err(PassVaultError::DecryptionFailed)
        ));
    }
}
