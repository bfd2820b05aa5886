//! CSV file backend.
//!
//! One file per vault at `<dir>/<vault_id>.csv`, two rows:
//!
//! ```text
//! IV,EncryptedData
//! <iv_hex>,<ciphertext_hex>
//! ```
//!
//! Reading is tolerant of surrounding whitespace and ignores the header
//! text; writing goes through a temp file + rename in the same directory so
//! readers never see a half-written vault.

use std::fs;
use std::path::PathBuf;

use crate::errors::{PassVaultError, Result};
use crate::storage::VaultBackend;
use crate::vault::EncryptedRecord;

const CSV_HEADER: &str = "IV,EncryptedData";

pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the vault file for an id, whether or not it exists yet.
    pub fn vault_path(&self, vault_id: &str) -> PathBuf {
        self.dir.join(format!("{vault_id}.csv"))
    }
}

impl VaultBackend for FileBackend {
    fn read_record(&self, vault_id: &str) -> Result<EncryptedRecord> {
        let path = self.vault_path(vault_id);
        if !path.is_file() {
            return Err(PassVaultError::VaultNotFound(vault_id.to_string()));
        }
        let content = fs::read_to_string(&path)?;
        parse_csv(&content)
            .ok_or_else(|| PassVaultError::MalformedRecord(format!("{}", path.display())))
    }

    fn write_record(&self, vault_id: &str, record: &EncryptedRecord) -> Result<()> {
        let path = self.vault_path(vault_id);
        let content = format!("{CSV_HEADER}\n{},{}", record.iv, record.ciphertext);

        // Atomic write: temp file in the same directory, then rename.
        let tmp_path = self.dir.join(format!(".{vault_id}.csv.tmp"));
        fs::write(&tmp_path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            let _ = fs::set_permissions(&tmp_path, perms);
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn record_exists(&self, vault_id: &str) -> Result<bool> {
        Ok(self.vault_path(vault_id).is_file())
    }
}

/// Pulls the IV and ciphertext out of the two-row layout. The header row is
/// consumed but its text is not checked, matching how these files have
/// always been read.
fn parse_csv(content: &str) -> Option<EncryptedRecord> {
    let mut rows = content.trim().lines();
    let _header = rows.next()?;
    let data = rows.next()?;
    let (iv, ciphertext) = data.split_once(',')?;
    if iv.is_empty() || ciphertext.is_empty() {
        return None;
    }
    Some(EncryptedRecord {
        iv: iv.trim().to_string(),
        ciphertext: ciphertext.trim().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
