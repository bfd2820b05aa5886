//! SQLite backend.
//!
//! One database file per vault at `<dir>/<vault_id>.db`, holding the single
//! table `encrypted_data (id, iv, encrypted_data)`. A vault is always exactly
//! one row: every write runs DELETE-then-INSERT inside one transaction, and
//! reads take the first row. Connections are opened per call, so the backend
//! itself carries no state beyond the directory.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::errors::{PassVaultError, Result};
use crate::storage::VaultBackend;
use crate::vault::EncryptedRecord;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS encrypted_data (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    iv             TEXT NOT NULL,
    encrypted_data TEXT NOT NULL
);";

pub struct SqliteBackend {
    dir: PathBuf,
}

impl SqliteBackend {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self { dir: dir.into() })
    }

    /// Path of the vault database for an id, whether or not it exists yet.
    pub fn db_path(&self, vault_id: &str) -> PathBuf {
        self.dir.join(format!("{vault_id}.db"))
    }

    fn connect(&self, vault_id: &str) -> Result<Connection> {
        let path = self.db_path(vault_id);
        let conn = Connection::open(&path).map_err(db_err)?;

        // Restrictive permissions on the database (owner-only).
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&path, perms);
        }

        conn.execute_batch(SCHEMA).map_err(db_err)?;
        Ok(conn)
    }
}

impl VaultBackend for SqliteBackend {
    fn read_record(&self, vault_id: &str) -> Result<EncryptedRecord> {
        if !self.db_path(vault_id).is_file() {
            return Err(PassVaultError::VaultNotFound(vault_id.to_string()));
        }
        let conn = self.connect(vault_id)?;
        let mut stmt = conn
            .prepare("SELECT iv, encrypted_data FROM encrypted_data LIMIT 1")
            .map_err(db_err)?;
        let mut rows = stmt
            .query_map([], |row| {
                Ok(EncryptedRecord {
                    iv: row.get(0)?,
                    ciphertext: row.get(1)?,
                })
            })
            .map_err(db_err)?;

        match rows.next() {
            Some(record) => record.map_err(db_err),
            None => Err(PassVaultError::VaultNotFound(vault_id.to_string())),
        }
    }

    fn write_record(&self, vault_id: &str, record: &EncryptedRecord) -> Result<()> {
        let mut conn = self.connect(vault_id)?;
        let tx = conn.transaction().map_err(db_err)?;
        tx.execute("DELETE FROM encrypted_data", []).map_err(db_err)?;
        tx.execute(
            "INSERT INTO encrypted_data (iv, encrypted_data) VALUES (?1, ?2)",
            rusqlite::params![record.iv, record.ciphertext],
        )
        .map_err(db_err)?;
        tx.commit().map_err(db_err)
    }

    fn record_exists(&self, vault_id: &str) -> Result<bool> {
        if !self.db_path(vault_id).is_file() {
            return Ok(false);
        }
        let conn = self.connect(vault_id)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM encrypted_data", [], |row| row.get(0))
            .map_err(db_err)?;
        Ok(count > 0)
    }
}

fn db_err(err: rusqlite::Error) -> PassVaultError {
    PassVaultError::Storage(err.to_string())
}
