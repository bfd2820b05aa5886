//! Storage port for sealed vault records.
//!
//! A backend stores exactly one `EncryptedRecord` per vault id. Everything
//! above this module is persistence-agnostic: the session hands a record to
//! `write_record` and gets one back from `read_record`, and never sees
//! paths, CSV, or SQL. Swapping persistence means handing the session a
//! different backend.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::vault::EncryptedRecord;

pub mod file;
pub mod memory;
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

pub use file::FileBackend;
pub use memory::MemoryBackend;
#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteBackend;

/// Persistence surface for one sealed record per vault id.
///
/// `write_record` replaces any previous record for the id; backends never
/// accumulate history. `read_record` on an unknown id is `VaultNotFound`.
pub trait VaultBackend: Send {
    fn read_record(&self, vault_id: &str) -> Result<EncryptedRecord>;
    fn write_record(&self, vault_id: &str, record: &EncryptedRecord) -> Result<()>;
    fn record_exists(&self, vault_id: &str) -> Result<bool>;
}

/// Which persistence flavor to use. Selected by config or `--backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    File,
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = PassVaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(PassVaultError::Config(format!(
                "unknown backend '{other}' (expected 'file' or 'sqlite')"
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Opens the requested backend rooted at `vault_dir`, creating the
/// directory (owner-only on unix) if it does not exist yet.
pub fn open_backend(kind: BackendKind, vault_dir: &Path) -> Result<Box<dyn VaultBackend>> {
    std::fs::create_dir_all(vault_dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o700);
        let _ = std::fs::set_permissions(vault_dir, perms);
    }

    match kind {
        BackendKind::File => Ok(Box::new(FileBackend::new(vault_dir))),
        #[cfg(feature = "sqlite-store")]
        BackendKind::Sqlite => Ok(Box::new(SqliteBackend::open(vault_dir)?)),
        #[cfg(not(feature = "sqlite-store"))]
        BackendKind::Sqlite => Err(PassVaultError::Config(
            "this build does not include the sqlite backend (rebuild with --features sqlite-store)"
                .to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
