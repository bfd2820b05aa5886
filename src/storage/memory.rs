//! In-memory backend.
//!
//! Records live in a shared map; clones share the same map, so a test can
//! keep one handle while a session owns another and then inspect what was
//! written. The write counter exists for exactly that kind of assertion.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::{PassVaultError, Result};
use crate::storage::VaultBackend;
use crate::vault::EncryptedRecord;

#[derive(Clone, Default)]
pub struct MemoryBackend {
    records: Arc<Mutex<HashMap<String, EncryptedRecord>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write_record` calls seen across all clones.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current record for an id, if any. Test hook.
    pub fn record(&self, vault_id: &str) -> Option<EncryptedRecord> {
        self.records.lock().ok()?.get(vault_id).cloned()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, EncryptedRecord>>> {
        self.records
            .lock()
            .map_err(|_| PassVaultError::Storage("memory backend lock poisoned".to_string()))
    }
}

impl VaultBackend for MemoryBackend {
    fn read_record(&self, vault_id: &str) -> Result<EncryptedRecord> {
        self.lock()?
            .get(vault_id)
            .cloned()
            .ok_or_else(|| PassVaultError::VaultNotFound(vault_id.to_string()))
    }

    fn write_record(&self, vault_id: &str, record: &EncryptedRecord) -> Result<()> {
        self.lock()?.insert(vault_id.to_string(), record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn record_exists(&self, vault_id: &str) -> Result<bool> {
        Ok(self.lock()?.contains_key(vault_id))
    }
}
