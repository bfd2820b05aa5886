//! An open vault: key, entries, and the backend they persist through.
//!
//! `VaultSession` is the only way to work with a vault. Opening derives the
//! key, reads the sealed record from the backend, and decrypts it; from then
//! on the in-memory entry store is authoritative. Every mutating call seals
//! the full entry sequence under a fresh IV and hands the backend exactly
//! one record to write, so adding or deleting an entry is exactly one write.
//! If that write fails the in-memory entries are untouched and the call can
//! simply be retried.
//!
//! The derived key lives only inside the session and is wiped when the
//! session drops. Nothing here logs or persists key material.

use crate::crypto::{derive_vault_key, ImageFingerprint, VaultKey};
use crate::errors::{PassVaultError, Result};
use crate::storage::VaultBackend;
use crate::vault::codec::{open_entries, seal_entries};
use crate::vault::entry::{EntryStore, VaultEntry};

pub struct VaultSession {
    vault_id: String,
    key: VaultKey,
    entries: EntryStore,
    backend: Box<dyn VaultBackend>,
}

impl VaultSession {
    /// Creates a new vault and persists an empty sealed record for it.
    ///
    /// Fails with `VaultAlreadyExists` if the backend already holds a record
    /// under this id; an existing vault is never silently replaced.
    pub fn create(
        vault_id: &str,
        master_secret: &[u8],
        fingerprint: Option<&ImageFingerprint>,
        backend: Box<dyn VaultBackend>,
    ) -> Result<Self> {
        if backend.record_exists(vault_id)? {
            return Err(PassVaultError::VaultAlreadyExists(vault_id.to_string()));
        }
        let key = derive_vault_key(master_secret, fingerprint);
        let mut session = Self {
            vault_id: vault_id.to_string(),
            key,
            entries: EntryStore::new(),
            backend,
        };
        session.save()?;
        Ok(session)
    }

    /// Opens an existing vault, decrypting its record with the derived key.
    ///
    /// A wrong master secret or wrong image almost always surfaces as
    /// `DecryptionFailed` here; there is no separate authentication step.
    pub fn open(
        vault_id: &str,
        master_secret: &[u8],
        fingerprint: Option<&ImageFingerprint>,
        backend: Box<dyn VaultBackend>,
    ) -> Result<Self> {
        if !backend.record_exists(vault_id)? {
            return Err(PassVaultError::VaultNotFound(vault_id.to_string()));
        }
        let key = derive_vault_key(master_secret, fingerprint);
        let record = backend.read_record(vault_id)?;
        let entries = open_entries(&record, &key)?;
        Ok(Self {
            vault_id: vault_id.to_string(),
            key,
            entries: EntryStore::from_entries(entries),
            backend,
        })
    }

    /// Appends an entry and persists the vault in one write.
    pub fn add_entry(&mut self, entry: VaultEntry) -> Result<()> {
        self.entries.add(entry);
        self.save()
    }

    /// Removes the entry at a 1-based index and persists the vault in one
    /// write. Returns the removed entry.
    pub fn remove_entry(&mut self, index: usize) -> Result<VaultEntry> {
        let removed = self.entries.remove(index)?;
        self.save()?;
        Ok(removed)
    }

    /// Seals the current entries and writes the record through the backend.
    pub fn save(&mut self) -> Result<()> {
        let record = seal_entries(self.entries.entries(), &self.key)?;
        self.backend.write_record(&self.vault_id, &record)
    }

    pub fn entry(&self, index: usize) -> Result<&VaultEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[VaultEntry] {
        self.entries.entries()
    }

    pub fn vault_id(&self) -> &str {
        &self.vault_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
