//! Vault entries and the in-memory entry store.
//!
//! An entry is one credential (title, username, password). The store keeps
//! entries in insertion order and addresses them with 1-based indices, which
//! is also how every user-facing surface numbers them. Duplicate titles and
//! usernames are allowed; the index is the only identity an entry has.

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// A single credential stored in a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub title: String,
    pub username: String,
    pub password: String,
}

impl VaultEntry {
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Ordered collection of entries, owned by the open session.
///
/// Indices are 1-based at this boundary; `0` is always out of range.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntryStore {
    entries: Vec<VaultEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<VaultEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry, preserving insertion order.
    pub fn add(&mut self, entry: VaultEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the entry at the given 1-based index.
    ///
    /// Later entries shift down by one, so after removing index 2 from
    /// `[A, B, C]` the store holds `[A, C]` with `C` at index 2.
    pub fn remove(&mut self, index: usize) -> Result<VaultEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index - 1))
    }

    /// Returns the entry at the given 1-based index.
    pub fn get(&self, index: usize) -> Result<&VaultEntry> {
        self.check_index(index)?;
        Ok(&self.entries[index - 1])
    }

    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<VaultEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.entries.len() {
            return Err(PassVaultError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
