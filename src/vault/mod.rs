//! Vault model: entries, the sealed record codec, and the open session.

pub mod codec;
pub mod entry;
pub mod session;

pub use codec::{open_entries, seal_entries, EncryptedRecord};
pub use entry::{EntryStore, VaultEntry};
pub use session::VaultSession;
