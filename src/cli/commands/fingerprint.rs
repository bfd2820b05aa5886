//! `passvault fingerprint` — print the fingerprint of a file.
//!
//! Useful for checking which image a vault or profile was bound to, without
//! touching any vault state.

use crate::crypto::fingerprint_file;
use crate::errors::Result;

/// Execute the `fingerprint` command.
pub fn execute(path: &str) -> Result<()> {
    let fingerprint = fingerprint_file(std::path::Path::new(path))?;
    println!("{fingerprint}");
    Ok(())
}
