//! `passvault show` — print a single entry's password to stdout.
//!
//! Intended for scripting (`pass=$(passvault show 2)`); everything except
//! the password itself goes to stderr or not at all.

use crate::cli::{load_fingerprint, open_backend_for, prompt_password, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultSession;

/// Execute the `show` command.
pub fn execute(cli: &Cli, index: usize) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let backend = open_backend_for(cli, &settings)?;
    let fingerprint = load_fingerprint(cli)?;

    let master = prompt_password()?;
    let session = VaultSession::open(
        &cli.vault,
        master.as_bytes(),
        fingerprint.as_ref(),
        backend,
    )?;

    let entry = session.entry(index)?;
    println!("{}", entry.password);

    Ok(())
}
