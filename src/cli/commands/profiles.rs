//! `passvault profiles` — list stored generator profiles.

use crate::cli::output;
use crate::cli::{vault_dir, Cli};
use crate::errors::Result;
use crate::generator::ProfileStore;

/// Execute the `profiles` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let dir = vault_dir(cli)?;
    let store = ProfileStore::load(&dir)?;

    output::print_profiles_table(store.profiles());

    Ok(())
}
