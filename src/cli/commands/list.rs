//! `passvault list` — display all entries in a masked table.

use crate::cli::output;
use crate::cli::{load_fingerprint, open_backend_for, prompt_password, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultSession;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
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

    output::info(&format!(
        "Vault '{}' — {} entr{}",
        cli.vault,
        session.len(),
        if session.len() == 1 { "y" } else { "ies" }
    ));

    output::print_entries_table(session.entries());

    Ok(())
}
