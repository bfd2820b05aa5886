//! `passvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_fingerprint, open_backend_for, prompt_password, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultSession;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, index: usize, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry {index}?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    // Open the vault (requires the master password).
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let backend = open_backend_for(cli, &settings)?;
    let fingerprint = load_fingerprint(cli)?;

    let master = prompt_password()?;
    let mut session = VaultSession::open(
        &cli.vault,
        master.as_bytes(),
        fingerprint.as_ref(),
        backend,
    )?;

    // Remove the entry; the session persists in the same call.
    let removed = session.remove_entry(index)?;

    output::success(&format!(
        "Deleted entry '{}' ({} remaining)",
        removed.title,
        session.len()
    ));

    Ok(())
}
