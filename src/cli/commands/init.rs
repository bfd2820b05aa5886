//! `passvault init` — create a new vault.

use crate::cli::output;
use crate::cli::{load_fingerprint, open_backend_for, prompt_new_password, vault_dir, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultSession;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dir = vault_dir(cli)?;

    // 1. Open the backend (creates the vault directory if needed).
    let dir_existed = dir.exists();
    let settings = Settings::load(&cwd)?;
    let backend = open_backend_for(cli, &settings)?;
    if !dir_existed {
        let dir_display = dir.display();
        output::info(&format!("Created vault directory: {dir_display}"));
    }

    // 2. Refuse to clobber an existing vault.
    if backend.record_exists(&cli.vault)? {
        output::tip("Use `passvault add` to add entries to the existing vault.");
        return Err(PassVaultError::VaultAlreadyExists(cli.vault.clone()));
    }

    // 3. Prompt for a new master password (with confirmation).
    let password = prompt_new_password()?;

    // 4. Fingerprint the image if one was supplied, then create the vault.
    let fingerprint = load_fingerprint(cli)?;
    let bound_to_image = fingerprint.is_some();
    VaultSession::create(
        &cli.vault,
        password.as_bytes(),
        fingerprint.as_ref(),
        backend,
    )?;

    if bound_to_image {
        output::info("Vault key is bound to the image — pass --image on every command.");
    }
    output::success(&format!(
        "Vault '{}' created in {}",
        cli.vault,
        dir.display()
    ));

    // 5. Show helpful tips.
    output::tip("Run `passvault add` to store a credential.");
    output::tip("Run `passvault list` to see all entries.");

    Ok(())
}
