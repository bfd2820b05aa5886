//! `passvault add` — add a credential entry to the vault.

use crate::cli::output;
use crate::cli::{load_fingerprint, open_backend_for, prompt_password, Cli};
use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::generator::{random_password, RANDOM_PASSWORD_LEN};
use crate::vault::{VaultEntry, VaultSession};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    title: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
    random: bool,
) -> Result<()> {
    let title = match title {
        Some(t) => t.to_string(),
        None => prompt_input("Entry title")?,
    };
    let username = match username {
        Some(u) => u.to_string(),
        None => prompt_input("Username")?,
    };

    // Determine the entry password from one of three sources.
    let (entry_password, generated) = if random {
        (random_password(RANDOM_PASSWORD_LEN), true)
    } else if let Some(p) = password {
        output::warning("Password provided on command line — it may appear in shell history.");
        (p.to_string(), false)
    } else {
        let p = dialoguer::Password::new()
            .with_prompt(format!("Password for '{title}'"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
        (p, false)
    };

    // Open the vault and append the entry (one encrypted write).
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

    session.add_entry(VaultEntry::new(&title, &username, &entry_password))?;

    output::success(&format!(
        "Entry '{}' added to vault '{}' ({} total)",
        title,
        cli.vault,
        session.len()
    ));

    if generated {
        // Script-friendly: the generated password is the only stdout payload.
        println!("{entry_password}");
        output::tip("This generated password is shown once — copy it somewhere safe.");
    }

    Ok(())
}

fn prompt_input(prompt: &str) -> Result<String> {
    dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))
}
