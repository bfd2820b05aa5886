//! `passvault regen` — rebuild a password from a stored generator profile.

use std::time::Duration;

use crate::cli::output;
use crate::cli::{prompt_password, vault_dir, Cli};
use crate::clipboard::{schedule_clear, ClipboardSink, SystemClipboard};
use crate::config::Settings;
use crate::crypto::fingerprint_file;
use crate::errors::{PassVaultError, Result};
use crate::generator::{generate, GeneratorParams, ProfileStore};

/// Execute the `regen` command.
pub fn execute(cli: &Cli, site: &str, username: &str, copy: bool) -> Result<()> {
    let dir = vault_dir(cli)?;
    let store = ProfileStore::load(&dir)?;
    let profile = store
        .find(site, username)
        .ok_or_else(|| PassVaultError::ProfileNotFound(format!("{site} / {username}")))?;

    // If an image is supplied, it must be the one the profile was made with.
    if let Some(path) = cli.image.as_deref() {
        let supplied = fingerprint_file(std::path::Path::new(path))?;
        if !supplied.ct_eq(&profile.fingerprint) {
            return Err(PassVaultError::FingerprintMismatch);
        }
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let master = prompt_password()?;

    let params = GeneratorParams {
        site_id: profile.site_id.clone(),
        username: profile.username.clone(),
        fingerprint: profile.fingerprint.clone(),
        length: profile.length,
    };
    let password = generate(master.as_bytes(), &params, &settings.argon2_params())?;

    if copy {
        let mut sink = SystemClipboard::new();
        sink.write(&password)?;
        let secs = settings.clipboard_clear_secs;
        output::success(&format!(
            "Password for {site} copied to clipboard (clears in {secs}s)"
        ));
        schedule_clear(sink, Duration::from_secs(secs)).wait()?;
        output::info("Clipboard cleared.");
    } else {
        println!("{password}");
    }

    Ok(())
}
