//! `passvault generate` — derive a deterministic site password.
//!
//! Nothing derived is ever stored. With `--no-save` not even the non-secret
//! parameters are; otherwise they go into the profile store so `regen` can
//! rebuild the same password later.

use std::time::Duration;

use crate::cli::output;
use crate::cli::{prompt_password, vault_dir, Cli};
use crate::clipboard::{schedule_clear, ClipboardSink, SystemClipboard};
use crate::config::Settings;
use crate::crypto::fingerprint_file;
use crate::errors::{PassVaultError, Result};
use crate::generator::{generate, GeneratorParams, GeneratorProfile, ProfileStore};

/// Execute the `generate` command.
pub fn execute(
    cli: &Cli,
    site: &str,
    username: &str,
    length: usize,
    no_save: bool,
    copy: bool,
) -> Result<()> {
    // 1. The fingerprint is part of the derivation, so --image is required.
    let image = cli.image.as_deref().ok_or_else(|| {
        PassVaultError::CommandFailed(
            "generate requires --image <path> (its fingerprint is part of the derivation)".into(),
        )
    })?;
    let fingerprint = fingerprint_file(std::path::Path::new(image))?;

    // 2. Derive.
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let master = prompt_password()?;
    let params = GeneratorParams {
        site_id: site.to_string(),
        username: username.to_string(),
        fingerprint: fingerprint.clone(),
        length,
    };
    let password = generate(master.as_bytes(), &params, &settings.argon2_params())?;

    // 3. Hand it over — clipboard or stdout, never both.
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

    // 4. Store the regeneration profile unless asked not to.
    if !no_save {
        let dir = vault_dir(cli)?;
        std::fs::create_dir_all(&dir)?;
        let mut store = ProfileStore::load(&dir)?;
        store.upsert(GeneratorProfile::new(site, username, fingerprint, length));
        store.save()?;
        output::tip(&format!(
            "Profile stored — `passvault regen --site {site} --username {username}` rebuilds this password."
        ));
    }

    Ok(())
}
