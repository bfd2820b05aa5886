//! `passvault copy` — copy an entry's password to the clipboard.
//!
//! The password never hits stdout. The process stays alive until the timed
//! clear has run, so the clipboard does not keep the secret after exit.

use std::time::Duration;

use crate::cli::output;
use crate::cli::{load_fingerprint, open_backend_for, prompt_password, Cli};
use crate::clipboard::{schedule_clear, ClipboardSink, SystemClipboard};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultSession;

/// Execute the `copy` command.
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

    let mut sink = SystemClipboard::new();
    sink.write(&entry.password)?;

    let secs = settings.clipboard_clear_secs;
    output::success(&format!(
        "Password for '{}' copied to clipboard (clears in {secs}s)",
        entry.title
    ));

    // Keep the process alive until the clear lands.
    schedule_clear(sink, Duration::from_secs(secs)).wait()?;
    output::info("Clipboard cleared.");

    Ok(())
}
