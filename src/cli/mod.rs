//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::{fingerprint_file, ImageFingerprint};
use crate::errors::{PassVaultError, Result};
use crate::storage::{open_backend, BackendKind, VaultBackend};

/// Minimum master password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault with a deterministic site-password generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault to use (default: main)
    #[arg(short, long, default_value = "main", global = true)]
    pub vault: String,

    /// Vault directory (default: .passvault)
    #[arg(long, default_value = ".passvault", global = true)]
    pub vault_dir: String,

    /// Storage backend: file or sqlite (default: from .passvault.toml)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Image file whose fingerprint is mixed into key derivation
    #[arg(long, global = true)]
    pub image: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new vault
    Init,

    /// Add a credential entry
    Add {
        /// Entry title (omit for interactive prompt)
        #[arg(short, long)]
        title: Option<String>,

        /// Username (omit for interactive prompt)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (omit to be prompted)
        #[arg(short, long)]
        password: Option<String>,

        /// Generate a random 16-character password instead of prompting
        #[arg(short, long)]
        random: bool,
    },

    /// List all entries (passwords masked)
    List,

    /// Print one entry's password to stdout
    Show {
        /// 1-based entry index (see `list`)
        index: usize,
    },

    /// Copy one entry's password to the clipboard (cleared after 10s)
    Copy {
        /// 1-based entry index (see `list`)
        index: usize,
    },

    /// Delete an entry
    Delete {
        /// 1-based entry index (see `list`)
        index: usize,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Derive a deterministic password for a site
    Generate {
        /// Site identifier (e.g. example.com)
        #[arg(short, long)]
        site: String,

        /// Username the password belongs to
        #[arg(short, long)]
        username: String,

        /// Password length (8-64)
        #[arg(short, long, default_value = "16")]
        length: usize,

        /// Do not store a regeneration profile
        #[arg(long)]
        no_save: bool,

        /// Copy to clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Regenerate a password from a stored profile
    Regen {
        /// Site identifier of the stored profile
        #[arg(short, long)]
        site: String,

        /// Username of the stored profile
        #[arg(short, long)]
        username: String,

        /// Copy to clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// List stored generator profiles
    Profiles,

    /// Print the fingerprint of a file
    Fingerprint {
        /// Path of the file to fingerprint
        path: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (CI/scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used during `init`).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted/CI usage.
/// Enforces a minimum password length.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "master password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Absolute path of the vault directory from the CLI arguments.
pub fn vault_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.vault_dir))
}

/// Fingerprint of the `--image` file, if one was passed.
pub fn load_fingerprint(cli: &Cli) -> Result<Option<ImageFingerprint>> {
    match &cli.image {
        Some(path) => Ok(Some(fingerprint_file(std::path::Path::new(path))?)),
        None => Ok(None),
    }
}

/// Open the storage backend selected by `--backend`, falling back to the
/// settings file, rooted at the vault directory.
pub fn open_backend_for(cli: &Cli, settings: &Settings) -> Result<Box<dyn VaultBackend>> {
    let kind = match &cli.backend {
        Some(flag) => flag.parse::<BackendKind>()?,
        None => settings.backend,
    };
    open_backend(kind, &vault_dir(cli)?)
}

/// Validate that a vault name is safe and sensible.
///
/// Allowed: lowercase letters, digits, hyphens. Must not be empty
/// or start/end with a hyphen. Max length 64 characters.
/// This prevents accidental typos from silently creating new vaults.
pub fn validate_vault_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PassVaultError::Config("vault name cannot be empty".into()));
    }

    if name.len() > 64 {
        return Err(PassVaultError::Config(
            "vault name cannot exceed 64 characters".into(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(PassVaultError::Config(format!(
            "vault name '{name}' is invalid — only lowercase letters, digits, and hyphens are allowed"
        )));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(PassVaultError::Config(format!(
            "vault name '{name}' cannot start or end with a hyphen"
        )));
    }

    Ok(())
}
