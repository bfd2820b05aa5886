//! Persisted generator metadata.
//!
//! Because generation is deterministic, regenerating a password needs only
//! its non-secret parameters. Profiles carry exactly those — site, username,
//! image fingerprint, length — and nothing derived from the master secret.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::ImageFingerprint;
use crate::errors::{PassVaultError, Result};

/// Everything needed to regenerate one site password, minus the secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorProfile {
    pub site_id: String,
    pub username: String,
    pub fingerprint: ImageFingerprint,
    pub length: usize,
    pub created_at: DateTime<Utc>,
}

impl GeneratorProfile {
    pub fn new(
        site_id: impl Into<String>,
        username: impl Into<String>,
        fingerprint: ImageFingerprint,
        length: usize,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            username: username.into(),
            fingerprint,
            length,
            created_at: Utc::now(),
        }
    }
}

/// JSON-backed profile collection at `<dir>/profiles.json`.
pub struct ProfileStore {
    path: PathBuf,
    profiles: Vec<GeneratorProfile>,
}

impl ProfileStore {
    const FILE_NAME: &'static str = "profiles.json";

    /// Loads the store, starting empty if the file does not exist yet.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self {
                path,
                profiles: Vec::new(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        let profiles: Vec<GeneratorProfile> = serde_json::from_str(&contents).map_err(|e| {
            PassVaultError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;
        Ok(Self { path, profiles })
    }

    /// Writes the store atomically (temp file + rename).
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.profiles)
            .map_err(|e| PassVaultError::Serialization(e.to_string()))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(".{}.tmp", Self::FILE_NAME));
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Inserts the profile, replacing any existing one for the same
    /// (site_id, username) pair.
    pub fn upsert(&mut self, profile: GeneratorProfile) {
        match self
            .profiles
            .iter_mut()
            .find(|p| p.site_id == profile.site_id && p.username == profile.username)
        {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn find(&self, site_id: &str, username: &str) -> Option<&GeneratorProfile> {
        self.profiles
            .iter()
            .find(|p| p.site_id == site_id && p.username == username)
    }

    pub fn profiles(&self) -> &[GeneratorProfile] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
