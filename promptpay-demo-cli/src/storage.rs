//! Merchant profile persistence.
//!
//! The profile is a single JSON file inside the storage directory:
//!
//! ```text
//! <storage_dir>/profile.json
//! ```

use anyhow::{Context, Result};
use promptpay_lib::MerchantProfile;
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "profile.json";

/// File-backed store for the merchant profile.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the profile file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Load the stored profile, if any.
    pub fn load(&self) -> Result<Option<MerchantProfile>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let profile = MerchantProfile::from_json(&json)
            .with_context(|| format!("Invalid profile in {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded merchant profile");
        Ok(Some(profile))
    }

    /// Validate and persist a profile, replacing any existing one.
    pub fn save(&self, profile: &MerchantProfile) -> Result<()> {
        profile.validate()?;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path();
        std::fs::write(&path, profile.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved merchant profile");
        Ok(())
    }

    /// Remove the stored profile. Returns false if there was none.
    pub fn clear(&self) -> Result<bool> {
        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        Ok(true)
    }
}

/// Default storage directory: `<data_local_dir>/promptpay-demo`.
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptpay-demo")
}

/// Resolve the storage directory from an optional override.
pub fn storage_dir(custom: Option<&Path>) -> PathBuf {
    custom
        .map(Path::to_path_buf)
        .unwrap_or_else(default_storage_dir)
}
