// src/core/settings.rs
use crate::profile::Platform;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Per-platform analysis toggles, persisted as TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSettings {
    pub linkedin_enabled: bool,
    pub instagram_enabled: bool,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            linkedin_enabled: true,
            instagram_enabled: true,
        }
    }
}

impl PlatformSettings {
    pub fn is_enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::Linkedin => self.linkedin_enabled,
            Platform::Instagram => self.instagram_enabled,
            Platform::Unknown => false,
        }
    }

    pub fn set_enabled(&mut self, platform: Platform, enabled: bool) {
        match platform {
            Platform::Linkedin => self.linkedin_enabled = enabled,
            Platform::Instagram => self.instagram_enabled = enabled,
            Platform::Unknown => {}
        }
    }

    /// A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = toml::to_string(self).context("Failed to serialize settings")?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;

        info!("Saved settings to {}", path.display());
        Ok(())
    }
}
