// src/core/config_manager.rs
//! Process configuration read from the environment

use crate::analysis::completion_client::DEFAULT_COMPLETION_API_URL;
use crate::relay::client::DEFAULT_BACKEND_URL;
use crate::utils::mask_secret;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SETTINGS_PATH: &str = "findn_settings.toml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub server: ServerConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` when unset or empty.
    pub api_key: Option<String>,
    pub completion_api_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub backend_url: String,
    pub settings_path: PathBuf,
}

impl ConfigManager {
    /// Load `.env` (if any) and then read every setting from the environment.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Ok(Self {
            server: Self::load_server()?,
            relay: Self::load_relay(),
        })
    }

    fn load_server() -> Result<ServerConfig> {
        let port = match read_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let api_key = read_var("OPENAI_API_KEY");
        match &api_key {
            Some(key) => info!("API key loaded: {}", mask_secret(key)),
            None => warn!("OPENAI_API_KEY not set; /analyze will refuse requests"),
        }

        Ok(ServerConfig {
            port,
            api_key,
            completion_api_url: read_var("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_API_URL.to_string()),
        })
    }

    fn load_relay() -> RelayConfig {
        RelayConfig {
            backend_url: read_var("FINDN_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            settings_path: read_var("FINDN_SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
        }
    }
}

/// An unset and an empty variable read the same.
fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
