// src/web/types.rs
use crate::analysis::CompletionClient;
use crate::core::ServerConfig;
use crate::profile::ProfileData;
use anyhow::Result;
use rocket::serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeRequest {
    #[serde(rename = "profileData")]
    pub profile_data: Option<ProfileData>,
}

/// Shared, read-only state for every request.
pub struct AppState {
    /// `None` when no API key is configured.
    pub completion: Option<CompletionClient>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let completion = match &config.api_key {
            Some(key) => Some(
                CompletionClient::new(key.clone())?.with_base_url(&config.completion_api_url),
            ),
            None => None,
        };

        Ok(Self { completion })
    }
}
