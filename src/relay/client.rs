// src/relay/client.rs
use crate::analysis::AnalysisResult;
use crate::profile::ProfileData;
use crate::types::{ApiResponse, BackendStatus};
use crate::utils::normalize_base_url;
use anyhow::Context;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3002";

const ANALYZE_ENDPOINT: &str = "/analyze";
const HEALTH_ENDPOINT: &str = "/health";
const UNSUCCESSFUL_RESPONSE: &str = "Backend returned unsuccessful response";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Cannot connect to Findn AI backend. Make sure the server is running on {backend_url}")]
    Unreachable { backend_url: String },

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Transport(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    profile_data: &'a ProfileData,
}

/// HTTP hop from the relay to the backend service.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    backend_url: String,
}

impl RelayClient {
    pub fn new(backend_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            backend_url: normalize_base_url(backend_url),
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub async fn analyze(&self, profile: &ProfileData) -> Result<AnalysisResult, RelayError> {
        let url = format!("{}{}", self.backend_url, ANALYZE_ENDPOINT);
        info!("Forwarding {} profile to {}", profile.platform, url);

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest {
                profile_data: profile,
            })
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let envelope = serde_json::from_str::<ApiResponse<AnalysisResult>>(&body);

        if !status.is_success() {
            let message = envelope
                .ok()
                .and_then(|e| e.error)
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| format!("Backend API error: {}", status.as_u16()));
            error!("Backend rejected analysis: {}", message);
            return Err(RelayError::Backend(message));
        }

        match envelope {
            Ok(envelope) => envelope.into_result(UNSUCCESSFUL_RESPONSE).map_err(|message| {
                error!("Backend analysis failed: {}", message);
                RelayError::Backend(message)
            }),
            Err(e) => {
                warn!("Unparseable backend response: {}", e);
                Err(RelayError::Backend(UNSUCCESSFUL_RESPONSE.to_string()))
            }
        }
    }

    /// Probe the health endpoint. Never fails.
    pub async fn check_status(&self) -> BackendStatus {
        let url = format!("{}{}", self.backend_url, HEALTH_ENDPOINT);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => BackendStatus::Connected,
            Ok(response) => {
                warn!("Backend health check returned {}", response.status());
                BackendStatus::Error
            }
            Err(e) => {
                warn!("Backend health check failed: {}", e);
                BackendStatus::Offline
            }
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> RelayError {
        error!("Network error calling backend: {}", e);
        if e.is_connect() {
            RelayError::Unreachable {
                backend_url: self.backend_url.clone(),
            }
        } else {
            RelayError::Transport(e.to_string())
        }
    }
}
