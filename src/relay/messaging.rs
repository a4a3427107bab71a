// src/relay/messaging.rs
//! Messages exchanged between the page scraper, the relay worker and the
//! analysis session.

use crate::analysis::AnalysisResult;
use crate::profile::{Platform, ProfileData};
use crate::types::{ApiResponse, BackendStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RelayMessage {
    ScrapeProfile,
    AnalyzeProfile {
        #[serde(rename = "profileData")]
        profile_data: ProfileData,
    },
    CheckBackendStatus,
    PageLoaded {
        platform: Platform,
        #[serde(rename = "isProfile")]
        is_profile: bool,
    },
}

impl RelayMessage {
    pub fn action(&self) -> &'static str {
        match self {
            RelayMessage::ScrapeProfile => "scrapeProfile",
            RelayMessage::AnalyzeProfile { .. } => "analyzeProfile",
            RelayMessage::CheckBackendStatus => "checkBackendStatus",
            RelayMessage::PageLoaded { .. } => "pageLoaded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeReply {
    pub success: bool,
    pub data: ProfileData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReply {
    pub success: bool,
    pub status: BackendStatus,
}

impl From<BackendStatus> for StatusReply {
    fn from(status: BackendStatus) -> Self {
        Self {
            success: status.is_connected(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RelayReply {
    Profile(ScrapeReply),
    Analysis(ApiResponse<AnalysisResult>),
    Status(StatusReply),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagingError {
    /// Nothing is listening on the other end yet.
    #[error("Could not establish connection. Receiving end does not exist.")]
    ReceiverMissing,

    #[error("{0}")]
    Other(String),
}

/// One side of a message channel. `Ok(None)` means the receiver handled the
/// message without replying.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn send(&self, message: RelayMessage) -> Result<Option<RelayReply>, MessagingError>;
}
