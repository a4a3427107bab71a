// src/relay/session.rs
use super::messaging::{MessageTransport, MessagingError, RelayMessage, RelayReply};
use super::page::PageScraper;
use crate::analysis::AnalysisResult;
use crate::core::PlatformSettings;
use crate::types::BackendStatus;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

pub const MAX_SEND_RETRIES: u32 = 2;
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("This page is not a supported profile page")]
    NotProfilePage,

    #[error("Analysis is disabled for {0} in settings")]
    PlatformDisabled(String),

    #[error("Failed to scrape profile data")]
    ScrapeFailed,

    #[error("Extension background script disconnected. Please reload the extension and try again.")]
    Disconnected,

    #[error("No response from background script. Try reloading the extension.")]
    NoResponse,

    #[error("{0}")]
    Analysis(String),

    #[error("{0}")]
    Messaging(String),
}

/// Send `message`, retrying only while the receiver does not exist yet.
///
/// At most `MAX_SEND_RETRIES` retries follow the first attempt, each after
/// `RETRY_DELAY`. Other failures are returned immediately.
pub async fn send_with_retry<T>(
    transport: &T,
    message: RelayMessage,
) -> Result<Option<RelayReply>, SessionError>
where
    T: MessageTransport + ?Sized,
{
    let mut retries = 0;

    loop {
        match transport.send(message.clone()).await {
            Ok(reply) => return Ok(reply),
            Err(MessagingError::ReceiverMissing) if retries < MAX_SEND_RETRIES => {
                retries += 1;
                warn!(
                    "Relay not ready (attempt {}), retrying in {:?}",
                    retries, RETRY_DELAY
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(MessagingError::ReceiverMissing) => {
                error!("Relay still unreachable after {} retries", retries);
                return Err(SessionError::Disconnected);
            }
            Err(MessagingError::Other(message)) => {
                error!("Message sending error: {}", message);
                return Err(SessionError::Messaging(message));
            }
        }
    }
}

/// The user-facing analysis flow: gate, scrape, relay, unwrap.
pub struct AnalysisSession<R> {
    relay: R,
    settings: PlatformSettings,
}

impl<R: MessageTransport> AnalysisSession<R> {
    pub fn new(relay: R, settings: PlatformSettings) -> Self {
        Self { relay, settings }
    }

    pub async fn analyze_page(&self, page: &PageScraper) -> Result<AnalysisResult, SessionError> {
        let platform = page.platform();

        if !platform.is_supported() || !page.is_profile_page() {
            return Err(SessionError::NotProfilePage);
        }
        if !self.settings.is_enabled(platform) {
            return Err(SessionError::PlatformDisabled(platform.to_string()));
        }

        let profile_data = match page.send(RelayMessage::ScrapeProfile).await {
            Ok(Some(RelayReply::Profile(reply))) if reply.success => reply.data,
            _ => return Err(SessionError::ScrapeFailed),
        };

        info!("Sending analyzeProfile message to relay");
        let reply = send_with_retry(&self.relay, RelayMessage::AnalyzeProfile { profile_data })
            .await?;

        match reply {
            Some(RelayReply::Analysis(envelope)) => envelope
                .into_result("Analysis failed")
                .map_err(SessionError::Analysis),
            Some(other) => {
                error!("Unexpected relay reply: {:?}", other);
                Err(SessionError::Analysis("Analysis failed".to_string()))
            }
            None => Err(SessionError::NoResponse),
        }
    }

    /// Never fails: anything other than a connected reply reads as offline.
    pub async fn check_backend_status(&self) -> BackendStatus {
        match self.relay.send(RelayMessage::CheckBackendStatus).await {
            Ok(Some(RelayReply::Status(reply))) => reply.status,
            Ok(_) => BackendStatus::Offline,
            Err(e) => {
                warn!("Backend status check failed: {}", e);
                BackendStatus::Offline
            }
        }
    }
}
