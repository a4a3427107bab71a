// src/relay/page.rs
use super::messaging::{MessageTransport, MessagingError, RelayMessage, RelayReply, ScrapeReply};
use crate::profile::{is_profile_page, Platform, ProfileData, ProfileExtractor};
use async_trait::async_trait;
use scraper::Html;
use tracing::{debug, info};

/// A captured page: its URL and the HTML it rendered.
pub struct PageScraper {
    url: String,
    html: String,
    platform: Platform,
    extractor: ProfileExtractor,
}

impl PageScraper {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        let platform = Platform::from_url(&url);

        Self {
            url,
            html: html.into(),
            platform,
            extractor: ProfileExtractor::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_profile_page(&self) -> bool {
        is_profile_page(self.platform, &self.url)
    }

    pub fn scrape(&self) -> ProfileData {
        let document = Html::parse_document(&self.html);
        self.extractor.extract(&document, self.platform)
    }

    /// The announcement sent once a profile page has loaded.
    pub fn page_loaded_message(&self) -> Option<RelayMessage> {
        if !self.is_profile_page() {
            return None;
        }

        Some(RelayMessage::PageLoaded {
            platform: self.platform,
            is_profile: true,
        })
    }

    pub fn handle(&self, message: &RelayMessage) -> Option<RelayReply> {
        match message {
            RelayMessage::ScrapeProfile => {
                info!("Scraping {} page {}", self.platform, self.url);
                Some(RelayReply::Profile(ScrapeReply {
                    success: true,
                    data: self.scrape(),
                }))
            }
            other => {
                debug!("Page ignores action {}", other.action());
                None
            }
        }
    }
}

#[async_trait]
impl MessageTransport for PageScraper {
    async fn send(&self, message: RelayMessage) -> Result<Option<RelayReply>, MessagingError> {
        Ok(self.handle(&message))
    }
}
