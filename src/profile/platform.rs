// src/profile/platform.rs
use super::types::Platform;
use reqwest::Url;

const LINKEDIN_HOST: &str = "linkedin.com";
const INSTAGRAM_HOST: &str = "instagram.com";

/// Classify a hostname by substring match.
pub fn detect_platform(hostname: &str) -> Platform {
    if hostname.contains(LINKEDIN_HOST) {
        Platform::Linkedin
    } else if hostname.contains(INSTAGRAM_HOST) {
        Platform::Instagram
    } else {
        Platform::Unknown
    }
}

impl Platform {
    /// Detect the platform of a full page URL. Strings that are not absolute
    /// URLs are matched as-is.
    pub fn from_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => detect_platform(parsed.host_str().unwrap_or_default()),
            Err(_) => detect_platform(url),
        }
    }
}

/// Whether `url` points at an individual's profile on `platform`.
pub fn is_profile_page(platform: Platform, url: &str) -> bool {
    let path = page_path(url);

    match platform {
        Platform::Linkedin => path.contains("/in/") || path.contains("/profile/"),
        Platform::Instagram => {
            path != "/" && !path.contains("/explore") && !path.contains("/reels")
        }
        Platform::Unknown => false,
    }
}

fn page_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) if url.is_empty() => "/".to_string(),
        Err(_) => url.to_string(),
    }
}
