// src/web/error.rs
use crate::analysis::CompletionError;
use rocket::http::Status;
use thiserror::Error;

/// Everything `/analyze` can answer besides success. `Display` is the
/// message returned to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Server misconfigured: API key missing")]
    MissingApiKey,

    #[error("Missing profileData in request body")]
    MissingProfileData,

    #[error("Invalid API key configuration")]
    UpstreamAuth,

    #[error("API access forbidden. Check API key permissions.")]
    UpstreamForbidden,

    #[error("API rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,

    #[error("AI returned invalid response format. Please try again.")]
    UpstreamFormat,

    #[error("Failed to analyze profile. Please try again.")]
    Upstream,
}

impl AnalysisError {
    pub fn status(&self) -> Status {
        match self {
            AnalysisError::MissingProfileData => Status::BadRequest,
            AnalysisError::UpstreamRateLimited => Status::TooManyRequests,
            _ => Status::InternalServerError,
        }
    }
}

impl From<CompletionError> for AnalysisError {
    fn from(error: CompletionError) -> Self {
        match error {
            CompletionError::Api { status: 401, .. } => AnalysisError::UpstreamAuth,
            CompletionError::Api { status: 403, .. } => AnalysisError::UpstreamForbidden,
            CompletionError::Api { status: 429, .. } => AnalysisError::UpstreamRateLimited,
            CompletionError::MissingContent | CompletionError::InvalidFormat(_) => {
                AnalysisError::UpstreamFormat
            }
            CompletionError::Api { .. } | CompletionError::Transport(_) => AnalysisError::Upstream,
        }
    }
}
