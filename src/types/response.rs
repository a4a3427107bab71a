use serde::{Deserialize, Serialize};

const FALLBACK_ERROR: &str = "Unknown error";

/// The `{success, data?, error?}` wrapper used at every boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed response; blank messages are replaced so `error` is never empty.
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            error
        };

        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    /// Collapse into a `Result`, treating a success without data as a failure.
    pub fn into_result(self, missing_data: &str) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(missing_data.to_string()),
            (false, _) => Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| missing_data.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn running(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Reachability of the backend as seen from the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Connected,
    Error,
    Offline,
}

impl BackendStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendStatus::Connected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendStatus::Connected => "connected",
            BackendStatus::Error => "error",
            BackendStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
