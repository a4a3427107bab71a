// src/web/handlers/analysis_handlers.rs
use crate::analysis::AnalysisResult;
use crate::types::ApiResponse;
use crate::utils::or_placeholder;
use crate::web::error::AnalysisError;
use crate::web::types::{AnalyzeRequest, AppState};

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::State;
use tracing::{error, info, warn};

pub async fn analyze_profile_handler(
    request: Result<Json<AnalyzeRequest>, json::Error<'_>>,
    state: &State<AppState>,
) -> (Status, Json<ApiResponse<AnalysisResult>>) {
    match analyze_profile(request, state).await {
        Ok(result) => (Status::Ok, Json(ApiResponse::success(result))),
        Err(e) => (e.status(), Json(ApiResponse::failure(e.to_string()))),
    }
}

async fn analyze_profile(
    request: Result<Json<AnalyzeRequest>, json::Error<'_>>,
    state: &AppState,
) -> Result<AnalysisResult, AnalysisError> {
    let Some(client) = state.completion.as_ref() else {
        error!("OPENAI_API_KEY environment variable is not set");
        return Err(AnalysisError::MissingApiKey);
    };

    let profile_data = match request {
        Ok(Json(AnalyzeRequest {
            profile_data: Some(profile_data),
        })) => profile_data,
        Ok(_) => return Err(AnalysisError::MissingProfileData),
        Err(e) => {
            warn!("Rejected analysis request body: {}", e);
            return Err(AnalysisError::MissingProfileData);
        }
    };

    info!(
        "Analyzing {} profile: {}",
        profile_data.platform,
        or_placeholder(&profile_data.name, "unnamed")
    );

    client.analyze(&profile_data).await.map_err(|e| {
        error!("Analysis error: {}", e);
        AnalysisError::from(e)
    })
}
