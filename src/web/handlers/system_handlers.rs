// src/web/handlers/system_handlers.rs
use crate::types::{ApiResponse, HealthResponse};
use rocket::http::Status;
use rocket::serde::json::Json;
use tracing::{debug, warn};

pub const HEALTH_MESSAGE: &str = "Findn AI Backend is running";

pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse::running(HEALTH_MESSAGE))
}

pub fn not_found_handler(path: &str) -> (Status, Json<ApiResponse<()>>) {
    warn!("No route for {}", path);
    (Status::NotFound, Json(ApiResponse::failure("Endpoint not found")))
}

pub fn internal_error_handler() -> (Status, Json<ApiResponse<()>>) {
    (
        Status::InternalServerError,
        Json(ApiResponse::failure("Internal server error")),
    )
}
