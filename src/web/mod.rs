// src/web/mod.rs

pub mod error;
pub mod handlers;
pub mod types;

pub use error::AnalysisError;
pub use handlers::*;
pub use types::*;

use crate::analysis::AnalysisResult;
use crate::core::ServerConfig;
use crate::types::{ApiResponse, HealthResponse};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::{self, Json};
use rocket::{catch, catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization",
        ));
    }
}

#[post("/analyze", data = "<request>")]
pub async fn analyze_profile(
    request: Result<Json<AnalyzeRequest>, json::Error<'_>>,
    state: &State<AppState>,
) -> (Status, Json<ApiResponse<AnalysisResult>>) {
    handlers::analyze_profile_handler(request, state).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[catch(404)]
pub fn not_found(request: &Request<'_>) -> (Status, Json<ApiResponse<()>>) {
    handlers::not_found_handler(request.uri().path().as_str())
}

#[catch(500)]
pub fn internal_error() -> (Status, Json<ApiResponse<()>>) {
    handlers::internal_error_handler()
}

/// Assemble the server without launching it.
pub fn build_rocket(state: AppState, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register("/", catchers![not_found, internal_error])
        .mount("/", routes![analyze_profile, health, options])
}

// Main server start function
pub async fn start_web_server(config: ServerConfig) -> Result<()> {
    let state = AppState::new(&config)?;

    info!("Findn AI Backend running on port {}", config.port);
    info!("Health check: http://localhost:{}/health", config.port);
    info!("Completion API: {}", config.completion_api_url);

    build_rocket(state, config.port)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
