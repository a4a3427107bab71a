pub mod response;

pub use response::{ApiResponse, BackendStatus, HealthResponse};
