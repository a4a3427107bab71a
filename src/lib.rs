pub mod analysis;
pub mod cli;
pub mod core;
pub mod profile;
pub mod relay;
pub mod types;
pub mod utils;
pub mod web;

pub use analysis::{AnalysisResult, CompletionClient};
pub use profile::{Platform, ProfileData, ProfileExtractor};
pub use relay::{AnalysisSession, PageScraper, RelayClient, RelayWorker};
pub use web::{build_rocket, start_web_server, AppState};
