// src/analysis/mod.rs
pub mod completion_client;
pub mod prompt;
pub mod types;

pub use completion_client::{CompletionClient, CompletionError};
pub use prompt::build_prompt;
pub use types::{AnalysisResult, CommunicationStarter, Connection, InterestExpansion};
