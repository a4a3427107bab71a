// src/core/mod.rs
//! Configuration and persisted settings

pub mod config_manager;
pub mod settings;

pub use config_manager::{ConfigManager, RelayConfig, ServerConfig};
pub use settings::PlatformSettings;
