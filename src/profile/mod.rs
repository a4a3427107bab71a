// src/profile/mod.rs
pub mod bio;
pub mod extractor;
pub mod platform;
pub mod types;

pub use extractor::{ExtractError, FieldOutcome, ProfileExtractor};
pub use platform::{detect_platform, is_profile_page};
pub use types::{Platform, ProfileData, ProfileField};
