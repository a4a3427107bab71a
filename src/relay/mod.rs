// src/relay/mod.rs
pub mod client;
pub mod messaging;
pub mod page;
pub mod session;
pub mod worker;

pub use client::{RelayClient, RelayError};
pub use messaging::{MessageTransport, MessagingError, RelayMessage, RelayReply};
pub use page::PageScraper;
pub use session::{send_with_retry, AnalysisSession, SessionError};
pub use worker::{RelayHandle, RelayWorker};
