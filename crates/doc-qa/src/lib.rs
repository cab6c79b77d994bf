//! doc-qa: ask questions about a single uploaded document
//!
//! A PDF or plain-text file is extracted to text, and every question is
//! answered by sending the whole text plus the question to an
//! OpenAI-compatible chat-completion endpoint. One session holds at most one
//! document and the ordered history of questions asked about it.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod server;
pub mod session;
pub mod types;

pub use config::QaConfig;
pub use error::{Error, Result};
pub use session::DocumentAssistant;
pub use types::{
    document::{Document, DocumentStats, FileType},
    exchange::Exchange,
};
