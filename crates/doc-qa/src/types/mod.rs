//! Core types for the document Q&A system

pub mod document;
pub mod exchange;
pub mod query;
pub mod response;

pub use document::{Document, DocumentStats, FileType};
pub use exchange::Exchange;
pub use query::{AskRequest, DocumentQuery};
pub use response::{AskResponse, DocumentSummary, DocumentView, HistoryResponse};
