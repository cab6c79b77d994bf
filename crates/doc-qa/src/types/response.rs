//! Response types returned by the HTTP surface

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::{Document, DocumentStats, FileType};
use super::exchange::Exchange;

/// Summary of the loaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// File type
    pub file_type: FileType,
    /// Uploaded size in bytes
    pub size_bytes: u64,
    /// Uploaded size in KB, as shown to users
    pub size_kb: f64,
    /// Number of pages (PDF only)
    pub page_count: Option<u32>,
    /// SHA-256 of the extracted text
    pub content_hash: String,
    /// Character, word and line counts
    pub stats: DocumentStats,
    /// Load timestamp
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            file_type: doc.file_type,
            size_bytes: doc.size_bytes,
            size_kb: doc.size_bytes as f64 / 1024.0,
            page_count: doc.page_count,
            content_hash: doc.content_hash.clone(),
            stats: doc.stats(),
            loaded_at: doc.loaded_at,
        }
    }
}

/// Document summary plus preview and, on request, the full text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    #[serde(flatten)]
    pub summary: DocumentSummary,
    /// Leading characters of the text
    pub preview: String,
    /// Full extracted text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Number of recorded exchanges
    pub exchange_count: usize,
}

/// Result of asking a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// 1-based position of this exchange in the history
    pub number: usize,
    /// The recorded exchange
    pub exchange: Exchange,
    /// Time spent generating, in milliseconds
    pub processing_time_ms: u64,
}

/// Ordered question/answer history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Loaded document name, if any
    pub document: Option<String>,
    /// Exchanges in the order they were asked
    pub exchanges: Vec<Exchange>,
    /// Total count
    pub total_count: usize,
}
