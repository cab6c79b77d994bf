//! Ingestion pipeline orchestration

use crate::error::Result;
use crate::types::Document;

use super::parser::FileParser;

/// Parses an upload and wraps the text in a [`Document`]
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestPipeline;

impl IngestPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Full ingestion: detect type, extract, build the document.
    ///
    /// Pure with respect to session state, so a failure here never disturbs
    /// an already-loaded document.
    pub fn ingest(&self, filename: &str, content_type: Option<&str>, data: &[u8]) -> Result<Document> {
        tracing::info!("Processing document: {} ({} bytes)", filename, data.len());

        let parsed = match FileParser::parse(filename, content_type, data) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Failed to extract text from document: {}", e);
                return Err(e);
            }
        };

        let mut doc = Document::new(filename, parsed.content, parsed.file_type)
            .with_size(data.len() as u64)
            .with_page_count(parsed.total_pages);
        doc.content_hash = parsed.content_hash;

        Ok(doc)
    }
}
