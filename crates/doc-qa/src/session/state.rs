//! Session state: one document and its conversation log

use crate::types::{Document, Exchange};

/// Ordered history of exchanges; insertion order is chronological order
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    exchanges: Vec<Exchange>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn clear(&mut self) {
        self.exchanges.clear();
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    pub fn as_slice(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }
}

/// Holder for exactly one document and one conversation log.
///
/// Every operation that changes the document also resets the log, so the
/// log never describes a document other than the current one. There is no
/// internal locking; callers own the session exclusively.
#[derive(Debug, Default)]
pub struct Session {
    document: Option<Document>,
    log: ConversationLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing document and start a fresh log
    pub fn load_document(&mut self, document: Document) -> &Document {
        tracing::info!(
            "Loaded document '{}' ({} chars), conversation reset",
            document.name,
            document.char_count()
        );
        self.log.clear();
        self.document.insert(document)
    }

    /// Discard the document and its log
    pub fn clear_document(&mut self) -> Option<Document> {
        self.log.clear();
        let previous = self.document.take();
        if let Some(doc) = &previous {
            tracing::info!("Cleared document '{}'", doc.name);
        }
        previous
    }

    /// Append an exchange.
    ///
    /// Callers must only record exchanges while a document is loaded.
    pub fn record_exchange(&mut self, exchange: Exchange) -> &Exchange {
        self.log.push(exchange);
        let count = self.log.len();
        tracing::debug!("Recorded exchange #{}", count);
        &self.log.as_slice()[count - 1]
    }

    /// Empty the log, keep the document
    pub fn clear_log(&mut self) {
        tracing::info!("Cleared {} exchanges", self.log.len());
        self.log.clear();
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}
