//! User-level operations: upload, ask, clear

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::AnswerGenerator;
use crate::ingestion::IngestPipeline;
use crate::providers::{ChatCompletionClient, LlmProvider};
use crate::types::{Document, Exchange};

use super::state::{ConversationLog, Session};

/// Prefix of answers recorded for failed generations
pub const ANSWER_ERROR_PREFIX: &str = "Error generating answer";

/// Render a generation failure as the answer text shown to the user
pub fn error_answer(err: &Error) -> String {
    let detail = match err {
        Error::Llm(msg) => msg.clone(),
        other => other.to_string(),
    };
    format!("{}: {}", ANSWER_ERROR_PREFIX, detail)
}

/// Owns one session and runs each interaction to completion
pub struct DocumentAssistant {
    session: Session,
    pipeline: IngestPipeline,
    generator: AnswerGenerator,
}

impl DocumentAssistant {
    pub fn new(generator: AnswerGenerator) -> Self {
        Self {
            session: Session::new(),
            pipeline: IngestPipeline::new(),
            generator,
        }
    }

    /// Build an assistant backed by the configured chat-completion endpoint
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let provider: Arc<dyn LlmProvider> = Arc::new(ChatCompletionClient::new(config)?);
        Ok(Self::new(AnswerGenerator::new(provider)))
    }

    /// Extract an upload and make it the current document.
    ///
    /// On failure the session is left exactly as it was.
    pub fn upload(
        &mut self,
        filename: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<&Document> {
        let document = self.pipeline.ingest(filename, content_type, data)?;
        Ok(self.session.load_document(document))
    }

    /// Answer a question about the current document and record the exchange.
    ///
    /// A failed generation still produces an exchange whose answer describes
    /// the failure; only a blank question or a missing document is an error.
    pub async fn ask(&mut self, question: &str) -> Result<&Exchange> {
        if question.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let document = self.session.document().ok_or(Error::NoDocument)?;
        tracing::info!("Question about '{}': \"{}\"", document.name, question);

        let exchange = match self.generator.generate(&document.text, question).await {
            Ok(answer) => Exchange::new(question, answer),
            Err(e) => Exchange::failed(question, error_answer(&e)),
        };

        Ok(self.session.record_exchange(exchange))
    }

    /// Discard the document and its history
    pub fn clear_document(&mut self) -> Option<Document> {
        self.session.clear_document()
    }

    /// Discard the history, keep the document
    pub fn clear_history(&mut self) {
        self.session.clear_log();
    }

    pub fn document(&self) -> Option<&Document> {
        self.session.document()
    }

    pub fn history(&self) -> &ConversationLog {
        self.session.log()
    }
}
