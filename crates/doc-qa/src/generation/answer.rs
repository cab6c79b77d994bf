//! Answer generation against a remote completion provider

use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::providers::LlmProvider;

use super::prompt::PromptBuilder;

/// Builds the prompt and makes exactly one completion call per question
#[derive(Clone)]
pub struct AnswerGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate an answer grounded in `document_text`.
    ///
    /// Failures are returned as-is; deciding how to present them is the
    /// caller's job.
    pub async fn generate(&self, document_text: &str, question: &str) -> Result<String> {
        let prompt = PromptBuilder::build_document_prompt(document_text, question);
        let start = Instant::now();

        tracing::info!(
            "Generating answer with {} ({}), prompt {} chars",
            self.provider.model(),
            self.provider.name(),
            prompt.chars().count()
        );

        let result = self.provider.complete(&prompt).await;

        match &result {
            Ok(answer) => tracing::info!(
                "Answer generated in {}ms ({} chars)",
                start.elapsed().as_millis(),
                answer.chars().count()
            ),
            Err(e) => tracing::warn!(
                "Generation failed after {}ms: {}",
                start.elapsed().as_millis(),
                e
            ),
        }

        result
    }
}
