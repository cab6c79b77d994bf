//! LLM provider trait for generating answers

use async_trait::async_trait;

use crate::error::Result;

/// Trait for a remote text-completion capability
///
/// Implementations:
/// - `ChatCompletionClient`: any OpenAI-compatible `/chat/completions` endpoint
///   (OpenRouter by default)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt and return the generated text verbatim
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
