//! Canned-response provider for tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{Error, Result};

use super::llm::LlmProvider;

enum Reply {
    Answer(String),
    Fail(String),
}

/// Provider that returns a fixed answer (or a fixed failure) and records
/// every prompt it receives
pub struct StubLlm {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    /// Always answer with `answer`
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            reply: Reply::Answer(answer.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `Error::Llm(message)`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.reply {
            Reply::Answer(answer) => Ok(answer.clone()),
            Reply::Fail(message) => Err(Error::llm(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub"
    }
}
