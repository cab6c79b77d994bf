//! Provider abstractions for the remote completion capability

pub mod llm;
pub mod openai;
#[cfg(test)]
pub mod stub;

pub use llm::LlmProvider;
pub use openai::ChatCompletionClient;
#[cfg(test)]
pub use stub::StubLlm;
