//! Application state for the doc-qa server

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::config::QaConfig;
use crate::error::Result;
use crate::session::DocumentAssistant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QaConfig,
    /// The single session. Handlers hold the guard for a whole interaction,
    /// remote call included, so interactions run one at a time.
    assistant: Mutex<DocumentAssistant>,
}

impl AppState {
    /// Create state backed by the configured completion endpoint
    pub fn new(config: QaConfig) -> Result<Self> {
        tracing::info!("Initializing doc-qa application state...");
        let assistant = DocumentAssistant::from_config(&config.llm)?;
        tracing::info!(
            "Completion client initialized ({} at {})",
            config.llm.model,
            config.llm.base_url
        );
        Ok(Self::with_assistant(config, assistant))
    }

    /// Create state around an existing assistant
    pub fn with_assistant(config: QaConfig, assistant: DocumentAssistant) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                assistant: Mutex::new(assistant),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &QaConfig {
        &self.inner.config
    }

    /// Wait for exclusive access to the session
    pub async fn assistant(&self) -> MutexGuard<'_, DocumentAssistant> {
        self.inner.assistant.lock().await
    }
}
