//! Configuration for the document Q&A system
//!
//! Values come from, lowest precedence first: built-in defaults, a TOML file,
//! and environment variables. The API key is never baked into a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Env var naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "DOC_QA_CONFIG";
/// Env var carrying the completion API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Chat-completion configuration
    pub llm: LlmConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 200MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            enable_cors: true,
            max_upload_size: 200 * 1024 * 1024, // 200MB
        }
    }
}

/// Chat-completion endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Bearer token; read from the environment when absent from the file
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature (0 = deterministic)
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-oss-20b".to_string(),
            api_key: None,
            max_tokens: 1000,
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

impl QaConfig {
    /// Load configuration from defaults, an optional TOML file and the environment.
    ///
    /// With `path == None` the file named by `DOC_QA_CONFIG` is used, falling back
    /// to `<config_dir>/doc-qa/config.toml` if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .or_else(|| default_config_path().filter(|p| p.exists())),
        };

        let mut config = match file {
            Some(file) => {
                tracing::info!("Loading configuration from {}", file.display());
                Self::from_file(&file)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse TOML text; missing sections and keys take their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Overlay environment values using the given lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = lookup("DOC_QA_BASE_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = lookup("DOC_QA_MODEL") {
            self.llm.model = model;
        }
        if let Some(host) = lookup("DOC_QA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DOC_QA_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid DOC_QA_PORT '{}': {}", port, e)))?;
        }
        Ok(())
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.llm.base_url.trim().is_empty() {
            return Err(Error::config("llm.base_url must not be empty"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        if self.llm.max_tokens == 0 {
            return Err(Error::config("llm.max_tokens must be greater than zero"));
        }
        if self.llm.temperature < 0.0 {
            return Err(Error::config("llm.temperature must not be negative"));
        }
        Ok(())
    }
}

/// `<config_dir>/doc-qa/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("doc-qa").join("config.toml"))
}
