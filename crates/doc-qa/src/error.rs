//! Error types for the document Q&A system

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for doc-qa operations
pub type Result<T> = std::result::Result<T, Error>;

/// doc-qa errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable text could be recovered from an upload
    #[error("Failed to extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Remote completion call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// An operation needed a loaded document and there is none
    #[error("No document loaded")]
    NoDocument,

    /// Blank question submitted
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML config parse error
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed or oversized multipart upload
    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an extraction error
    pub fn extraction(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error came out of document ingestion
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::Extraction { .. } | Self::UnsupportedFileType(_))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "config_error",
                msg.clone(),
            ),
            Error::Extraction { .. } => {
                (StatusCode::BAD_REQUEST, "extraction_error", self.to_string())
            }
            Error::UnsupportedFileType(kind) => (
                StatusCode::BAD_REQUEST,
                "unsupported_type",
                format!("Unsupported file type: {}", kind),
            ),
            Error::Llm(msg) => (StatusCode::SERVICE_UNAVAILABLE, "llm_error", msg.clone()),
            Error::NoDocument => (StatusCode::NOT_FOUND, "no_document", self.to_string()),
            Error::EmptyQuestion => (StatusCode::BAD_REQUEST, "empty_question", self.to_string()),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Toml(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "config_error",
                err.to_string(),
            ),
            Error::Upload(err) => (err.status(), "upload_error", err.body_text()),
            Error::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
