//! Request types

use serde::{Deserialize, Serialize};

/// Smallest preview length a client may request
pub const MIN_PREVIEW_CHARS: usize = 100;
/// Largest preview length a client may request
pub const MAX_PREVIEW_CHARS: usize = 2000;
/// Preview length when none is requested
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Question submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Free-text question about the loaded document
    pub question: String,
}

/// Query parameters for `GET /api/document`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentQuery {
    /// Preview length in characters (clamped to 100..=2000, default: 500)
    #[serde(default = "default_preview")]
    pub preview: usize,

    /// Include the full extracted text (default: false)
    #[serde(default)]
    pub full: bool,
}

fn default_preview() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self {
            preview: DEFAULT_PREVIEW_CHARS,
            full: false,
        }
    }
}

impl DocumentQuery {
    /// Requested preview length, clamped to the allowed range
    pub fn preview_chars(&self) -> usize {
        self.preview.clamp(MIN_PREVIEW_CHARS, MAX_PREVIEW_CHARS)
    }
}
