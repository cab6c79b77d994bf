//! Loaded document type and its derived statistics

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported upload types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Detect file type from a MIME type, ignoring parameters such as `charset`
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Resolve the type of an upload.
    ///
    /// The declared MIME type wins, then the filename extension, then a guess
    /// from the filename.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Option<Self> {
        if let Some(kind) = content_type.and_then(Self::from_mime) {
            return Some(kind);
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("");
        if let Some(kind) = Self::from_extension(extension) {
            return Some(kind);
        }

        mime_guess::from_path(filename)
            .iter()
            .find_map(|mime| Self::from_mime(mime.essence_str()))
    }

    /// MIME type reported back to clients
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Txt => "text/plain",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Txt => "Text File",
        }
    }
}

/// The single document a session answers questions about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID, changes on every upload
    pub id: Uuid,
    /// Display name (the uploaded filename)
    pub name: String,
    /// Extracted, trimmed text
    pub text: String,
    /// File type
    pub file_type: FileType,
    /// Uploaded size in bytes
    pub size_bytes: u64,
    /// SHA-256 of the extracted text
    pub content_hash: String,
    /// Page count (PDF only)
    pub page_count: Option<u32>,
    /// Load timestamp
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Document {
    /// Create a document from extracted text
    pub fn new(name: impl Into<String>, text: impl Into<String>, file_type: FileType) -> Self {
        let text = text.into();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content_hash: crate::ingestion::hash_content(&text),
            size_bytes: text.len() as u64,
            text,
            file_type,
            page_count: None,
            loaded_at: chrono::Utc::now(),
        }
    }

    /// Record the uploaded byte count
    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    /// Record the page count
    pub fn with_page_count(mut self, page_count: Option<u32>) -> Self {
        self.page_count = page_count;
        self
    }

    /// Number of characters (Unicode scalar values)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of newline-separated lines
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Derived statistics, recomputed on every call
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            char_count: self.char_count(),
            word_count: self.word_count(),
            line_count: self.line_count(),
        }
    }

    /// First `max_chars` characters, with `...` appended when cut short
    pub fn preview(&self, max_chars: usize) -> String {
        match self.text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.text[..cut]),
            None => self.text.clone(),
        }
    }
}

/// Character, word and line counts of a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentStats {
    pub char_count: usize,
    pub word_count: usize,
    pub line_count: usize,
}
