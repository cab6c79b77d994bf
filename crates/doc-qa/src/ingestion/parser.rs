//! PDF and plain-text extraction

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::types::FileType;

/// Text extracted from an upload
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// File type
    pub file_type: FileType,
    /// Extracted, trimmed text (never empty)
    pub content: String,
    /// Content hash
    pub content_hash: String,
    /// Total pages (PDF only)
    pub total_pages: Option<u32>,
    /// Pages that contributed text (PDF only)
    pub pages_with_text: Option<u32>,
}

/// Upload parser for the two supported formats
pub struct FileParser;

impl FileParser {
    /// Parse an upload, resolving its type from the declared MIME type and filename
    pub fn parse(filename: &str, content_type: Option<&str>, data: &[u8]) -> Result<ParsedDocument> {
        let file_type = FileType::detect(filename, content_type).ok_or_else(|| {
            Error::UnsupportedFileType(format!(
                "{} ({}) - only PDF and plain text are accepted",
                filename,
                content_type.unwrap_or("no content type")
            ))
        })?;

        Self::parse_as(filename, file_type, data)
    }

    /// Parse an upload whose type is already known
    pub fn parse_as(filename: &str, file_type: FileType, data: &[u8]) -> Result<ParsedDocument> {
        match file_type {
            FileType::Pdf => Self::parse_pdf(filename, data),
            FileType::Txt => Self::parse_text(filename, data),
        }
    }

    /// Parse PDF document page by page
    fn parse_pdf(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, format!("Error reading PDF: {}", e)))?;

        let pages = doc.get_pages();
        let total_pages = pages.len() as u32;
        let mut page_texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            // Scanned pages have no text layer; they contribute nothing
            match doc.extract_text(&[*page_number]) {
                Ok(text) => {
                    let text = text.replace('\0', "");
                    if text.trim().is_empty() {
                        tracing::debug!("{}: page {} has no extractable text", filename, page_number);
                    } else {
                        page_texts.push(text);
                    }
                }
                Err(e) => {
                    tracing::debug!("{}: could not extract page {}: {}", filename, page_number, e);
                }
            }
        }

        let content = page_texts.join("\n");
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::extraction(filename, "No text found in PDF"));
        }

        tracing::info!(
            "Extracted {} chars from {} of {} PDF pages in '{}'",
            content.chars().count(),
            page_texts.len(),
            total_pages,
            filename
        );

        Ok(ParsedDocument {
            file_type: FileType::Pdf,
            content_hash: hash_content(content),
            content: content.to_string(),
            total_pages: Some(total_pages),
            pages_with_text: Some(page_texts.len() as u32),
        })
    }

    /// Parse plain text, falling back to Latin-1 when the bytes are not UTF-8
    fn parse_text(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let decoded = match std::str::from_utf8(data) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::warn!(
                    "'{}' is not valid UTF-8 ({}), decoding as Latin-1",
                    filename,
                    e
                );
                decode_latin1(data)
            }
        };

        let content = decoded.trim();
        if content.is_empty() {
            return Err(Error::extraction(filename, "No text found in file"));
        }

        tracing::info!(
            "Extracted {} chars from text file '{}'",
            content.chars().count(),
            filename
        );

        Ok(ParsedDocument {
            file_type: FileType::Txt,
            content_hash: hash_content(content),
            content: content.to_string(),
            total_pages: None,
            pages_with_text: None,
        })
    }
}

/// Every byte maps to the code point of the same value
fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Hash content for change detection
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
