//! Document upload, inspection and removal

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{DocumentQuery, DocumentSummary, DocumentView};

/// POST /api/document - Upload a file and make it the current document
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentSummary>> {
    let start = Instant::now();

    while let Some(field) = multipart.next_field().await? {
        // Only the first field carrying a file is used
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        let content_type = field.content_type().map(|s| s.to_string());

        let data = field.bytes().await?;

        let mut assistant = state.assistant().await;
        let document = assistant.upload(&filename, content_type.as_deref(), &data)?;
        let summary = DocumentSummary::from(document);

        tracing::info!(
            "Document '{}' processed in {}ms: {} characters extracted",
            summary.name,
            start.elapsed().as_millis(),
            summary.stats.char_count
        );

        return Ok(Json(summary));
    }

    Err(Error::extraction("upload", "Request contained no file"))
}

/// GET /api/document - Statistics and preview of the current document
pub async fn get_document(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<DocumentView>> {
    let assistant = state.assistant().await;
    let document = assistant.document().ok_or(Error::NoDocument)?;

    Ok(Json(DocumentView {
        summary: DocumentSummary::from(document),
        preview: document.preview(query.preview_chars()),
        text: query.full.then(|| document.text.clone()),
        exchange_count: assistant.history().len(),
    }))
}

/// DELETE /api/document - Clear the document and its history
pub async fn clear_document(State(state): State<AppState>) -> Json<serde_json::Value> {
    let removed = state.assistant().await.clear_document();

    Json(serde_json::json!({
        "success": true,
        "cleared": removed.map(|doc| doc.name),
    }))
}
