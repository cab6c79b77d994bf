//! API routes for the doc-qa server

pub mod ask;
pub mod document;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for file uploads
        .route(
            "/document",
            post(document::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Current document
        .route("/document", get(document::get_document))
        .route("/document", delete(document::clear_document))
        // Questions
        .route("/ask", post(ask::ask_question))
        .route("/history", get(ask::get_history))
        .route("/history", delete(ask::clear_history))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let config = state.config();
    Json(serde_json::json!({
        "name": "doc-qa",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Upload a PDF or text document and ask questions about it",
        "model": config.llm.model,
        "max_upload_size": config.server.max_upload_size,
        "endpoints": {
            "POST /api/document": "Upload a PDF or TXT file (replaces the current document)",
            "GET /api/document": "Current document statistics and preview",
            "DELETE /api/document": "Clear the document and its history",
            "POST /api/ask": "Ask a question about the document",
            "GET /api/history": "List questions and answers",
            "DELETE /api/history": "Clear the question history"
        }
    }))
}
