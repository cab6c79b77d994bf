//! Question and history endpoints

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::session::DocumentAssistant;
use crate::types::{AskRequest, AskResponse, HistoryResponse};

/// POST /api/ask - Answer a question about the current document
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();

    let mut assistant = state.assistant().await;
    let exchange = assistant.ask(&request.question).await?.clone();
    let number = assistant.history().len();

    Ok(Json(AskResponse {
        number,
        exchange,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}

/// GET /api/history - Questions and answers in the order asked
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let assistant = state.assistant().await;
    Json(history_of(&assistant))
}

/// DELETE /api/history - Clear the history, keep the document
pub async fn clear_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let mut assistant = state.assistant().await;
    assistant.clear_history();
    Json(history_of(&assistant))
}

fn history_of(assistant: &DocumentAssistant) -> HistoryResponse {
    let exchanges = assistant.history().as_slice().to_vec();
    HistoryResponse {
        document: assistant.document().map(|doc| doc.name.clone()),
        total_count: exchanges.len(),
        exchanges,
    }
}
