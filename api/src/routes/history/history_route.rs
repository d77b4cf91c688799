//! GET /api/history: conversation log in insertion order.

use std::sync::Arc;

use answer_format::format_answer;
use axum::{Json, extract::State};

use crate::{
    core::app_state::AppState,
    routes::history::history_response::{HistoryItem, HistoryResponse},
};

pub async fn history_route(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let entries: Vec<HistoryItem> = state
        .engineer
        .history()
        .entries()
        .await
        .into_iter()
        .map(|e| HistoryItem {
            blocks: format_answer(&e.response),
            interaction_id: e.interaction_id,
            query: e.query,
            source: e.source,
            timestamp: e.timestamp,
            response: e.response,
        })
        .collect();

    Json(HistoryResponse {
        total: entries.len(),
        entries,
    })
}
