//! GET /api/stats: read-only view of the interaction counters.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{core::app_state::AppState, routes::stats::stats_response::StatsResponse};

const TOP_QUERIES: usize = 5;

pub async fn stats_route(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let engineer = &state.engineer;
    let stats = engineer.counters().snapshot();

    Json(StatsResponse {
        total_interactions: engineer.counters().total_interactions(),
        success_rates: stats.success_rates(),
        source_statistics: stats,
        current_focus: engineer.memory().current_focus().to_string(),
        frequently_asked: engineer.memory().top(TOP_QUERIES).await,
    })
}
