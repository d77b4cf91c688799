//! POST /api/query: answers an F1 question from both sources.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::request_id::request_id,
    routes::query::{query_request::extract_query, query_response::UnhandledFailure},
};

/// Handler: POST /api/query
///
/// 200 with the answer, 500 with the same shape when the final synthesis
/// failed, 500 with a bare apology when the pipeline itself failed, 400 for
/// an invalid body. The body is parsed as JSON whatever its content type.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/query \
///   -H 'content-type: application/json' \
///   -d '{"query":"What are the 2025 DRS regulations?"}'
/// ```
pub async fn query_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    let request_id = request_id(&headers).unwrap_or("-");
    let body: Value = serde_json::from_slice(&body)?;

    let Some(query) = extract_query(&body) else {
        warn!(request_id = %request_id, "query_route: invalid query");
        return Err(AppError::invalid_query());
    };

    debug!(request_id = %request_id, query = %query, "query_route: start");

    // Pipeline panics surface as a JoinError.
    let engineer = Arc::clone(&state.engineer);
    let owned = query.to_string();
    let answer = match tokio::spawn(async move { engineer.answer(&owned).await }).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "query_route: pipeline task failed");
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhandledFailure::default()),
            )
                .into_response());
        }
    };

    let status = if answer.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    debug!(
        request_id = %request_id,
        source = %answer.source,
        interaction_id = answer.internal.interaction_id,
        "query_route: done"
    );

    Ok((status, Json(answer)).into_response())
}
