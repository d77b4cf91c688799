//! GET /api/faiss-info: knowledge-base service health proxy.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{debug, warn};

use crate::{
    core::app_state::AppState,
    middleware_layer::request_id::request_id,
    routes::faiss_info::faiss_info_response::{FaissInfoResponse, ServiceStatus},
};

/// Always answers 200; the health check outcome is in `service_status`.
pub async fn faiss_info_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<FaissInfoResponse> {
    let request_id = request_id(&headers).unwrap_or("-");
    let kb = state.engineer.knowledge_base();
    let url = kb.service_url();

    let health = match kb.health().await {
        Ok(h) => h,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "faiss_info_route: health check failed");
            return Json(FaissInfoResponse::failed(
                ServiceStatus::Error,
                url,
                format!("Failed to connect to knowledge base service: {e}"),
            ));
        }
    };

    if !health.ok {
        debug!(request_id = %request_id, status = health.status, "faiss_info_route: unhealthy");
        return Json(FaissInfoResponse::failed(
            ServiceStatus::Unhealthy,
            url,
            "Knowledge base service is not available".to_string(),
        ));
    }

    match kb.info().await {
        Ok(info) => Json(FaissInfoResponse {
            service_status: ServiceStatus::Healthy,
            service_url: url.to_string(),
            error: None,
            health_check: Some(health.body),
            vectorstore_info: Some(info),
        }),
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "faiss_info_route: info fetch failed");
            Json(FaissInfoResponse::failed(
                ServiceStatus::Error,
                url,
                format!("Failed to fetch vector store info: {e}"),
            ))
        }
    }
}
