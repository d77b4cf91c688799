use std::{env, sync::Arc};

pub mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

pub use crate::{
    core::app_state::{AppState, ConfigError},
    error_handler::{AppError, AppResult},
};
use crate::{
    middleware_layer::request_id::ensure_request_id,
    routes::{
        faiss_info::faiss_info_route::faiss_info_route, history::history_route::history_route,
        query::query_route::query_route, stats::stats_route::stats_route,
    },
};

const DEFAULT_API_ADDRESS: &str = "0.0.0.0:3000";

/// Builds state from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| DEFAULT_API_ADDRESS.into());
    let state = Arc::new(AppState::from_env()?);

    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "race engineer API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// All routes, with request-id propagation.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/query", post(query_route))
        .route("/api/stats", get(stats_route))
        .route("/api/faiss-info", get(faiss_info_route))
        .route("/api/history", get(history_route))
        .layer(middleware::from_fn(ensure_request_id))
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
