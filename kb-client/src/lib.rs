//! Client for the external knowledge-base (FAISS) retrieval service.
//!
//! The service owns retrieval and its own quality evaluation. This crate only:
//! - talks to `/health`, `/query` and `/info` ([`KbServiceClient`]),
//! - normalizes a query outcome into a [`KbResult`] that never carries an error
//!   past the boundary ([`query_knowledge_base`]).

pub mod client;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;

pub use client::KbServiceClient;
pub use config::KbConfig;
pub use errors::{KbError, KbResultT};
pub use normalize::query_knowledge_base;
pub use types::{KbDoc, KbFailure, KbFailureKind, KbHealth, KbQueryResponse, KbResult, QualityCheck};

/// Operations the rest of the system needs from the knowledge-base service.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// `GET /health`. Transport/decode errors are `Err`; a reachable but
    /// unhealthy service is `Ok` with `ok == false`.
    async fn health(&self) -> KbResultT<KbHealth>;

    /// `POST /query {query}`.
    async fn query(&self, query: &str) -> KbResultT<KbQueryResponse>;

    /// `GET /info`, passed through verbatim.
    async fn info(&self) -> KbResultT<Value>;

    /// Base URL, reported by the service-health endpoint.
    fn service_url(&self) -> &str;
}
