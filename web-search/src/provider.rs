//! Search provider seam and the SerpAPI implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::{
    config::WebSearchConfig,
    errors::{WebSearchError, WebSearchResult},
    types::SearchResponse,
};

/// Query-in, ranked snippets-out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, api_key: &str, query: &str) -> WebSearchResult<SearchResponse>;
}

/// `GET {endpoint}?q&api_key&num=10&hl=en&gl=us`.
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    http: Client,
    endpoint: String,
}

impl SerpApiClient {
    pub const NUM_RESULTS: &'static str = "10";
    pub const LANGUAGE: &'static str = "en";
    pub const COUNTRY: &'static str = "us";

    pub fn new(cfg: &WebSearchConfig) -> WebSearchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: cfg.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, api_key: &str, query: &str) -> WebSearchResult<SearchResponse> {
        let started = Instant::now();
        // api_key stays out of logs.
        debug!(endpoint = %self.endpoint, q = %query, "SerpAPI: GET");

        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("api_key", api_key),
                ("num", Self::NUM_RESULTS),
                ("hl", Self::LANGUAGE),
                ("gl", Self::COUNTRY),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            error!(%status, latency_ms = started.elapsed().as_millis(), "SerpAPI returned non-success status");
            return Err(WebSearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let out = serde_json::from_str::<SearchResponse>(&body)
            .map_err(|e| WebSearchError::Decode(e.to_string()))?;

        debug!(
            results = out.organic_results.len(),
            latency_ms = started.elapsed().as_millis(),
            "SerpAPI search completed"
        );
        Ok(out)
    }
}
