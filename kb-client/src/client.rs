//! reqwest-backed implementation of [`KnowledgeBase`].
//!
//! Endpoints:
//!   * GET  /health
//!   * POST /query   `{ "query": "..." }`
//!   * GET  /info

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    KnowledgeBase,
    config::KbConfig,
    errors::{KbError, KbResultT},
    types::{KbHealth, KbQueryResponse},
};

/// HTTP client for the knowledge-base service.
#[derive(Debug, Clone)]
pub struct KbServiceClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

impl KbServiceClient {
    /// Builds the client once; it is reused for every request.
    pub fn new(cfg: &KbConfig) -> KbResultT<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        debug!(base_url = %cfg.base_url, "creating KbServiceClient");
        Ok(Self {
            http: builder.build()?,
            base_url: cfg.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl KnowledgeBase for KbServiceClient {
    async fn health(&self) -> KbResultT<KbHealth> {
        let url = self.url("/health");
        debug!("KB health: GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);

        Ok(KbHealth {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    async fn query(&self, query: &str) -> KbResultT<KbQueryResponse> {
        let url = self.url("/query");
        let started = Instant::now();
        debug!(query_len = query.len(), "KB query: POST {}", url);

        let resp = self
            .http
            .post(&url)
            .json(&QueryBody { query })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            error!(
                %status,
                %url,
                latency_ms = started.elapsed().as_millis(),
                "KB /query returned non-success status"
            );
            return Err(KbError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let out = resp
            .json::<KbQueryResponse>()
            .await
            .map_err(|e| KbError::Decode(e.to_string()))?;

        debug!(
            latency_ms = started.elapsed().as_millis(),
            success = out.success,
            quality = out.quality_check.as_deref().unwrap_or("n/a"),
            "KB query completed"
        );
        Ok(out)
    }

    async fn info(&self) -> KbResultT<Value> {
        let url = self.url("/info");
        debug!("KB info: GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            error!(%status, %url, "KB /info returned non-success status");
            return Err(KbError::Status {
                status: status.as_u16(),
                url,
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| KbError::Decode(e.to_string()))
    }

    fn service_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Answers exactly one request with the given status line and JSON body.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(url: &str) -> KbServiceClient {
        KbServiceClient::new(&KbConfig::new(url, Some(5)).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn info_non_success_is_a_status_error() {
        let url = serve_once("503 Service Unavailable", r#"{"error":"index loading"}"#).await;
        let err = client(&url).info().await.unwrap_err();
        assert!(
            matches!(err, KbError::Status { status: 503, ref url } if url.ends_with("/info")),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn info_passes_body_through() {
        let url = serve_once("200 OK", r#"{"documents":42}"#).await;
        let info = client(&url).info().await.unwrap();
        assert_eq!(info["documents"], 42);
    }

    #[test]
    fn builds_endpoint_urls() {
        let cfg = KbConfig::new("http://127.0.0.1:5000/", None).unwrap();
        let cli = KbServiceClient::new(&cfg).unwrap();
        assert_eq!(cli.url("/query"), "http://127.0.0.1:5000/query");
        assert_eq!(cli.service_url(), "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let cfg = KbConfig::new("http://127.0.0.1:9", Some(2)).unwrap();
        let cli = KbServiceClient::new(&cfg).unwrap();
        let err = cli.health().await.unwrap_err();
        assert!(matches!(err, KbError::Transport(_)));
    }
}
