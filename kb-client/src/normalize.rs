//! Degrade-on-failure normalization of a knowledge-base lookup.

use tracing::{info, warn};

use crate::{
    KnowledgeBase,
    errors::KbError,
    types::{KbFailure, KbFailureKind, KbResult},
};

const UNAVAILABLE_MESSAGE: &str = "Knowledge base service unavailable.";
const QUERY_FAILED_MESSAGE: &str = "Knowledge base query failed.";
const EMPTY_RESPONSE_MESSAGE: &str = "No response from knowledge base.";

/// Runs health check + query against `kb` and returns a well-formed [`KbResult`].
///
/// Never fails: unavailability, upstream errors and the service's own
/// `quality_check != "passed"` all become `quality_check = failed`. No retries.
pub async fn query_knowledge_base(kb: &dyn KnowledgeBase, query: &str) -> KbResult {
    match kb.health().await {
        Ok(h) if h.ok => {}
        Ok(h) => {
            warn!(status = h.status, "KB health check returned non-success status");
            return KbResult::failed(
                UNAVAILABLE_MESSAGE,
                Vec::new(),
                "Service error: health check failed",
                KbFailure {
                    kind: KbFailureKind::Unavailable,
                    message: format!("health check returned HTTP {}", h.status),
                },
            );
        }
        Err(e) => {
            warn!(error = %e, "KB health check failed");
            return KbResult::failed(
                UNAVAILABLE_MESSAGE,
                Vec::new(),
                "Service error: health check failed",
                KbFailure {
                    kind: KbFailureKind::Unavailable,
                    message: e.to_string(),
                },
            );
        }
    }

    let resp = match kb.query(query).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "KB query failed");
            let kind = match &e {
                KbError::Status { .. } => KbFailureKind::UpstreamStatus,
                KbError::Decode(_) => KbFailureKind::Decode,
                KbError::Transport(_) | KbError::Config(_) => KbFailureKind::Transport,
            };
            return KbResult::failed(
                QUERY_FAILED_MESSAGE,
                Vec::new(),
                "Service error: query failed",
                KbFailure {
                    kind,
                    message: e.to_string(),
                },
            );
        }
    };

    let reason = resp.quality_reason.clone().unwrap_or_default();

    if resp.passed() {
        info!(docs = resp.docs.len(), "KB provided quality response");
        return KbResult::passed(resp.response, resp.docs, reason);
    }

    info!(reason = %reason, "KB response insufficient");
    let response = if resp.response.trim().is_empty() {
        EMPTY_RESPONSE_MESSAGE.to_string()
    } else {
        resp.response
    };
    KbResult::failed(
        response,
        resp.docs,
        reason.clone(),
        KbFailure {
            kind: KbFailureKind::InsufficientQuality,
            message: reason,
        },
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        errors::KbResultT,
        types::{KbHealth, KbQueryResponse, QualityCheck},
    };

    enum Health {
        Up,
        Down,
        Unreachable,
    }

    struct FakeKb {
        health: Health,
        query: fn() -> KbResultT<KbQueryResponse>,
        query_calls: AtomicUsize,
    }

    impl FakeKb {
        fn new(health: Health, query: fn() -> KbResultT<KbQueryResponse>) -> Self {
            Self {
                health,
                query,
                query_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl KnowledgeBase for FakeKb {
        async fn health(&self) -> KbResultT<KbHealth> {
            match self.health {
                Health::Up => Ok(KbHealth {
                    ok: true,
                    status: 200,
                    body: json!({"status": "healthy"}),
                }),
                Health::Down => Ok(KbHealth {
                    ok: false,
                    status: 500,
                    body: json!({"status": "unhealthy"}),
                }),
                Health::Unreachable => Err(KbError::Decode("connection refused".into())),
            }
        }

        async fn query(&self, _query: &str) -> KbResultT<KbQueryResponse> {
            self.query_calls.fetch_add(1, Ordering::SeqCst);
            (self.query)()
        }

        async fn info(&self) -> KbResultT<Value> {
            Ok(Value::Null)
        }

        fn service_url(&self) -> &str {
            "http://fake"
        }
    }

    fn passed() -> KbResultT<KbQueryResponse> {
        Ok(KbQueryResponse {
            success: true,
            response: "DRS opens when within one second at the detection point.".into(),
            docs: Vec::new(),
            quality_check: Some("passed".into()),
            quality_reason: Some("Response appears comprehensive".into()),
        })
    }

    fn insufficient() -> KbResultT<KbQueryResponse> {
        Ok(KbQueryResponse {
            success: true,
            response: "I don't know.".into(),
            docs: Vec::new(),
            quality_check: Some("failed".into()),
            quality_reason: Some("Found indicator: i don't know".into()),
        })
    }

    fn capitalized_flag() -> KbResultT<KbQueryResponse> {
        Ok(KbQueryResponse {
            quality_check: Some("Passed".into()),
            ..passed()?
        })
    }

    fn upstream_500() -> KbResultT<KbQueryResponse> {
        Err(KbError::Status {
            status: 500,
            url: "http://fake/query".into(),
        })
    }

    #[tokio::test]
    async fn passes_through_service_verdict() {
        let kb = FakeKb::new(Health::Up, passed);
        let r = query_knowledge_base(&kb, "What are the 2025 DRS regulations?").await;
        assert!(r.is_passed());
        assert_eq!(r.source, "local");
        assert!(r.failure.is_none());
        assert_eq!(r.quality_reason, "Response appears comprehensive");
    }

    #[tokio::test]
    async fn failed_quality_flag_is_trusted() {
        let kb = FakeKb::new(Health::Up, insufficient);
        let r = query_knowledge_base(&kb, "q").await;
        assert_eq!(r.quality_check, QualityCheck::Failed);
        assert_eq!(r.response, "I don't know.");
        assert_eq!(
            r.failure.map(|f| f.kind),
            Some(KbFailureKind::InsufficientQuality)
        );
    }

    #[tokio::test]
    async fn only_exact_passed_flag_is_trusted() {
        let kb = FakeKb::new(Health::Up, capitalized_flag);
        let r = query_knowledge_base(&kb, "q").await;
        assert_eq!(r.quality_check, QualityCheck::Failed);
        assert_eq!(
            r.failure.map(|f| f.kind),
            Some(KbFailureKind::InsufficientQuality)
        );
    }

    #[tokio::test]
    async fn unhealthy_service_skips_query() {
        let kb = FakeKb::new(Health::Down, passed);
        let r = query_knowledge_base(&kb, "q").await;
        assert!(!r.is_passed());
        assert_eq!(r.response, UNAVAILABLE_MESSAGE);
        assert_eq!(kb.query_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unreachable_service_degrades_without_raw_error_in_display_text() {
        let kb = FakeKb::new(Health::Unreachable, passed);
        let r = query_knowledge_base(&kb, "q").await;
        assert_eq!(r.response, UNAVAILABLE_MESSAGE);
        let failure = r.failure.unwrap();
        assert_eq!(failure.kind, KbFailureKind::Unavailable);
        assert!(failure.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn upstream_status_is_tagged() {
        let kb = FakeKb::new(Health::Up, upstream_500);
        let r = query_knowledge_base(&kb, "q").await;
        assert_eq!(r.response, QUERY_FAILED_MESSAGE);
        assert_eq!(r.failure.unwrap().kind, KbFailureKind::UpstreamStatus);
    }
}
