//! Wire types of the knowledge-base service and the normalized [`KbResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct KbHealth {
    /// `true` when the service answered 2xx.
    pub ok: bool,
    /// HTTP status code.
    pub status: u16,
    /// Response body (JSON when decodable, `null` otherwise).
    pub body: Value,
}

/// Body of `POST /query`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KbQueryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub docs: Vec<KbDoc>,
    /// `"passed"` or `"failed"`, computed by the service itself.
    #[serde(default)]
    pub quality_check: Option<String>,
    #[serde(default)]
    pub quality_reason: Option<String>,
}

impl KbQueryResponse {
    /// The service's own verdict: only `success && quality_check == "passed"` counts.
    pub fn passed(&self) -> bool {
        self.success
            && self
                .quality_check
                .as_deref()
                .is_some_and(|q| q == "passed")
    }
}

/// Supporting document descriptor returned by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KbDoc {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: Value,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub grand_prix: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Pass/fail quality flag as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityCheck {
    Passed,
    Failed,
}

/// Category of a degraded knowledge-base outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KbFailureKind {
    /// Liveness check failed or returned non-2xx.
    Unavailable,
    /// Network failure on `/query`.
    Transport,
    /// `/query` answered non-2xx.
    UpstreamStatus,
    /// `/query` body could not be decoded.
    Decode,
    /// The service answered but did not pass its own quality check.
    InsufficientQuality,
}

/// Structured failure tag, kept apart from the display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KbFailure {
    pub kind: KbFailureKind,
    pub message: String,
}

/// Normalized knowledge-base outcome consumed by the merge policy.
#[derive(Debug, Clone, Serialize)]
pub struct KbResult {
    /// Always `"local"`.
    pub source: &'static str,
    /// Display text (answer or fixed diagnostic).
    pub response: String,
    pub docs: Vec<KbDoc>,
    pub quality_check: QualityCheck,
    pub quality_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<KbFailure>,
}

impl KbResult {
    pub const SOURCE: &'static str = "local";

    pub fn passed(response: String, docs: Vec<KbDoc>, quality_reason: String) -> Self {
        Self {
            source: Self::SOURCE,
            response,
            docs,
            quality_check: QualityCheck::Passed,
            quality_reason,
            failure: None,
        }
    }

    pub fn failed(
        response: impl Into<String>,
        docs: Vec<KbDoc>,
        quality_reason: impl Into<String>,
        failure: KbFailure,
    ) -> Self {
        Self {
            source: Self::SOURCE,
            response: response.into(),
            docs,
            quality_check: QualityCheck::Failed,
            quality_reason: quality_reason.into(),
            failure: Some(failure),
        }
    }

    /// Boolean quality signal used by the merge policy.
    pub fn is_passed(&self) -> bool {
        self.quality_check == QualityCheck::Passed
    }
}
