//! Provider wire types and the normalized [`WebResult`].

use serde::{Deserialize, Serialize};

/// Top-level provider response. Only the fields we read are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    /// Logical error reported in a 2xx body.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WebFailureKind {
    MissingCredential,
    /// Non-2xx status or an `error` field in the body.
    Provider,
    Transport,
    NoRelevantResults,
    Generation,
    InsufficientAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebFailure {
    pub kind: WebFailureKind,
    pub message: String,
}

/// Normalized web-search outcome consumed by the merge policy.
#[derive(Debug, Clone, Serialize)]
pub struct WebResult {
    /// Always `"web"`.
    pub source: &'static str,
    pub response: String,
    pub success: bool,
    /// Concatenated snippet block sent to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub results_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<WebFailure>,
}

impl WebResult {
    pub const SOURCE: &'static str = "web";

    pub fn succeeded(response: String, raw: String, results_count: usize) -> Self {
        Self {
            source: Self::SOURCE,
            response,
            success: true,
            raw: Some(raw),
            results_count,
            failure: None,
        }
    }

    pub fn failed(response: impl Into<String>, kind: WebFailureKind, message: impl Into<String>) -> Self {
        Self {
            source: Self::SOURCE,
            response: response.into(),
            success: false,
            raw: None,
            results_count: 0,
            failure: Some(WebFailure {
                kind,
                message: message.into(),
            }),
        }
    }
}
