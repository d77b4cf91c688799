//! Provider clients.

pub mod gemini_service;
pub mod ollama_service;
pub mod open_ai_service;

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, Provider, ProviderError, ProviderErrorKind},
};

/// Validates the endpoint scheme and returns it without a trailing slash.
pub(crate) fn checked_endpoint(provider: Provider, endpoint: &str) -> Result<String, AiLlmError> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        return Err(ProviderError::new(
            provider,
            ProviderErrorKind::InvalidEndpoint(endpoint.to_string()),
        )
        .into());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Builds a reusable HTTP client. The timeout is applied only when configured.
pub(crate) fn build_http_client(
    cfg: &LlmModelConfig,
    headers: HeaderMap,
) -> Result<reqwest::Client, AiLlmError> {
    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .deflate(true);
    if let Some(secs) = cfg.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
