//! Default LLM configs loaded strictly from environment variables.
//!
//! Two roles are built from the same provider settings:
//!
//! - **Research** → synthesizes web search snippets into a technical answer
//! - **Answer**   → rewrites gathered content into the final clean answer
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`          = provider kind (`gemini` default, `ollama`, `openai`)
//! - `LLM_MAX_TOKENS`    = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS`  = optional request timeout (u64)
//! - `LLM_RESEARCH_MODEL` / `LLM_ANSWER_MODEL` = optional per-role model override
//!
//! Gemini:
//! - `GOOGLE_API_KEY` (mandatory)
//! - `GEMINI_MODEL`   (default `gemini-2.0-flash-exp`)
//! - `GEMINI_URL`     (default `https://generativelanguage.googleapis.com`)
//!
//! Ollama:
//! - `OLLAMA_URL` or `OLLAMA_PORT` (mandatory)
//! - `OLLAMA_MODEL` (mandatory)
//!
//! OpenAI:
//! - `OPENAI_API_KEY` (mandatory)
//! - `OPENAI_MODEL`   (default `gpt-4o-mini`)
//! - `OPENAI_URL`     (default `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt, env_opt_u32, env_opt_u64, must_env,
        validate_http_endpoint,
    },
};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Provider-level settings shared by every role.
#[derive(Debug, Clone)]
struct ProviderSettings {
    provider: LlmProvider,
    model: String,
    endpoint: String,
    api_key: Option<String>,
}

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
fn ollama_endpoint() -> Result<String, AiLlmError> {
    if let Some(url) = env_opt("OLLAMA_URL") {
        return Ok(url);
    }
    if let Some(port) = env_opt("OLLAMA_PORT") {
        port.trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
        return Ok(format!("http://localhost:{}", port.trim()));
    }
    Err(AiLlmError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

fn provider_settings() -> Result<ProviderSettings, AiLlmError> {
    let provider = match env_opt("LLM_KIND") {
        Some(kind) => kind.parse::<LlmProvider>()?,
        None => LlmProvider::Gemini,
    };

    let settings = match provider {
        LlmProvider::Gemini => ProviderSettings {
            provider,
            model: env_opt("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
            endpoint: env_opt("GEMINI_URL").unwrap_or_else(|| DEFAULT_GEMINI_URL.into()),
            api_key: Some(must_env("GOOGLE_API_KEY")?),
        },
        LlmProvider::OpenAI => ProviderSettings {
            provider,
            model: env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
            endpoint: env_opt("OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.into()),
            api_key: Some(must_env("OPENAI_API_KEY")?),
        },
        LlmProvider::Ollama => ProviderSettings {
            provider,
            model: must_env("OLLAMA_MODEL")?,
            endpoint: ollama_endpoint()?,
            api_key: None,
        },
    };

    validate_http_endpoint("LLM endpoint", &settings.endpoint)?;
    Ok(settings)
}

fn build(
    role_model_var: &'static str,
    temperature: f32,
    top_p: Option<f32>,
) -> Result<LlmModelConfig, AiLlmError> {
    let base = provider_settings()?;
    let model = env_opt(role_model_var).unwrap_or(base.model);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    Ok(LlmModelConfig {
        provider: base.provider,
        model,
        endpoint: base.endpoint,
        api_key: base.api_key,
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: Some(temperature),
        top_p,
        timeout_secs: env_opt_u64("LLM_TIMEOUT_SECS")?,
    })
}

/// Config for the **research** role (web snippet synthesis).
///
/// # Defaults
/// - `temperature = Some(0.4)`
/// - `top_p = Some(0.9)`
pub fn config_research() -> Result<LlmModelConfig, AiLlmError> {
    build("LLM_RESEARCH_MODEL", 0.4, Some(0.9))
}

/// Config for the **answer** role (final clean answer, general fallback).
///
/// # Defaults
/// - `temperature = Some(0.2)`
pub fn config_answer() -> Result<LlmModelConfig, AiLlmError> {
    build("LLM_ANSWER_MODEL", 0.2, None)
}
