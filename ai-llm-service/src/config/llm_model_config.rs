use crate::config::llm_provider::LlmProvider;

/// Configuration for an LLM model invocation.
///
/// Holds both general and provider-specific parameters. One config is bound to
/// each call-site profile (see [`crate::service_profiles::Profile`]).
///
/// # Examples
///
/// ```
/// use ai_llm_service::{LlmModelConfig, LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::Gemini,
///     model: "gemini-2.0-flash-exp".to_string(),
///     endpoint: "https://generativelanguage.googleapis.com".to_string(),
///     api_key: Some("AIza...".to_string()),
///     max_tokens: Some(2048),
///     temperature: Some(0.2),
///     top_p: None,
///     timeout_secs: Some(60),
/// };
/// assert_eq!(cfg.provider, LlmProvider::Gemini);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"gemini-2.0-flash-exp"`, `"qwen3:14b"`).
    pub model: String,

    /// Inference base URL (local server or remote API).
    pub endpoint: String,

    /// Optional API key for authentication (OpenAI, Gemini).
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds). `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}
