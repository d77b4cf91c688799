//! Shared LLM service with two call-site profiles: `research` and `answer`.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and hand out [`TextGenerator`]s per profile.
//! - Caches underlying HTTP clients per config (provider+endpoint+model+key+timeout).
//! - If the `answer` profile is not provided, it falls back to `research`.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{LlmServiceProfiles, Profile, config::default_config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = Arc::new(LlmServiceProfiles::new(
//!     default_config::config_research()?,
//!     Some(default_config::config_answer()?),
//! ));
//! let answer = svc.generator(Profile::Answer);
//! let text = answer.generate("Explain DRS.", Some("You are a race engineer.")).await?;
//! println!("{text}");
//! # Ok(()) }
//! ```

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::AiLlmError,
    services::{
        gemini_service::GeminiService, ollama_service::OllamaService,
        open_ai_service::OpenAiService,
    },
    text_generator::TextGenerator,
};

/// Logical call-site profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Web snippet synthesis.
    Research,
    /// Final clean answer and general-knowledge fallback.
    Answer,
}

/// Shared service that manages the `research` and `answer` profiles.
pub struct LlmServiceProfiles {
    research: LlmModelConfig,
    answer: LlmModelConfig,
    clients: RwLock<HashMap<ClientKey, Arc<ProviderClient>>>,
}

impl LlmServiceProfiles {
    /// Creates a new service. `answer_opt = None` reuses the research config.
    pub fn new(research: LlmModelConfig, answer_opt: Option<LlmModelConfig>) -> Self {
        let answer = answer_opt.unwrap_or_else(|| research.clone());
        Self {
            research,
            answer,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the config bound to `profile`.
    pub fn config(&self, profile: Profile) -> &LlmModelConfig {
        match profile {
            Profile::Research => &self.research,
            Profile::Answer => &self.answer,
        }
    }

    /// Returns a [`TextGenerator`] bound to `profile`.
    pub fn generator(self: &Arc<Self>, profile: Profile) -> Arc<dyn TextGenerator> {
        Arc::new(ProfileGenerator {
            svc: Arc::clone(self),
            profile,
        })
    }

    /// Generates text with the config of `profile`.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if client construction or generation fails.
    pub async fn generate(
        &self,
        profile: Profile,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiLlmError> {
        let cfg = self.config(profile);
        let client = self.get_or_init(cfg).await?;
        match client.as_ref() {
            ProviderClient::Ollama(c) => c.generate(prompt, system).await,
            ProviderClient::OpenAi(c) => c.generate(prompt, system).await,
            ProviderClient::Gemini(c) => c.generate(prompt, system).await,
        }
    }

    /* --------------------- Internals --------------------- */

    async fn get_or_init(&self, cfg: &LlmModelConfig) -> Result<Arc<ProviderClient>, AiLlmError> {
        let key = ClientKey::from(cfg);
        if let Some(cli) = self.clients.read().await.get(&key).cloned() {
            return Ok(cli);
        }

        let mut w = self.clients.write().await;
        if let Some(cli) = w.get(&key).cloned() {
            return Ok(cli);
        }

        debug!(provider = %cfg.provider, model = %cfg.model, "creating LLM client");
        let cli = Arc::new(ProviderClient::new(cfg.clone())?);
        w.insert(key, Arc::clone(&cli));
        Ok(cli)
    }
}

/// Concrete provider client.
enum ProviderClient {
    Ollama(OllamaService),
    OpenAi(OpenAiService),
    Gemini(GeminiService),
}

impl ProviderClient {
    fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        Ok(match cfg.provider {
            LlmProvider::Ollama => ProviderClient::Ollama(OllamaService::new(cfg)?),
            LlmProvider::OpenAI => ProviderClient::OpenAi(OpenAiService::new(cfg)?),
            LlmProvider::Gemini => ProviderClient::Gemini(GeminiService::new(cfg)?),
        })
    }
}

/// Profile-bound generator handed out to call sites.
struct ProfileGenerator {
    svc: Arc<LlmServiceProfiles>,
    profile: Profile,
}

#[async_trait]
impl TextGenerator for ProfileGenerator {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        self.svc.generate(self.profile, prompt, system).await
    }
}

/// Internal cache key to identify unique client configs.
///
/// Clients send the sampling settings captured at construction, so those are
/// part of the identity too (floats keyed by their bit pattern).
#[derive(Clone, PartialEq, Eq, Hash)]
struct ClientKey {
    provider: LlmProvider,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Option<u64>,
    max_tokens: Option<u32>,
    temperature_bits: Option<u32>,
    top_p_bits: Option<u32>,
}

impl From<&LlmModelConfig> for ClientKey {
    fn from(cfg: &LlmModelConfig) -> Self {
        Self {
            provider: cfg.provider,
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
            timeout: cfg.timeout_secs,
            max_tokens: cfg.max_tokens,
            temperature_bits: cfg.temperature.map(f32::to_bits),
            top_p_bits: cfg.top_p.map(f32::to_bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ollama_service::GenerateRequest;

    fn research() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "qwen3:14b".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: None,
            max_tokens: None,
            temperature: Some(0.4),
            top_p: Some(0.9),
            timeout_secs: None,
        }
    }

    #[test]
    fn answer_falls_back_to_research() {
        let svc = LlmServiceProfiles::new(research(), None);
        assert_eq!(svc.config(Profile::Answer), svc.config(Profile::Research));
    }

    fn ollama_options(client: &ProviderClient) -> serde_json::Value {
        let ProviderClient::Ollama(c) = client else {
            panic!("expected an Ollama client");
        };
        let body = GenerateRequest::from_cfg(c.config(), "prompt", None);
        serde_json::to_value(&body).unwrap()["options"].clone()
    }

    fn as_f32(v: &serde_json::Value) -> f32 {
        v.as_f64().unwrap() as f32
    }

    #[tokio::test]
    async fn same_config_reuses_client() {
        let svc = LlmServiceProfiles::new(research(), None);
        let a = svc.get_or_init(svc.config(Profile::Research)).await.unwrap();
        let b = svc.get_or_init(svc.config(Profile::Answer)).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(svc.clients.read().await.len(), 1);
    }

    #[tokio::test]
    async fn each_profile_sends_its_own_sampling_settings() {
        let mut answer = research();
        answer.temperature = Some(0.2);
        answer.top_p = None;
        let svc = LlmServiceProfiles::new(research(), Some(answer));

        // Answer first, so a shared client would carry the answer settings.
        let b = svc.get_or_init(svc.config(Profile::Answer)).await.unwrap();
        let a = svc.get_or_init(svc.config(Profile::Research)).await.unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(svc.clients.read().await.len(), 2);

        let research_opts = ollama_options(&a);
        assert_eq!(as_f32(&research_opts["temperature"]), 0.4);
        assert_eq!(as_f32(&research_opts["top_p"]), 0.9);

        let answer_opts = ollama_options(&b);
        assert_eq!(as_f32(&answer_opts["temperature"]), 0.2);
        assert!(answer_opts.get("top_p").is_none());
    }

    #[tokio::test]
    async fn max_tokens_is_part_of_client_identity() {
        let mut answer = research();
        answer.max_tokens = Some(512);
        let svc = LlmServiceProfiles::new(research(), Some(answer));
        let a = svc.get_or_init(svc.config(Profile::Research)).await.unwrap();
        let b = svc.get_or_init(svc.config(Profile::Answer)).await.unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn invalid_config_surfaces_error() {
        let mut bad = research();
        bad.endpoint = "localhost".into();
        let svc = LlmServiceProfiles::new(bad, None);
        let err = svc.generate(Profile::Research, "hi", None).await.unwrap_err();
        assert!(matches!(err, AiLlmError::Provider(_)));
    }
}
