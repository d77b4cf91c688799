use std::sync::Arc;

use ai_llm_service::{
    AiLlmError, LlmServiceProfiles, Profile,
    config::default_config::{config_answer, config_research},
};
use kb_client::{KbConfig, KbError, KbServiceClient};
use pit_wall::{InteractionCounters, RaceEngineer};
use thiserror::Error;
use tracing::info;
use web_search::{SerpApiClient, WebResearcher, WebSearchConfig, WebSearchError};

/// Start-up configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    #[error(transparent)]
    KnowledgeBase(#[from] KbError),

    #[error(transparent)]
    WebSearch(#[from] WebSearchError),
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator owning sources, counters, history and context memory.
    pub engineer: Arc<RaceEngineer>,
}

impl AppState {
    pub fn new(engineer: Arc<RaceEngineer>) -> Self {
        Self { engineer }
    }

    /// Builds every client once from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let llm = Arc::new(LlmServiceProfiles::new(
            config_research()?,
            Some(config_answer()?),
        ));

        let kb_cfg = KbConfig::from_env()?;
        let kb = Arc::new(KbServiceClient::new(&kb_cfg)?);

        let web_cfg = WebSearchConfig::from_env()?;
        let web = WebResearcher::new(
            web_cfg.api_key.clone(),
            Arc::new(SerpApiClient::new(&web_cfg)?),
            llm.generator(Profile::Research),
        );

        info!(
            kb_url = %kb_cfg.base_url,
            llm_provider = %llm.config(Profile::Answer).provider,
            llm_model = %llm.config(Profile::Answer).model,
            web_search = web.is_configured(),
            "application state initialized"
        );

        let engineer = RaceEngineer::new(
            kb,
            web,
            llm.generator(Profile::Answer),
            Arc::new(InteractionCounters::new()),
        );
        Ok(Self::new(Arc::new(engineer)))
    }
}
