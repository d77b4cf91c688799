//! Final answer synthesis over the two normalized source results.

use std::sync::Arc;

use ai_llm_service::{AiLlmError, TextGenerator};
use kb_client::KbResult;
use tracing::{info, warn};
use web_search::WebResult;

use crate::{
    category::{ResponseCategory, select_category},
    prompts::{CLEAN_SYSTEM, STATIC_FALLBACK, clean_prompt, dual_source_content, fallback_prompt},
};

/// Outcome of one synthesis.
#[derive(Debug)]
pub struct Synthesis {
    /// Table outcome; set even when the final call fails.
    pub category: ResponseCategory,
    pub kb_passed: bool,
    pub web_passed: bool,
    /// Final clean text, or the error of the final call.
    pub result: Result<String, AiLlmError>,
}

/// Applies the merge policy and issues the final `answer`-profile call.
pub struct Synthesizer {
    generator: Arc<dyn TextGenerator>,
}

impl Synthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn synthesize(&self, query: &str, kb: &KbResult, web: &WebResult) -> Synthesis {
        let kb_passed = kb.is_passed();
        let web_passed = web.success;
        let category = select_category(kb_passed, web_passed);
        info!(%category, kb_passed, web_passed, "merge policy selected");

        let content = match category {
            ResponseCategory::DualSourceValidated => dual_source_content(&kb.response, &web.response),
            ResponseCategory::KbPrimaryWebSupplement => kb.response.clone(),
            ResponseCategory::WebPrimaryKbInsufficient => web.response.clone(),
            ResponseCategory::DualSourceInsufficient => self.general_knowledge(query).await,
        };

        let result = self
            .generator
            .generate(&clean_prompt(query, &content), Some(CLEAN_SYSTEM))
            .await;
        if let Err(e) = &result {
            warn!(error = %e, %category, "final synthesis failed");
        }

        Synthesis {
            category,
            kb_passed,
            web_passed,
            result,
        }
    }

    async fn general_knowledge(&self, query: &str) -> String {
        match self
            .generator
            .generate(&fallback_prompt(query), Some(CLEAN_SYSTEM))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "general-knowledge fallback failed, using static message");
                STATIC_FALLBACK.to_string()
            }
        }
    }
}
