//! Web source pipeline: search, filter, summarize, synthesize.

use std::sync::Arc;

use ai_llm_service::TextGenerator;
use tracing::{info, warn};

use crate::{
    errors::WebSearchError,
    prompts::{RESEARCH_SYSTEM, research_prompt},
    provider::SearchProvider,
    relevance::{relevant_snippets, search_query, summary_block},
    types::{WebFailureKind, WebResult},
};

/// Answers shorter than this (in characters) are rejected.
pub const MIN_ANSWER_CHARS: usize = 50;

const MISSING_KEY_MESSAGE: &str = "Web search unavailable. SerpAPI key not configured.";
const PROVIDER_ERROR_MESSAGE: &str = "Web search unavailable. The search provider returned an error.";
const TRANSPORT_ERROR_MESSAGE: &str = "Web search unavailable. The search provider could not be reached.";
const NO_RESULTS_MESSAGE: &str = "No current F1 information found for this query.";
const GENERATION_ERROR_MESSAGE: &str = "Web search completed but the summary could not be generated.";
const INSUFFICIENT_MESSAGE: &str = "Web search completed but response quality insufficient.";

/// Runs one web lookup per call. Holds no per-request state.
pub struct WebResearcher {
    api_key: Option<String>,
    provider: Arc<dyn SearchProvider>,
    generator: Arc<dyn TextGenerator>,
}

impl WebResearcher {
    pub fn new(
        api_key: Option<String>,
        provider: Arc<dyn SearchProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            provider,
            generator,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Never fails; problems come back as `success = false` with a failure tag.
    pub async fn search(&self, query: &str) -> WebResult {
        let Some(api_key) = self.api_key.as_deref() else {
            info!("web search skipped: no SerpAPI key");
            return WebResult::failed(
                MISSING_KEY_MESSAGE,
                WebFailureKind::MissingCredential,
                "SERPAPI_API_KEY not set",
            );
        };

        let response = match self.provider.search(api_key, &search_query(query)).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "web search request failed");
                let (display, kind) = match &e {
                    WebSearchError::Transport(_) => (TRANSPORT_ERROR_MESSAGE, WebFailureKind::Transport),
                    WebSearchError::Status { .. }
                    | WebSearchError::Decode(_)
                    | WebSearchError::Config(_) => (PROVIDER_ERROR_MESSAGE, WebFailureKind::Provider),
                };
                return WebResult::failed(display, kind, e.to_string());
            }
        };

        if let Some(err) = response.error {
            warn!(provider_error = %err, "search provider reported an error");
            return WebResult::failed(PROVIDER_ERROR_MESSAGE, WebFailureKind::Provider, err);
        }

        let snippets = relevant_snippets(&response.organic_results);
        if snippets.is_empty() {
            info!(
                total = response.organic_results.len(),
                "no relevant F1 results"
            );
            return WebResult::failed(
                NO_RESULTS_MESSAGE,
                WebFailureKind::NoRelevantResults,
                format!("0 of {} results matched", response.organic_results.len()),
            );
        }

        let summary = summary_block(&snippets);
        let prompt = research_prompt(query, &summary);

        let answer = match self.generator.generate(&prompt, Some(RESEARCH_SYSTEM)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "web synthesis failed");
                return WebResult::failed(
                    GENERATION_ERROR_MESSAGE,
                    WebFailureKind::Generation,
                    e.to_string(),
                );
            }
        };

        let chars = answer.chars().count();
        if chars < MIN_ANSWER_CHARS {
            info!(chars, "web synthesis too short");
            return WebResult::failed(
                INSUFFICIENT_MESSAGE,
                WebFailureKind::InsufficientAnswer,
                format!("answer has {chars} characters, need {MIN_ANSWER_CHARS}"),
            );
        }

        info!(results = snippets.len(), chars, "web search produced an answer");
        WebResult::succeeded(answer, summary, snippets.len())
    }
}
