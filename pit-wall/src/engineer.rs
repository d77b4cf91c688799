//! Per-request orchestration: both sources, merge, counters, memory.

use std::sync::Arc;

use ai_llm_service::TextGenerator;
use chrono::Utc;
use kb_client::{KnowledgeBase, query_knowledge_base};
use serde::Serialize;
use tracing::{info, instrument};
use web_search::WebResearcher;

use crate::{
    category::{QualityScores, ResponseCategory},
    context_memory::ContextMemory,
    counters::InteractionCounters,
    history::{ConversationEntry, ConversationHistory},
    prompts::SYNTHESIS_APOLOGY,
    synthesizer::Synthesizer,
};

/// Reported source when the final synthesis failed.
pub const ERROR_SOURCE: &str = "error";

/// User-facing answer plus the analytics block.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// Category name, or `"error"`.
    pub source: String,
    pub response: String,
    #[serde(rename = "_internal")]
    pub internal: AnswerInternal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerInternal {
    pub quality_scores: QualityScores,
    pub fallback_triggered: bool,
    pub interaction_id: u64,
}

impl Answer {
    pub fn is_error(&self) -> bool {
        self.source == ERROR_SOURCE
    }
}

/// Owns the sources, the synthesizer and all shared in-memory state.
pub struct RaceEngineer {
    kb: Arc<dyn KnowledgeBase>,
    web: WebResearcher,
    synthesizer: Synthesizer,
    counters: Arc<InteractionCounters>,
    history: ConversationHistory,
    memory: ContextMemory,
}

impl RaceEngineer {
    /// `answer_llm` serves the fallback and final synthesis calls.
    pub fn new(
        kb: Arc<dyn KnowledgeBase>,
        web: WebResearcher,
        answer_llm: Arc<dyn TextGenerator>,
        counters: Arc<InteractionCounters>,
    ) -> Self {
        Self {
            kb,
            web,
            synthesizer: Synthesizer::new(answer_llm),
            counters,
            history: ConversationHistory::new(),
            memory: ContextMemory::new(),
        }
    }

    pub fn knowledge_base(&self) -> &Arc<dyn KnowledgeBase> {
        &self.kb
    }

    pub fn counters(&self) -> &InteractionCounters {
        &self.counters
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn memory(&self) -> &ContextMemory {
        &self.memory
    }

    /// Answers one validated query. Never fails: a final-synthesis failure is
    /// reported through [`Answer::is_error`].
    #[instrument(skip_all, fields(query_len = query.len()))]
    pub async fn answer(&self, query: &str) -> Answer {
        self.memory.record(query).await;

        self.counters.record_kb_attempt();
        self.counters.record_web_attempt();
        let (kb, web) = tokio::join!(
            query_knowledge_base(self.kb.as_ref(), query),
            self.web.search(query)
        );
        if kb.is_passed() {
            self.counters.record_kb_success();
        }
        if web.success {
            self.counters.record_web_success();
        }

        let synthesis = self.synthesizer.synthesize(query, &kb, &web).await;
        self.counters.record_category(synthesis.category);
        let interaction_id = self.counters.next_interaction_id();

        let answer = match synthesis.result {
            Ok(text) => Answer {
                source: synthesis.category.as_str().to_string(),
                response: text,
                internal: AnswerInternal {
                    quality_scores: QualityScores::graded(synthesis.kb_passed, synthesis.web_passed),
                    fallback_triggered: synthesis.category
                        == ResponseCategory::DualSourceInsufficient,
                    interaction_id,
                },
            },
            Err(_) => {
                self.counters.record_synthesis_error();
                Answer {
                    source: ERROR_SOURCE.to_string(),
                    response: SYNTHESIS_APOLOGY.to_string(),
                    internal: AnswerInternal {
                        quality_scores: QualityScores::error(),
                        fallback_triggered: true,
                        interaction_id,
                    },
                }
            }
        };

        self.history
            .append(ConversationEntry {
                interaction_id,
                query: query.to_string(),
                response: answer.response.clone(),
                source: answer.source.clone(),
                timestamp: Utc::now(),
            })
            .await;

        info!(
            interaction_id,
            source = %answer.source,
            fallback = answer.internal.fallback_triggered,
            "query answered"
        );
        answer
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use kb_client::{KbError, KbHealth, KbQueryResponse, KbResultT};
    use serde_json::{Value, json};
    use web_search::{
        OrganicResult, SearchProvider, SearchResponse, WebSearchError, WebSearchResult,
    };

    use super::*;
    use crate::{category::QualityGrade, synthesizer::tests::ScriptedGenerator};

    const WEB_ANSWER: &str =
        "For 2025 DRS remains available within one second of the car ahead at detection points.";

    struct FakeKb {
        healthy: bool,
        passes: bool,
    }

    #[async_trait]
    impl KnowledgeBase for FakeKb {
        async fn health(&self) -> KbResultT<KbHealth> {
            if self.healthy {
                Ok(KbHealth { ok: true, status: 200, body: json!({}) })
            } else {
                Err(KbError::Decode("connection refused".into()))
            }
        }

        async fn query(&self, _query: &str) -> KbResultT<KbQueryResponse> {
            Ok(KbQueryResponse {
                success: true,
                response: "DRS: 1s gap at detection point.".into(),
                docs: Vec::new(),
                quality_check: Some(if self.passes { "passed" } else { "failed" }.into()),
                quality_reason: None,
            })
        }

        async fn info(&self) -> KbResultT<Value> {
            Ok(Value::Null)
        }

        fn service_url(&self) -> &str {
            "http://fake-kb"
        }
    }

    struct FakeSearch {
        ok: bool,
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn search(&self, _api_key: &str, _query: &str) -> WebSearchResult<SearchResponse> {
            if !self.ok {
                return Err(WebSearchError::Status { status: 503 });
            }
            Ok(SearchResponse {
                organic_results: vec![OrganicResult {
                    title: "F1 2025 DRS".into(),
                    snippet: "FIA technical regulations".into(),
                    link: "https://fia.example".into(),
                }],
                error: None,
            })
        }
    }

    /// `web_llm` drives the research call, `answer_llm` the fallback/final calls.
    fn engineer(
        kb_healthy: bool,
        kb_passes: bool,
        web_ok: bool,
        web_llm: Vec<Option<&str>>,
        answer_llm: Vec<Option<&str>>,
    ) -> RaceEngineer {
        let web = WebResearcher::new(
            Some("key".into()),
            Arc::new(FakeSearch { ok: web_ok }),
            ScriptedGenerator::new(web_llm),
        );
        RaceEngineer::new(
            Arc::new(FakeKb { healthy: kb_healthy, passes: kb_passes }),
            web,
            ScriptedGenerator::new(answer_llm),
            Arc::new(InteractionCounters::new()),
        )
    }

    #[tokio::test]
    async fn drs_question_with_both_sources_is_validated() {
        let e = engineer(true, true, true, vec![Some(WEB_ANSWER)], vec![Some("## DRS\nFinal.")]);
        let a = e.answer("What are the 2025 DRS regulations?").await;

        assert_eq!(a.source, "dual_source_validated");
        assert_eq!(a.response, "## DRS\nFinal.");
        assert_eq!(a.internal.quality_scores, QualityScores::graded(true, true));
        assert!(!a.internal.fallback_triggered);
        assert_eq!(a.internal.interaction_id, 1);

        let s = e.counters().snapshot();
        assert_eq!(s.dual_source_validated, 1);
        assert_eq!((s.kb_attempts, s.kb_success), (1, 1));
        assert_eq!((s.web_attempts, s.web_success), (1, 1));
    }

    #[tokio::test]
    async fn kb_down_with_web_success_is_web_primary() {
        let e = engineer(false, true, true, vec![Some(WEB_ANSWER)], vec![Some("final")]);
        let a = e.answer("DRS?").await;

        assert_eq!(a.source, "web_primary_kb_insufficient");
        assert_eq!(a.internal.quality_scores.kb, QualityGrade::Low);
        let s = e.counters().snapshot();
        assert_eq!(s.web_primary_kb_insufficient, 1);
        assert_eq!((s.kb_attempts, s.kb_success), (1, 0));
    }

    #[tokio::test]
    async fn kb_only_is_kb_primary() {
        let e = engineer(true, true, false, vec![], vec![Some("final")]);
        let a = e.answer("DRS?").await;
        assert_eq!(a.source, "kb_primary_web_supplement");
        assert_eq!(e.counters().snapshot().kb_primary_web_supplement, 1);
    }

    #[tokio::test]
    async fn every_llm_failure_ends_in_apology() {
        let e = engineer(true, false, true, vec![None], vec![None, None]);
        let a = e.answer("DRS?").await;

        assert!(a.is_error());
        assert_eq!(a.response, SYNTHESIS_APOLOGY);
        assert_eq!(a.internal.quality_scores, QualityScores::error());
        assert!(a.internal.fallback_triggered);

        let s = e.counters().snapshot();
        assert_eq!(s.dual_source_insufficient, 1);
        assert_eq!(s.synthesis_errors, 1);
        assert_eq!(s.web_success, 0);
        assert_eq!(e.counters().total_interactions(), 1);
    }

    #[tokio::test]
    async fn exactly_one_category_per_request() {
        let e = engineer(true, true, false, vec![], vec![Some("a"), Some("b"), Some("c")]);
        for _ in 0..3 {
            e.answer("Tyre allocation").await;
        }
        let s = e.counters().snapshot();
        let total: u64 = ResponseCategory::ALL.iter().map(|c| s.category(*c)).sum();
        assert_eq!(total, 3);
        assert_eq!(s.kb_attempts, 3);
        assert_eq!(s.web_attempts, 3);
    }

    #[tokio::test]
    async fn history_and_memory_are_updated() {
        let e = engineer(true, true, true, vec![Some(WEB_ANSWER)], vec![Some("final")]);
        e.answer("What is DRS?").await;

        let entries = e.history().entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "What is DRS?");
        assert_eq!(entries[0].source, "dual_source_validated");
        assert_eq!(e.memory().top(5).await[0].query, "what is drs?");
    }
}
