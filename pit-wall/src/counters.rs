//! Lock-free interaction counters shared by all request handlers.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::category::ResponseCategory;

/// Process-local tallies, reset on restart.
///
/// Attempts are always recorded before the matching success, and
/// [`snapshot`](Self::snapshot) reads successes before attempts, so a
/// snapshot never shows `success > attempts`.
#[derive(Debug, Default)]
pub struct InteractionCounters {
    dual_source_validated: AtomicU64,
    kb_primary_web_supplement: AtomicU64,
    web_primary_kb_insufficient: AtomicU64,
    dual_source_insufficient: AtomicU64,
    kb_attempts: AtomicU64,
    web_attempts: AtomicU64,
    kb_success: AtomicU64,
    web_success: AtomicU64,
    synthesis_errors: AtomicU64,
    total_interactions: AtomicU64,
}

impl InteractionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_kb_attempt(&self) {
        self.kb_attempts.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_kb_success(&self) {
        self.kb_success.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_web_attempt(&self) {
        self.web_attempts.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_web_success(&self) {
        self.web_success.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_category(&self, category: ResponseCategory) {
        let counter = match category {
            ResponseCategory::DualSourceValidated => &self.dual_source_validated,
            ResponseCategory::KbPrimaryWebSupplement => &self.kb_primary_web_supplement,
            ResponseCategory::WebPrimaryKbInsufficient => &self.web_primary_kb_insufficient,
            ResponseCategory::DualSourceInsufficient => &self.dual_source_insufficient,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_synthesis_error(&self) {
        self.synthesis_errors.fetch_add(1, Ordering::SeqCst);
    }

    /// Counts one answered request and returns its 1-based interaction id.
    pub fn next_interaction_id(&self) -> u64 {
        self.total_interactions.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total_interactions(&self) -> u64 {
        self.total_interactions.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> SourceStatistics {
        let kb_success = self.kb_success.load(Ordering::SeqCst);
        let web_success = self.web_success.load(Ordering::SeqCst);
        SourceStatistics {
            dual_source_validated: self.dual_source_validated.load(Ordering::SeqCst),
            kb_primary_web_supplement: self.kb_primary_web_supplement.load(Ordering::SeqCst),
            web_primary_kb_insufficient: self.web_primary_kb_insufficient.load(Ordering::SeqCst),
            dual_source_insufficient: self.dual_source_insufficient.load(Ordering::SeqCst),
            kb_attempts: self.kb_attempts.load(Ordering::SeqCst),
            web_attempts: self.web_attempts.load(Ordering::SeqCst),
            kb_success,
            web_success,
            synthesis_errors: self.synthesis_errors.load(Ordering::SeqCst),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceStatistics {
    pub dual_source_validated: u64,
    pub kb_primary_web_supplement: u64,
    pub web_primary_kb_insufficient: u64,
    pub dual_source_insufficient: u64,
    pub kb_attempts: u64,
    pub web_attempts: u64,
    pub kb_success: u64,
    pub web_success: u64,
    pub synthesis_errors: u64,
}

impl SourceStatistics {
    pub fn category(&self, category: ResponseCategory) -> u64 {
        match category {
            ResponseCategory::DualSourceValidated => self.dual_source_validated,
            ResponseCategory::KbPrimaryWebSupplement => self.kb_primary_web_supplement,
            ResponseCategory::WebPrimaryKbInsufficient => self.web_primary_kb_insufficient,
            ResponseCategory::DualSourceInsufficient => self.dual_source_insufficient,
        }
    }

    pub fn success_rates(&self) -> SuccessRates {
        SuccessRates {
            kb_success_rate: success_rate(self.kb_success, self.kb_attempts),
            web_success_rate: success_rate(self.web_success, self.web_attempts),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessRates {
    pub kb_success_rate: String,
    pub web_success_rate: String,
}

/// `success / attempts * 100` with one decimal and a `%` suffix.
pub fn success_rate(success: u64, attempts: u64) -> String {
    if attempts == 0 {
        return "0.0%".to_string();
    }
    let pct = success.min(attempts) as f64 / attempts as f64 * 100.0;
    format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn rates_are_formatted_with_one_decimal() {
        assert_eq!(success_rate(0, 0), "0.0%");
        assert_eq!(success_rate(0, 5), "0.0%");
        assert_eq!(success_rate(1, 3), "33.3%");
        assert_eq!(success_rate(2, 3), "66.7%");
        assert_eq!(success_rate(4, 4), "100.0%");
    }

    #[test]
    fn records_exactly_one_category() {
        let c = InteractionCounters::new();
        c.record_category(ResponseCategory::KbPrimaryWebSupplement);
        let s = c.snapshot();
        for cat in ResponseCategory::ALL {
            let expected = u64::from(cat == ResponseCategory::KbPrimaryWebSupplement);
            assert_eq!(s.category(cat), expected, "{cat}");
        }
    }

    #[test]
    fn interaction_ids_are_sequential() {
        let c = InteractionCounters::new();
        assert_eq!(c.next_interaction_id(), 1);
        assert_eq!(c.next_interaction_id(), 2);
        assert_eq!(c.total_interactions(), 2);
    }

    #[test]
    fn concurrent_updates_keep_success_within_attempts() {
        let c = Arc::new(InteractionCounters::new());
        let writers: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&c);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        c.record_kb_attempt();
                        c.record_kb_success();
                    }
                })
            })
            .collect();

        for _ in 0..1_000 {
            let s = c.snapshot();
            assert!(s.kb_success <= s.kb_attempts);
        }
        for w in writers {
            w.join().unwrap();
        }
        let s = c.snapshot();
        assert_eq!(s.kb_attempts, 4_000);
        assert_eq!(s.kb_success, 4_000);
        assert_eq!(s.success_rates().kb_success_rate, "100.0%");
    }
}
