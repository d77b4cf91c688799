//! Session focus and per-query frequency table.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;

pub const DEFAULT_FOCUS: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequentQuery {
    pub query: String,
    pub count: u64,
}

#[derive(Debug)]
pub struct ContextMemory {
    current_focus: String,
    frequently_asked: RwLock<HashMap<String, u64>>,
}

impl Default for ContextMemory {
    fn default() -> Self {
        Self {
            current_focus: DEFAULT_FOCUS.to_string(),
            frequently_asked: RwLock::new(HashMap::new()),
        }
    }
}

impl ContextMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_focus(&self) -> &str {
        &self.current_focus
    }

    /// Counts `query` under its lower-cased form.
    pub async fn record(&self, query: &str) {
        let key = query.to_lowercase();
        *self.frequently_asked.write().await.entry(key).or_insert(0) += 1;
    }

    /// Most asked first; ties broken alphabetically.
    pub async fn top(&self, n: usize) -> Vec<FrequentQuery> {
        let mut all: Vec<FrequentQuery> = self
            .frequently_asked
            .read()
            .await
            .iter()
            .map(|(query, count)| FrequentQuery {
                query: query.clone(),
                count: *count,
            })
            .collect();
        all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.query.cmp(&b.query)));
        all.truncate(n);
        all
    }
}
