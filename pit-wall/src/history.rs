//! Append-only, in-memory conversation log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub interaction_id: u64,
    pub query: String,
    pub response: String,
    /// Category name, or `"error"` when the final synthesis failed.
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

/// Unbounded; lives as long as the process.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    entries: RwLock<Vec<ConversationEntry>>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: ConversationEntry) {
        self.entries.write().await.push(entry);
    }

    /// Entries in insertion order.
    pub async fn entries(&self) -> Vec<ConversationEntry> {
        self.entries.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, query: &str) -> ConversationEntry {
        ConversationEntry {
            interaction_id: id,
            query: query.into(),
            response: "ok".into(),
            source: "dual_source_validated".into(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let h = ConversationHistory::new();
        assert!(h.entries().await.is_empty());
        h.append(entry(1, "tyres")).await;
        h.append(entry(2, "drs")).await;

        let all = h.entries().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].query, "tyres");
        assert_eq!(all[1].interaction_id, 2);
    }
}
