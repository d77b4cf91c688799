use answer_format::Block;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response payload for /api/history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub entries: Vec<HistoryItem>,
}

/// One answered query with its answer pre-rendered into blocks.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub interaction_id: u64,
    pub query: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub response: String,
    pub blocks: Vec<Block>,
}
