use pit_wall::{FrequentQuery, SourceStatistics, SuccessRates};
use serde::Serialize;

/// Response payload for /api/stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_interactions: u64,
    pub source_statistics: SourceStatistics,
    pub success_rates: SuccessRates,
    pub current_focus: String,
    /// Up to five most asked (lower-cased) queries.
    pub frequently_asked: Vec<FrequentQuery>,
}
