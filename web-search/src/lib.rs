//! Web-search source for the race engineer.
//!
//! Flow: search provider ([`SerpApiClient`]) -> relevance filter -> snippet
//! summary -> `research` LLM synthesis -> [`WebResult`]. Every failure degrades
//! into `success = false` with a tagged [`WebFailure`].

pub mod config;
pub mod errors;
pub mod prompts;
pub mod provider;
pub mod relevance;
pub mod researcher;
pub mod types;

pub use config::WebSearchConfig;
pub use errors::{WebSearchError, WebSearchResult};
pub use provider::{SearchProvider, SerpApiClient};
pub use researcher::WebResearcher;
pub use types::{OrganicResult, SearchResponse, WebFailure, WebFailureKind, WebResult};
