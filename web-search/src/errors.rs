//! Error type for the search provider boundary.

use thiserror::Error;

pub type WebSearchResult<T> = Result<T, WebSearchError>;

#[derive(Debug, Error)]
pub enum WebSearchError {
    /// Connect/DNS/timeout failure, or a body that could not be read.
    #[error("[Web Search] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered non-2xx.
    #[error("[Web Search] HTTP {status} from provider")]
    Status { status: u16 },

    /// Body was not the expected JSON shape.
    #[error("[Web Search] decode error: {0}")]
    Decode(String),

    #[error("[Web Search] invalid config: {0}")]
    Config(String),
}
