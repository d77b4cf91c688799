//! Crate-wide error type for kb-client.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type KbResultT<T> = Result<T, KbError>;

/// Errors produced while talking to the knowledge-base service.
#[derive(Debug, Error)]
pub enum KbError {
    /// Network/transport failure without an HTTP status (DNS/connect/reset/timeout).
    #[error("[KB] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("[KB] HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected shape.
    #[error("[KB] decode error: {0}")]
    Decode(String),

    /// Invalid configuration (base URL).
    #[error("[KB] invalid config: {0}")]
    Config(String),
}
