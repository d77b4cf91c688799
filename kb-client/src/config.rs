//! Runtime configuration loaded from environment variables.

use crate::errors::{KbError, KbResultT};

const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Connection settings for the knowledge-base service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbConfig {
    /// Base URL, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Optional request timeout; `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl KbConfig {
    /// Reads `PYTHON_SERVICE_URL` and `KB_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// [`KbError::Config`] when the URL has no http(s) scheme or the timeout is not a number.
    pub fn from_env() -> KbResultT<Self> {
        let base_url = std::env::var("PYTHON_SERVICE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let timeout_secs = match std::env::var("KB_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse::<u64>()
                    .map_err(|_| KbError::Config("KB_TIMEOUT_SECS must be a u64".into()))?,
            ),
            _ => None,
        };

        Self::new(base_url, timeout_secs)
    }

    /// Validates and normalizes (no trailing slash) the base URL.
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> KbResultT<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(KbError::Config(format!(
                "service URL must start with http:// or https://, got `{base_url}`"
            )));
        }
        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let cfg = KbConfig::new("http://kb:5000/", Some(5)).unwrap();
        assert_eq!(cfg.base_url, "http://kb:5000");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            KbConfig::new("kb:5000", None),
            Err(KbError::Config(_))
        ));
    }
}
