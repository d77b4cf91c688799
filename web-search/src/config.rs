//! Search provider settings from the environment.

use crate::errors::{WebSearchError, WebSearchResult};

const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSearchConfig {
    /// `None` disables web search entirely (no network calls).
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_SERPAPI_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl WebSearchConfig {
    /// Reads `SERPAPI_API_KEY` (optional), `SERPAPI_URL` and `WEB_TIMEOUT_SECS`.
    ///
    /// A blank key is treated as absent.
    pub fn from_env() -> WebSearchResult<Self> {
        let api_key = non_blank("SERPAPI_API_KEY");
        let endpoint = non_blank("SERPAPI_URL").unwrap_or_else(|| DEFAULT_SERPAPI_URL.to_string());
        let timeout_secs = non_blank("WEB_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| WebSearchError::Config("WEB_TIMEOUT_SECS must be a u64".into()))
            })
            .transpose()?;

        Self::new(api_key, endpoint, timeout_secs)
    }

    pub fn new(
        api_key: Option<String>,
        endpoint: impl Into<String>,
        timeout_secs: Option<u64>,
    ) -> WebSearchResult<Self> {
        let endpoint = endpoint.into().trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(WebSearchError::Config(format!(
                "search endpoint must start with http:// or https://, got `{endpoint}`"
            )));
        }
        Ok(Self {
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            endpoint,
            timeout_secs,
        })
    }
}

fn non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
