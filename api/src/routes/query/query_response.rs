use serde::Serialize;

pub const UNHANDLED_APOLOGY: &str = "I apologize, but I'm experiencing technical difficulties \
processing your request. Please try again in a moment.";

/// 500 body when answering the query failed outside the degrade paths.
#[derive(Debug, Serialize)]
pub struct UnhandledFailure {
    pub source: &'static str,
    pub response: &'static str,
}

impl Default for UnhandledFailure {
    fn default() -> Self {
        Self {
            source: "error",
            response: UNHANDLED_APOLOGY,
        }
    }
}
