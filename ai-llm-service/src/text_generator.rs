//! Prompt-in, text-out seam used by every call site.

use async_trait::async_trait;

use crate::error_handler::AiLlmError;

/// Anything that turns a prompt (plus optional system instruction) into text.
///
/// Implemented by the profile-bound generators of
/// [`crate::service_profiles::LlmServiceProfiles`]; tests provide fakes.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError>;
}
