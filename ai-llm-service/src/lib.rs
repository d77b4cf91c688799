//! Shared LLM service for the race engineer back-end.
//!
//! - Providers: local Ollama, OpenAI-compatible chat completions, Google Gemini.
//! - Two call-site profiles: `research` (web snippet synthesis) and `answer`
//!   (final clean answer and general-knowledge fallback).
//! - Callers depend on the [`TextGenerator`] trait, so tests can swap in fakes.

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;
pub mod text_generator;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::{AiLlmError, Result};
pub use service_profiles::{LlmServiceProfiles, Profile};
pub use text_generator::TextGenerator;
