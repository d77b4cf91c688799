//! Pit wall: everything between the two sources and the user.
//!
//! - [`category`]: the pure merge policy over the two quality flags.
//! - [`synthesizer`]: basis content per category plus the final clean rewrite.
//! - [`counters`]: lock-free attempt/success/category tallies.
//! - [`history`] and [`context_memory`]: in-process conversation state.
//! - [`engineer`]: [`RaceEngineer`], the per-request orchestrator.

pub mod category;
pub mod context_memory;
pub mod counters;
pub mod engineer;
pub mod history;
pub mod prompts;
pub mod synthesizer;

pub use category::{QualityGrade, QualityScores, ResponseCategory, select_category};
pub use context_memory::{ContextMemory, FrequentQuery};
pub use counters::{InteractionCounters, SourceStatistics, SuccessRates};
pub use engineer::{Answer, AnswerInternal, RaceEngineer};
pub use history::{ConversationEntry, ConversationHistory};
pub use synthesizer::{Synthesis, Synthesizer};
