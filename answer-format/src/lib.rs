//! Turns answer text into typed blocks and inline spans.
//!
//! Supported subset:
//! - blank-line separated paragraphs
//! - `## ` and `### ` headings
//! - `* ` / `***` bullets
//! - `***strong emphasis***`, `**strong**`, `*emphasis*`

pub mod blocks;
pub mod inline;
pub mod types;

pub use blocks::format_answer;
pub use inline::tokenize_inline;
pub use types::{Block, Span};
