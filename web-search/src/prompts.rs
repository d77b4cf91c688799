//! Prompt templates for web result synthesis.

pub const RESEARCH_SYSTEM: &str = "You are a Formula 1 race engineer assistant. Focus on technical \
details, specifications and current regulations. Use F1 technical terminology and give specific \
data where it is available.";

/// Technical, citation-aware synthesis prompt over the snippet summary.
pub fn research_prompt(query: &str, summary: &str) -> String {
    format!(
        r#"Using the current web search results below, write a thorough technical answer to: "{query}"

{summary}

Instructions:
- Focus on technical details and current regulations
- Use F1 technical terminology
- Mention strategic implications
- Cite specific sources when stating facts
- Prefer information about the current 2025 season
- Keep the answer clean and professional, without describing internal processing
- Do not list document sources or references"#
    )
}
