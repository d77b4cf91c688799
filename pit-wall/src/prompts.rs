//! Prompt templates for fallback and final answer synthesis.

pub const CLEAN_SYSTEM: &str = "You are a Formula 1 race engineer assistant. Give clean, professional \
answers. Never describe internal processing, quality assessments, validation details or document \
references. Deliver the technical information the user needs, clearly and with authority.";

pub const STATIC_FALLBACK: &str = "I apologize, but I'm having difficulty accessing specific information \
about this topic right now. Could you try rephrasing your question or asking about a different F1 \
technical aspect?";

pub const SYNTHESIS_APOLOGY: &str =
    "I apologize, but I'm experiencing technical difficulties. Please try your question again.";

pub fn dual_source_content(kb: &str, web: &str) -> String {
    format!("Knowledge Base Information:\n{kb}\n\nCurrent Web Information:\n{web}")
}

/// General-knowledge answer when neither source is usable.
pub fn fallback_prompt(query: &str) -> String {
    format!(
        r#"The user asked: "{query}"

Answer as an F1 race engineer from your general knowledge of Formula 1 technical regulations, procedures and best practice. Cover what you can about the topic without mentioning any limits of your sources."#
    )
}

/// Final rewrite of the basis content.
pub fn clean_prompt(query: &str, content: &str) -> String {
    format!(
        r#"Using the information below about "{query}", write a clean, professional F1 race engineer answer:

{content}

Instructions:
- Give a thorough, technical answer
- Use correct F1 terminology and technical language
- Structure the information clearly
- Include strategic implications where relevant
- Do not mention sources, quality checks, internal processing or document references
- Do not add any "Referenced from X documents" section
- Deliver the technical information directly
- Keep the tone professional and authoritative
- Use markdown-style headers for sections when helpful"#
    )
}
