use serde::Serialize;

/// Paragraph-level unit of a formatted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading text is kept verbatim, without inline markup.
    Heading { level: u8, text: String },
    Bullet { spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Emphasis(String),
    Strong(String),
    StrongEmphasis(String),
}
