use crate::{inline::tokenize_inline, types::Block};

/// Splits `text` into blocks in one pass over its paragraphs.
pub fn format_answer(text: &str) -> Vec<Block> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(classify)
        .collect()
}

fn classify(paragraph: &str) -> Block {
    if let Some(title) = paragraph.strip_prefix("## ") {
        return Block::Heading {
            level: 2,
            text: title.trim().to_string(),
        };
    }
    if let Some(title) = paragraph.strip_prefix("### ") {
        return Block::Heading {
            level: 3,
            text: title.trim().to_string(),
        };
    }
    if paragraph.starts_with("***") || paragraph.starts_with("* ") {
        let content = paragraph.trim_start_matches('*').trim();
        return Block::Bullet {
            spans: tokenize_inline(content),
        };
    }
    Block::Paragraph {
        spans: tokenize_inline(paragraph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Span;

    #[test]
    fn classifies_paragraphs() {
        let text = "## Strategy\n\n### Tyres\n\n* Soft compound **fastest**\n\n\n\nPlain *note*.\n\n   ";
        let blocks = format_answer(text);
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 2, text: "Strategy".into() },
                Block::Heading { level: 3, text: "Tyres".into() },
                Block::Bullet {
                    spans: vec![
                        Span::Plain("Soft compound ".into()),
                        Span::Strong("fastest".into()),
                    ],
                },
                Block::Paragraph {
                    spans: vec![
                        Span::Plain("Plain ".into()),
                        Span::Emphasis("note".into()),
                        Span::Plain(".".into()),
                    ],
                },
            ]
        );
    }

    #[test]
    fn triple_star_prefix_is_a_bullet() {
        let blocks = format_answer("***Undercut*** works best early");
        assert_eq!(
            blocks,
            vec![Block::Bullet {
                spans: vec![Span::Plain("Undercut*** works best early".into())],
            }]
        );
    }

    #[test]
    fn heading_without_space_is_a_paragraph() {
        assert!(matches!(
            format_answer("##Not a heading").as_slice(),
            [Block::Paragraph { .. }]
        ));
    }

    #[test]
    fn serializes_tagged_shapes() {
        let json = serde_json::to_value(format_answer("## DRS\n\n**Open** now")).unwrap();
        assert_eq!(json[0]["kind"], "heading");
        assert_eq!(json[0]["level"], 2);
        assert_eq!(json[1]["kind"], "paragraph");
        assert_eq!(json[1]["spans"][0]["style"], "strong");
        assert_eq!(json[1]["spans"][0]["text"], "Open");
    }
}
