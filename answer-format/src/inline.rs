//! Inline span scanner.
//!
//! At every `*` the longest marker (3, 2, then 1 stars) is tried. A marker
//! matches when it is followed by non-empty, star-free content and closed by at
//! least as many stars. Anything else is plain text.

use crate::types::Span;

pub fn tokenize_inline(text: &str) -> Vec<Span> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            // Copy up to the next star in one go.
            let next = text[i..].find('*').map_or(bytes.len(), |off| i + off);
            plain.push_str(&text[i..next]);
            i = next;
            continue;
        }

        match match_marker(text, i) {
            Some((span, end)) => {
                if !plain.is_empty() {
                    spans.push(Span::Plain(std::mem::take(&mut plain)));
                }
                spans.push(span);
                i = end;
            }
            None => {
                plain.push('*');
                i += 1;
            }
        }
    }

    if !plain.is_empty() {
        spans.push(Span::Plain(plain));
    }
    spans
}

/// Tries a marker starting at byte `start`; returns the span and the byte after it.
fn match_marker(text: &str, start: usize) -> Option<(Span, usize)> {
    let bytes = text.as_bytes();
    for width in (1..=3).rev() {
        let open_end = start + width;
        if open_end >= bytes.len() || !bytes[start..open_end].iter().all(|b| *b == b'*') {
            continue;
        }
        if bytes[open_end] == b'*' {
            continue;
        }
        let Some(close) = text[open_end..].find('*').map(|off| open_end + off) else {
            continue;
        };
        let close_end = close + width;
        if close_end > bytes.len() || !bytes[close..close_end].iter().all(|b| *b == b'*') {
            continue;
        }
        let content = text[open_end..close].to_string();
        let span = match width {
            3 => Span::StrongEmphasis(content),
            2 => Span::Strong(content),
            _ => Span::Emphasis(content),
        };
        return Some((span, close_end));
    }
    None
}
