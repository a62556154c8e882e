//! Whitelisted text-to-markup transformer for AI responses.
//!
//! DESIGN
//! ======
//! The AI endpoint returns plain text sprinkled with `**bold**` and
//! `*italic*` markers. Instead of interpolating raw HTML into the DOM, each
//! line is parsed into typed [`Span`]s and the view layer renders them as
//! `<strong>`/`<em>` elements with text children, so response content can
//! never become structural markup.
//!
//! The scan is a single left-to-right pass: double-asterisk pairs win over
//! single ones at the same position, unterminated markers fall back to the
//! single-asterisk rule or to literal text, and spans do not nest.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// One run of text with its emphasis, literal content only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
}

/// Parse one line of response text into emphasis spans.
pub fn parse_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = line;

    while let Some(star) = rest.find('*') {
        let (before, marked) = rest.split_at(star);
        plain.push_str(before);

        if let Some(body) = marked.strip_prefix("**") {
            if let Some(end) = body.find("**") {
                flush(&mut spans, &mut plain);
                spans.push(Span::Bold(body[..end].to_owned()));
                rest = &body[end + 2..];
                continue;
            }
        }

        // Single asterisk, or a double with no closing pair.
        let body = &marked[1..];
        if let Some(end) = body.find('*') {
            flush(&mut spans, &mut plain);
            spans.push(Span::Italic(body[..end].to_owned()));
            rest = &body[end + 1..];
        } else {
            plain.push('*');
            rest = body;
        }
    }

    plain.push_str(rest);
    flush(&mut spans, &mut plain);
    spans
}

fn flush(spans: &mut Vec<Span>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}
