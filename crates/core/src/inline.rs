//! Inline tokenizer
//!
//! Turns one line of raw text into text, mark-decorated text, and hard break
//! nodes. The scan is a single left-to-right pass over a byte cursor: spans do
//! not nest and have no escape syntax, so an opener simply consumes everything
//! up to the next matching closer (or the end of the line).

use crate::adf::Inline;

const BR: &str = "<br>";
const BR_SELF_CLOSING: &str = "<br/>";
const STRONG: &str = "**";
const CODE: &str = "`";

/// Tokenize a single line into inline nodes.
///
/// Never emits a zero-length text node. An unterminated `**` or `` ` `` span
/// absorbs the rest of the line as its marked content.
pub fn tokenize(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut pending = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(tag) = [BR, BR_SELF_CLOSING].into_iter().find(|t| rest.starts_with(t)) {
            flush(&mut pending, &mut nodes);
            nodes.push(Inline::HardBreak);
            pos += tag.len();
            continue;
        }

        if let Some(body) = rest.strip_prefix(STRONG) {
            flush(&mut pending, &mut nodes);
            let (span, consumed) = take_span(body, STRONG);
            if !span.is_empty() {
                nodes.push(Inline::strong(span));
            }
            pos += STRONG.len() + consumed;
            continue;
        }

        if let Some(body) = rest.strip_prefix(CODE) {
            flush(&mut pending, &mut nodes);
            let (span, consumed) = take_span(body, CODE);
            if !span.is_empty() {
                nodes.push(Inline::code(span));
            }
            pos += CODE.len() + consumed;
            continue;
        }

        // `rest` is non-empty, so there is always a next char.
        if let Some(ch) = rest.chars().next() {
            pending.push(ch);
            pos += ch.len_utf8();
        }
    }

    flush(&mut pending, &mut nodes);
    nodes
}

/// Split `body` at the first `closer`.
///
/// Returns the span content and how many bytes of `body` were consumed,
/// including the closer when one was found.
fn take_span<'a>(body: &'a str, closer: &str) -> (&'a str, usize) {
    match body.find(closer) {
        Some(end) => (&body[..end], end + closer.len()),
        None => (body, body.len()),
    }
}

fn flush(pending: &mut String, nodes: &mut Vec<Inline>) {
    if !pending.is_empty() {
        nodes.push(Inline::text(std::mem::take(pending)));
    }
}

// ============================================================================
// Tests
// ============================================================================
