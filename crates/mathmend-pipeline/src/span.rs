//! Locating math spans embedded in prose.
//!
//! The scanner is a flat delimiter walk, not a parser: spans never nest in
//! the supported vocabulary, and an unterminated opener simply ends the
//! scan. Stray single delimiters inside an intended block span are a known
//! limitation inherited from the source material.

use serde::{Deserialize, Serialize};

/// Whether a span uses single (`$…$`) or double (`$$…$$`) delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanKind {
    Inline,
    Block,
}

impl SpanKind {
    /// The delimiter text for this kind of span.
    pub fn delimiter(self) -> &'static str {
        match self {
            SpanKind::Inline => "$",
            SpanKind::Block => "$$",
        }
    }
}

/// A contiguous math region, delimiters included. Byte offsets into the
/// scanned text; fixed once located, only the interior gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl MathSpan {
    /// The span's interior, without delimiters.
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        let d = self.kind.delimiter().len();
        &text[self.start + d..self.end - d]
    }
}

/// Finds the next unescaped `$` at or after `from`.
pub(crate) fn next_dollar(text: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = text[search..].find('$') {
        let pos = search + rel;
        if pos == 0 || text.as_bytes()[pos - 1] != b'\\' {
            return Some(pos);
        }
        search = pos + 1;
    }
    None
}

/// Scans `text` for non-nested math spans, left to right. Unterminated
/// spans are not reported.
pub fn scan_spans(text: &str) -> Vec<MathSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(open) = next_dollar(text, cursor) {
        let is_block = text[open + 1..].starts_with('$');
        if is_block {
            let Some(close) = find_block_close(text, open + 2) else {
                break;
            };
            spans.push(MathSpan { kind: SpanKind::Block, start: open, end: close + 2 });
            cursor = close + 2;
        } else {
            let Some(close) = next_dollar(text, open + 1) else {
                break;
            };
            spans.push(MathSpan { kind: SpanKind::Inline, start: open, end: close + 1 });
            cursor = close + 1;
        }
    }
    spans
}

/// Finds the opening position of the next unescaped `$$` at or after `from`.
fn find_block_close(text: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(pos) = next_dollar(text, search) {
        if text[pos + 1..].starts_with('$') {
            return Some(pos);
        }
        search = pos + 1;
    }
    None
}

/// Returns the length of the longest prefix safe to hand to the rewriter:
/// everything up to the first unescaped `$` that does not begin a complete
/// span. A trailing lone `$` is never safe, since the next chunk could turn
/// it into a `$$` opener or the interior could still be arriving.
pub(crate) fn safe_prefix_len(text: &str) -> usize {
    let tail = scan_spans(text).last().map_or(0, |s| s.end);
    next_dollar(text, tail).unwrap_or(text.len())
}
