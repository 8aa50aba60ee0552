//! # MathMend Pipeline
//!
//! Composition of the repair stages into the surface callers actually use.
//!
//! ```text
//!                ┌──────────┐   ┌───────────┐   ┌──────────┐
//! raw text ────► │ sanitize │ ─►│ normalize │ ─►│ validate │──► report
//!                └──────────┘   └───────────┘   └────┬─────┘
//!                                    canonical       │
//!                                        │           ▼
//!                                        ├────► to_unicode ──► fallback
//!                                        └────► (canonical output)
//! ```
//!
//! - [`process`] runs the full pipeline over one string.
//! - [`process_mixed_text`] locates `$`-delimited math spans in prose and
//!   repairs only their interiors.
//! - [`rewrite_prose`] applies the direct keyword-to-glyph fixes meant for
//!   narrative text around the math.
//! - [`stream::MathStream`] wraps all of it for chunked input, withholding
//!   any suffix inside an unterminated math region.
//!
//! Everything except `MathStream` is a pure function; the stream's only
//! state is its pending buffer, owned by the caller.

pub mod span;
pub mod stream;

mod prose;

use log::debug;
use serde::{Deserialize, Serialize};

use mathmend_core::{ValidationIssue, normalize, sanitize, validate};
use mathmend_render::to_unicode;

pub use prose::rewrite_prose;
pub use span::{MathSpan, SpanKind, scan_spans};
pub use stream::MathStream;

/// Everything the pipeline produces for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// Sanitized and normalized text, for a math typesetting renderer.
    pub canonical: String,
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Unicode approximation of `canonical`, for renderers without math
    /// typesetting support.
    pub fallback: String,
    /// Structural issues found in `canonical`. Informational; output is
    /// produced regardless.
    pub errors: Vec<ValidationIssue>,
}

/// Runs sanitize → normalize → validate and renders the Unicode fallback.
pub fn process(text: &str) -> ProcessOutput {
    let canonical = normalize(&sanitize(text));
    let report = validate(&canonical);
    let fallback = to_unicode(&canonical);
    if !report.is_valid {
        debug!("{} structural issue(s) in processed text", report.errors.len());
    }
    ProcessOutput {
        canonical,
        is_valid: report.is_valid,
        fallback,
        errors: report.errors,
    }
}

/// True when a span interior is just a number (possibly grouped), as in
/// currency amounts the generator wrongly wrapped in `$`.
fn is_purely_numeric(inner: &str) -> bool {
    let trimmed = inner.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',') || c.is_whitespace())
}

/// Repairs the math spans embedded in mixed prose, leaving the prose and
/// the span boundaries untouched.
///
/// Spans with purely numeric content are skipped so that currency-style
/// text (`$50$`) is not treated as math.
pub fn process_mixed_text(text: &str) -> String {
    let spans = scan_spans(text);
    if spans.is_empty() {
        return text.to_string();
    }
    debug!("repairing {} math span(s)", spans.len());

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        let inner = span.inner(text);
        if is_purely_numeric(inner) {
            out.push_str(&text[span.start..span.end]);
        } else {
            let delimiter = span.kind.delimiter();
            out.push_str(delimiter);
            out.push_str(&process(inner).canonical);
            out.push_str(delimiter);
        }
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_composes_the_stages() {
        let out = process("  2 times5 \u{200B} ");
        assert_eq!(out.canonical, r"2 \times 5");
        assert_eq!(out.fallback, "2 × 5");
        assert!(out.is_valid);
        assert!(out.errors.is_empty());
    }

    #[test]
    fn process_reports_issues_but_still_renders() {
        let out = process(r"\frac{}{2} + \usepackage{x}");
        assert!(!out.is_valid);
        assert!(!out.errors.is_empty());
        assert!(!out.canonical.is_empty());
        assert!(!out.fallback.contains(r"\frac"));
    }

    #[test]
    fn process_empty_input() {
        let out = process("   ");
        assert_eq!(out.canonical, "");
        assert_eq!(out.fallback, "");
        assert!(out.is_valid);
    }

    #[test]
    fn output_serializes() {
        let out = process("x^{2}");
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"canonical\""));
        assert!(json.contains("\"is_valid\""));
    }

    #[test]
    fn mixed_text_repairs_only_span_interiors() {
        let out = process_mixed_text("The area is $pi r^2$ here.");
        assert_eq!(out, r"The area is $\pi r^2$ here.");
    }

    #[test]
    fn mixed_text_leaves_prose_alone() {
        // `times` in prose stays prose; only span interiors are rewritten.
        let out = process_mixed_text("good times $a times b$");
        assert_eq!(out, r"good times $a \times b$");
    }

    #[test]
    fn mixed_text_skips_numeric_spans() {
        assert_eq!(process_mixed_text("costs $50$ total"), "costs $50$ total");
        assert_eq!(process_mixed_text("about $1,300.50$"), "about $1,300.50$");
    }

    #[test]
    fn mixed_text_block_spans() {
        let out = process_mixed_text("$$x^{2} leq 9$$");
        assert_eq!(out, r"$$x^{2} \leq 9$$");
    }

    #[test]
    fn mixed_text_without_spans_is_identity() {
        let text = "no math here, just words";
        assert_eq!(process_mixed_text(text), text);
    }

    #[test]
    fn span_boundaries_are_preserved() {
        let text = "a $x$ b $$y$$ c";
        let out = process_mixed_text(text);
        assert_eq!(out.matches('$').count(), text.matches('$').count());
    }
}
