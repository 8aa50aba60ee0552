//! Unicode fallback rendering.
//!
//! Rewrites canonical commands and scripted notation into plain Unicode for
//! consumers without a math typesetting renderer. Total and deterministic:
//! unknown commands disappear instead of leaking raw markup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::scan::substitute_known;
use crate::tables::{COMMAND_TO_UNICODE, SIMPLE_FRACTIONS, SUBSCRIPTS, SUPERSCRIPTS};

static SUP_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\{([^}]*)\}").expect("superscript pattern"));
static SUP_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^([0-9a-zA-Z])").expect("superscript pattern"));
static SUB_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_\{([^}]*)\}").expect("subscript pattern"));
static SUB_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([0-9a-zA-Z])").expect("subscript pattern"));
static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\s*\{([^}]*)\}\s*\{([^}]*)\}").expect("fraction pattern"));
static ROOT_INDEXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\sqrt\s*\[([^\]]+)\]\s*\{([^}]*)\}").expect("root pattern"));
static ROOT_PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\sqrt\s*\{([^}]*)\}").expect("root pattern"));
static ROOT_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\sqrt\b").expect("root pattern"));
static TEXT_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(?:textbf|textit|text|mathrm)\{([^}]*)\}").expect("wrapper pattern")
});
static COMMAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[a-zA-Z]+").expect("command pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

fn map_superscript(content: &str) -> String {
    content
        .chars()
        .map(|c| SUPERSCRIPTS.get(&c).copied().unwrap_or(c))
        .collect()
}

fn map_subscript(content: &str) -> String {
    content
        .chars()
        .map(|c| SUBSCRIPTS.get(&c).copied().unwrap_or(c))
        .collect()
}

fn map_fraction(numerator: &str, denominator: &str) -> String {
    let key = format!("{}/{}", numerator.trim(), denominator.trim());
    match SIMPLE_FRACTIONS.get(key.as_str()) {
        Some(glyph) => (*glyph).to_string(),
        None => format!("({numerator}/{denominator})"),
    }
}

/// Converts canonical math text into a Unicode approximation.
///
/// Steps, in order: table substitution, superscripts, subscripts, fractions,
/// roots, text-wrapper unwrapping, removal of remaining commands, removal of
/// structural punctuation, whitespace collapse.
pub fn to_unicode(text: &str) -> String {
    let mut out = substitute_known(text, &COMMAND_TO_UNICODE, false);

    out = SUP_BRACED
        .replace_all(&out, |c: &Captures| map_superscript(&c[1]))
        .into_owned();
    out = SUP_SINGLE
        .replace_all(&out, |c: &Captures| map_superscript(&c[1]))
        .into_owned();

    out = SUB_BRACED
        .replace_all(&out, |c: &Captures| map_subscript(&c[1]))
        .into_owned();
    out = SUB_SINGLE
        .replace_all(&out, |c: &Captures| map_subscript(&c[1]))
        .into_owned();

    out = FRACTION
        .replace_all(&out, |c: &Captures| map_fraction(&c[1], &c[2]))
        .into_owned();

    out = ROOT_INDEXED
        .replace_all(&out, |c: &Captures| {
            format!("{}√({})", map_superscript(c[1].trim()), &c[2])
        })
        .into_owned();
    out = ROOT_PLAIN
        .replace_all(&out, |c: &Captures| format!("√({})", &c[1]))
        .into_owned();
    out = ROOT_BARE.replace_all(&out, "√").into_owned();

    out = TEXT_WRAPPER.replace_all(&out, "$1").into_owned();

    out = COMMAND_TOKEN.replace_all(&out, "").into_owned();
    out.retain(|c| !matches!(c, '{' | '}' | '[' | ']' | '\\' | '|'));
    let out = out.replace('~', " ");

    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Aggressive plain-text form of [`to_unicode`]. Kept as a separate entry
/// point for consumers that must never see grouping characters even if the
/// conversion steps above change.
pub fn to_plain_text(text: &str) -> String {
    let mut out = to_unicode(text);
    out.retain(|c| !matches!(c, '{' | '}' | '[' | ']'));
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{Expect, expect};

    fn check(input: &str, expected: Expect) {
        expected.assert_eq(&to_unicode(input));
    }

    #[test]
    fn table_commands() {
        check(r"\alpha", expect!["α"]);
        check(r"\alpha + \beta \leq \gamma", expect!["α + β ≤ γ"]);
        check(r"\sum_{i} x_{i}", expect!["∑ᵢ xᵢ"]);
    }

    #[test]
    fn superscripts() {
        check(r"x^{2}", expect!["x²"]);
        check(r"x^2", expect!["x²"]);
        check(r"e^{-2}", expect!["e⁻²"]);
        check(r"x^{abc}", expect!["xabc"]); // a, b, c have no glyphs
    }

    #[test]
    fn subscripts() {
        check(r"a_{0}", expect!["a₀"]);
        check(r"x_n", expect!["xₙ"]);
    }

    #[test]
    fn fractions() {
        check(r"\frac{1}{2}", expect!["½"]);
        check(r"\frac{3}{4}", expect!["¾"]);
        check(r"\frac{7}{9}", expect!["(7/9)"]);
    }

    #[test]
    fn roots() {
        check(r"\sqrt{2}", expect!["√(2)"]);
        check(r"\sqrt[3]{8}", expect!["³√(8)"]);
        check(r"\sqrt 2", expect!["√ 2"]);
    }

    #[test]
    fn text_wrappers_unwrap() {
        check(r"\textbf{bold} \text{plain}", expect!["bold plain"]);
        check(r"\mathrm{d}x", expect!["dx"]);
    }

    #[test]
    fn unknown_commands_disappear() {
        check(r"\foo{x} + 1", expect!["x + 1"]);
        check(r"\unknowncommand", expect![""]);
    }

    #[test]
    fn structural_punctuation_is_stripped() {
        check(r"{a} | [b]", expect!["a b"]);
        check(r"\{a\}", expect!["a"]);
    }

    #[test]
    fn whitespace_collapse_and_trim() {
        check("  a   b  ", expect!["a b"]);
        check("", expect![""]);
    }

    #[test]
    fn plain_text_has_no_grouping() {
        let out = to_plain_text(r"\frac{x+1}{y}");
        assert!(!out.contains(['{', '}', '[', ']']));
        assert_eq!(out, "(x+1/y)");
    }
}
