//! Rule-based rewriting of sanitized text into canonical commands.
//!
//! Three passes, in a fixed order:
//!
//! 1. The [`REWRITE_RULES`] table restores missing escape prefixes.
//! 2. Malformed tabular row separators are repaired.
//! 3. Plain-text arrow glyphs outside math spans become Unicode arrows.
//!
//! Normalization is a pure rewrite. It performs no validation and, unlike
//! the sanitizer, makes no idempotence promise.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::REWRITE_RULES;

/// A lone `\` plus whitespace before `\hline`: the generator dropped the
/// second backslash of the row separator.
static SINGLE_SEP_BEFORE_HLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<p>^|[^\\\s])\s*\\\s+\\hline").expect("row separator pattern")
});

/// A lone `\` at the end of a row. Only applied inside `\begin`/`\end`
/// blocks, where a trailing single backslash can only be a truncated `\\`.
static SINGLE_SEP_AT_EOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?P<p>^|[^\\\s])[ \t]*\\[ \t]*$").expect("row end pattern")
});

static BEGIN_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{([^}]*)\}").expect("begin pattern"));

/// Plain-text arrow glyphs and their Unicode forms, applied to prose only.
static PROSE_ARROWS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\s*->\s*", " \u{2192} "),
        (r"\s*=>\s*", " \u{21D2} "),
        (r"\s*<-\s*", " \u{2190} "),
    ]
    .iter()
    .map(|(p, r)| (Regex::new(p).expect("arrow pattern"), *r))
    .collect()
});

/// Rewrites bare keywords to canonical commands and repairs the structural
/// damage the rewrite table cannot express.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for rule in REWRITE_RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement.as_str()).into_owned();
    }
    out = fix_row_separators(&out);
    convert_plain_arrows(&out)
}

fn fix_row_separators(text: &str) -> String {
    let out = SINGLE_SEP_BEFORE_HLINE
        .replace_all(text, r"${p} \\ \hline")
        .into_owned();

    // Row-end repair is restricted to structural regions; a lone trailing
    // backslash in prose is left alone.
    let mut result = String::with_capacity(out.len());
    let mut cursor = 0;
    while let Some(begin) = BEGIN_BLOCK.captures_at(&out, cursor) {
        let whole = begin.get(0).expect("match 0");
        let name = &begin[1];
        let end_marker = format!("\\end{{{name}}}");
        let Some(rel) = out[whole.end()..].find(&end_marker) else {
            break;
        };
        let body_start = whole.end();
        let body_end = body_start + rel;
        result.push_str(&out[cursor..body_start]);
        result.push_str(&SINGLE_SEP_AT_EOL.replace_all(&out[body_start..body_end], r"${p} \\"));
        cursor = body_end;
    }
    result.push_str(&out[cursor..]);
    result
}

/// Applies the arrow substitutions to every segment of `text` lying outside
/// `$`-delimited math. Interiors of math spans keep their command forms.
fn convert_plain_arrows(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_math = false;
    let mut segment = String::new();
    let mut prev = '\0';

    let flush = |segment: &mut String, out: &mut String, in_math: bool| {
        if in_math {
            out.push_str(segment);
        } else {
            let mut s = segment.clone();
            for (pattern, replacement) in PROSE_ARROWS.iter() {
                s = pattern.replace_all(&s, *replacement).into_owned();
            }
            out.push_str(&s);
        }
        segment.clear();
    };

    for c in text.chars() {
        if c == '$' && prev != '\\' {
            flush(&mut segment, &mut out, in_math);
            out.push('$');
            in_math = !in_math;
        } else {
            segment.push(c);
        }
        prev = c;
    }
    flush(&mut segment, &mut out, in_math);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_missing_escape_prefix() {
        assert_eq!(normalize("pi"), r"\pi");
        assert_eq!(normalize("2 times 3"), r"2 \times 3");
        assert_eq!(normalize("a leq b"), r"a \leq b");
        assert_eq!(normalize("sqrt"), r"\sqrt");
    }

    #[test]
    fn splits_digit_suffix() {
        assert_eq!(normalize("times5"), r"\times 5");
        assert_eq!(normalize("div2"), r"\div 2");
    }

    #[test]
    fn whole_word_matching_spares_identifiers() {
        assert_eq!(normalize("pickle"), "pickle");
        assert_eq!(normalize("suspicious"), "suspicious");
        assert_eq!(normalize("timestamp"), "timestamp");
    }

    #[test]
    fn already_escaped_commands_are_untouched() {
        assert_eq!(normalize(r"\times"), r"\times");
        assert_eq!(normalize(r"\alpha + \beta"), r"\alpha + \beta");
    }

    #[test]
    fn capital_arrows_keep_their_case() {
        assert_eq!(normalize("A Rightarrow B"), r"A \Rightarrow B");
        assert_eq!(normalize("A rightarrow B"), r"A \rightarrow B");
    }

    #[test]
    fn structural_keywords() {
        assert_eq!(normalize("begin{array}"), r"\begin{array}");
        assert_eq!(normalize("end{array}"), r"\end{array}");
        assert_eq!(normalize("textbf{x}"), r"\textbf{x}");
    }

    #[test]
    fn ascii_arrow_becomes_to_command() {
        assert_eq!(normalize("$f: A -> B$"), r"$f: A \to B$");
    }

    #[test]
    fn repairs_row_separator_before_hline() {
        assert_eq!(normalize(r"1 & 2 \ \hline"), r"1 & 2 \\ \hline");
    }

    #[test]
    fn repairs_row_end_inside_region() {
        let input = "\\begin{array}{cc}\n1 & 2 \\\n3 & 4\n\\end{array}";
        let out = normalize(input);
        assert!(out.contains("1 & 2 \\\\\n"), "got {out:?}");
    }

    #[test]
    fn lone_backslash_outside_region_is_kept() {
        let out = normalize("stray \\\nprose");
        assert!(!out.contains(r"\\"), "got {out:?}");
    }

    #[test]
    fn prose_arrows_become_unicode() {
        let out = normalize("acid + base => salt");
        assert_eq!(out, "acid + base \u{21D2} salt");
        assert_eq!(normalize("x <- y"), "x \u{2190} y");
    }

    #[test]
    fn arrows_inside_math_keep_command_form() {
        // `->` is handled by the rewrite table before the prose pass runs,
        // so inside math it stays a command rather than a glyph.
        let out = normalize("$a -> b$ and c -> d");
        assert!(out.starts_with(r"$a \to b$"), "got {out:?}");
    }
}
