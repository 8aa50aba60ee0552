//! Lexical cleanup of raw generator output.
//!
//! The sanitizer runs before any rewriting. It only removes or repairs
//! characters; it never introduces new commands. All five steps together are
//! idempotent, which lets callers re-run the pipeline over already-processed
//! text without damage.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of three or more backslashes, produced by generators that escape
/// their own escapes. Collapsed down to exactly two (a row separator).
static EXCESS_ESCAPES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\{3,}").expect("excess escape pattern"));

/// Commands whose mandatory `{}` argument contains only whitespace. The
/// generator emits these when it plans a command and then fails to fill it.
static EMPTY_ARG_COMMANDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\\frac\s*\{\s*\}\s*\{\s*\}",
        r"\\sqrt\s*(?:\[\s*\])?\s*\{\s*\}",
        r"\\(?:textbf|textit|text|mathrm|emph)\s*\{\s*\}",
        r"\^\s*\{\s*\}",
        r"_\s*\{\s*\}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("empty-argument pattern"))
    .collect()
});

/// Zero-width and other invisible formatting characters that break both
/// rendering and keyword matching.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{200E}' | '\u{200F}'
            | '\u{2060}' | '\u{FEFF}' | '\u{00AD}'
    )
}

/// Unicode space variants that should become a plain ASCII space.
fn is_space_variant(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Cleans raw text without interpreting it.
///
/// Steps, in order:
///
/// 1. Strip invisible characters; unify space variants to ASCII space; drop
///    carriage returns and form feeds; expand tabs to spaces.
/// 2. Collapse runs of three or more backslashes to exactly two.
/// 3. Balance braces by appending missing closers at the end. This is a
///    count-based repair, not a parser; the closer position is not inferred.
/// 4. Remove commands with an empty mandatory argument, re-collapsing any
///    escape run the removal exposes.
/// 5. Trim; all-whitespace input becomes the empty string.
pub fn sanitize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            _ if is_invisible(c) => {}
            '\r' | '\u{000C}' => {}
            '\t' => cleaned.push(' '),
            _ if is_space_variant(c) => cleaned.push(' '),
            _ => cleaned.push(c),
        }
    }

    let mut cleaned = EXCESS_ESCAPES.replace_all(&cleaned, r"\\").into_owned();

    let open = cleaned.matches('{').count();
    let close = cleaned.matches('}').count();
    if open > close {
        cleaned.push_str(&"}".repeat(open - close));
    }

    // Removing an empty argument can expose another one (`\text{\text{}}`)
    // or join two row separators into a fresh escape run (`\\^{}\\`), so
    // both rewrites run together to a fixpoint to keep sanitize idempotent.
    loop {
        let mut changed = false;
        for pattern in EMPTY_ARG_COMMANDS.iter() {
            let next = pattern.replace_all(&cleaned, "");
            if next != cleaned {
                cleaned = next.into_owned();
                changed = true;
            }
        }
        let next = EXCESS_ESCAPES.replace_all(&cleaned, r"\\");
        if next != cleaned {
            cleaned = next.into_owned();
            changed = true;
        }
        if !changed {
            break;
        }
    }

    cleaned.trim().to_string()
}
