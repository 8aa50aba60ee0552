//! Direct keyword fixes for narrative prose.
//!
//! Chat output mixes math spans with ordinary sentences, and the generator
//! leaks notation keywords and Markdown emphasis into the sentences too.
//! This pass rewrites those straight to Unicode glyphs — prose has no
//! renderer downstream that would understand a canonical command.

use once_cell::sync::Lazy;
use regex::Regex;

struct ProseFix {
    pattern: Regex,
    replacement: String,
}

fn fix(pattern: &str, replacement: &str) -> ProseFix {
    ProseFix {
        pattern: Regex::new(pattern).expect("prose fix pattern"),
        replacement: replacement.to_string(),
    }
}

/// Ordered fix list. Arrows first (the most common leak), then relations,
/// operators, Greek letters, and finally Markdown emphasis markers.
static PROSE_FIXES: Lazy<Vec<ProseFix>> = Lazy::new(|| {
    let mut fixes = Vec::new();

    // Arrows, escaped or bare. Long and capital forms before the plain
    // case-insensitive ones.
    fixes.push(fix(r"(?i)\\?longrightarrow", "⟶"));
    fixes.push(fix(r"(?i)\\?longleftarrow", "⟵"));
    fixes.push(fix(r"\\?Rightarrow", "⇒"));
    fixes.push(fix(r"\\?Leftarrow", "⇐"));
    fixes.push(fix(r"(?i)\\?rightarrow", "→"));
    fixes.push(fix(r"(?i)\\?leftarrow", "←"));
    fixes.push(fix(r"(?i)(?P<p>^|[^\w\\])to(?P<t>\s+[0-9a-z])", "${p}→${t}"));
    fixes.push(fix(r"\s*->\s*", " → "));

    // Relations.
    for (word, glyph) in [
        ("leq", "≤"),
        ("geq", "≥"),
        ("neq", "≠"),
        ("approx", "≈"),
        ("equiv", "≡"),
    ] {
        fixes.push(keyword_fix(word, glyph));
    }

    // Operators and common symbols.
    for (word, glyph) in [
        ("times", "×"),
        ("div", "÷"),
        ("pm", "±"),
        ("cdot", "·"),
        ("infty", "∞"),
        ("sum", "∑"),
        ("prod", "∏"),
        ("sqrt", "√"),
    ] {
        fixes.push(keyword_fix(word, glyph));
    }

    // Greek letters that show up in running text.
    for (word, glyph) in [
        ("alpha", "α"),
        ("beta", "β"),
        ("gamma", "γ"),
        ("delta", "δ"),
        ("theta", "θ"),
        ("lambda", "λ"),
        ("pi", "π"),
        ("sigma", "σ"),
        ("omega", "ω"),
    ] {
        fixes.push(keyword_fix(word, glyph));
    }

    // Markdown emphasis the generator was told not to emit, but does.
    fixes.push(fix(r"\*\*([^*]+)\*\*", "$1"));
    fixes.push(fix(r"\*([^*]+)\*", "$1"));

    fixes
});

fn keyword_fix(word: &str, glyph: &str) -> ProseFix {
    fix(&format!(r"(?i)(?P<p>^|[^\w\\]){word}\b"), &format!("${{p}}{glyph}"))
}

/// Applies the prose fix list in order.
pub fn rewrite_prose(text: &str) -> String {
    let mut out = text.to_string();
    for f in PROSE_FIXES.iter() {
        out = f.pattern.replace_all(&out, f.replacement.as_str()).into_owned();
    }
    out
}
