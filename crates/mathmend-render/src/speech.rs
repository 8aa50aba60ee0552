//! Spoken-phrase rendering for audio narration.
//!
//! The phrase table is Turkish by business requirement; everything else in
//! the pipeline is notation-specific rather than language-specific. The
//! converter favors idiomatic readings where they exist (`x^{2}` is "x kare",
//! not "x üssü 2") and a generic phrasing everywhere else.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::scan::substitute_known;
use crate::tables::COMMAND_TO_SPEECH;

static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\s*\{([^}]*)\}\s*\{([^}]*)\}").expect("fraction pattern"));
static ROOT_INDEXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\sqrt\s*\[([^\]]+)\]\s*\{([^}]*)\}").expect("root pattern"));
static ROOT_PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\sqrt\s*\{([^}]*)\}").expect("root pattern"));
static SUP_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\{([^}]*)\}").expect("superscript pattern"));
static SUP_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^([0-9a-zA-Z])").expect("superscript pattern"));
static SUB_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_\{([^}]*)\}").expect("subscript pattern"));
static SUB_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([0-9a-zA-Z])").expect("subscript pattern"));
static TEXT_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(?:textbf|textit|text|mathrm)\{([^}]*)\}").expect("wrapper pattern")
});
static COMMAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[a-zA-Z]+").expect("command pattern"));
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("integer pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Idiomatic names for the common numeric exponents, generic phrasing for
/// everything else.
fn superscript_phrase(content: &str) -> String {
    let trimmed = content.trim();
    if INTEGER.is_match(trimmed) {
        return match trimmed {
            "2" => "kare".to_string(),
            "3" => "küp".to_string(),
            "-1" => "eksi bir üssü".to_string(),
            n => format!("üssü {n}"),
        };
    }
    format!("üssü {trimmed}")
}

fn fraction_phrase(numerator: &str, denominator: &str) -> String {
    let num = numerator.trim();
    let den = denominator.trim();
    match (num, den) {
        ("1", "2") => "yarım".to_string(),
        ("1", "3") => "üçte bir".to_string(),
        ("1", "4") => "dörtte bir".to_string(),
        _ => format!("{num} bölü {den}"),
    }
}

/// Spoken words for bare arithmetic and grouping symbols.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('+', " artı "),
    ('-', " eksi "),
    ('=', " eşittir "),
    ('<', " küçüktür "),
    ('>', " büyüktür "),
    ('(', " parantez aç "),
    (')', " parantez kapa "),
    ('[', " köşeli parantez aç "),
    (']', " köşeli parantez kapa "),
];

/// Converts canonical math text into a Turkish spoken phrase sequence.
///
/// Steps, in order: fractions, roots, superscripts, subscripts, the command
/// phrase table, text-wrapper unwrapping, bare symbol words, cleanup.
pub fn to_speech(text: &str) -> String {
    let mut out = FRACTION
        .replace_all(text, |c: &Captures| format!(" {} ", fraction_phrase(&c[1], &c[2])))
        .into_owned();

    out = ROOT_INDEXED
        .replace_all(&out, |c: &Captures| {
            format!(" {}. dereceden kök {} ", c[1].trim(), &c[2])
        })
        .into_owned();
    out = ROOT_PLAIN
        .replace_all(&out, |c: &Captures| format!(" karekök {} ", &c[1]))
        .into_owned();

    out = SUP_BRACED
        .replace_all(&out, |c: &Captures| format!(" {} ", superscript_phrase(&c[1])))
        .into_owned();
    out = SUP_SINGLE
        .replace_all(&out, |c: &Captures| format!(" {} ", superscript_phrase(&c[1])))
        .into_owned();

    out = SUB_BRACED
        .replace_all(&out, |c: &Captures| format!(" alt {} ", c[1].trim()))
        .into_owned();
    out = SUB_SINGLE
        .replace_all(&out, |c: &Captures| format!(" alt {} ", &c[1]))
        .into_owned();

    out = substitute_known(&out, &COMMAND_TO_SPEECH, true);

    out = TEXT_WRAPPER.replace_all(&out, " $1 ").into_owned();

    let mut worded = String::with_capacity(out.len() * 2);
    'chars: for c in out.chars() {
        for (symbol, word) in SYMBOL_WORDS {
            if c == *symbol {
                worded.push_str(word);
                continue 'chars;
            }
        }
        worded.push(c);
    }

    let worded = COMMAND_TOKEN.replace_all(&worded, "").into_owned();
    let cleaned: String = worded
        .chars()
        .map(|c| if matches!(c, '{' | '}' | '\\' | '|' | '$') { ' ' } else { c })
        .collect();

    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}

/// Reduced variant: fractions, roots, numeric scripts and a minimal operator
/// table only. For callers that need a fast, loose reading.
pub fn to_speech_brief(text: &str) -> String {
    static SUP_NUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\^\{?(\d+)\}?").expect("superscript pattern"));
    static SUB_NUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"_\{?(\d+)\}?").expect("subscript pattern"));

    let mut out = FRACTION.replace_all(text, "$1 bölü $2").into_owned();
    out = ROOT_PLAIN.replace_all(&out, "karekök $1").into_owned();
    out = SUP_NUM.replace_all(&out, " üssü $1").into_owned();
    out = SUB_NUM.replace_all(&out, " alt $1").into_owned();

    out = out
        .replace(r"\times", " çarpı ")
        .replace(r"\div", " bölü ")
        .replace(r"\pm", " artı eksi ")
        .replace(r"\pi", " pi ")
        .replace(r"\infty", " sonsuz ");

    let out = COMMAND_TOKEN.replace_all(&out, "").into_owned();
    let cleaned: String = out
        .chars()
        .map(|c| if matches!(c, '{' | '}' | '[' | ']' | '\\' | '$') { ' ' } else { c })
        .collect();

    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}
