//! Non-fatal structural validation.
//!
//! Every check is count-based and independent; all of them run even when an
//! earlier one has already failed. The result is a list of
//! [`ValidationIssue`]s — validation classifies, it never blocks the rest of
//! the pipeline from producing output.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static BEGIN_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{([^}]*)\}").expect("begin pattern"));
static END_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\end\{([^}]*)\}").expect("end pattern"));

static EMPTY_NUMERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\s*\{\s*\}\s*\{").expect("numerator pattern"));
static EMPTY_DENOMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\s*\{[^}]*\}\s*\{\s*\}").expect("denominator pattern"));
static DOUBLE_SUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^[^{]\^|\^\{[^}]*\}\^").expect("superscript pattern"));
static DOUBLE_SUBSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_[^{]_|_\{[^}]*\}_").expect("subscript pattern"));
static DIGIT_COMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[0-9]").expect("digit command pattern"));

/// Commands the canonical renderer cannot execute. Macro definition and file
/// inclusion are rejected wholesale.
const DENYLIST: &[&str] = &[
    r"\def",
    r"\newcommand",
    r"\renewcommand",
    r"\DeclareMathOperator",
    r"\usepackage",
    r"\input",
    r"\include",
];

/// One structural problem found in the text. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ValidationIssue {
    #[error("unbalanced braces: {open} open, {close} close")]
    UnbalancedBraces { open: usize, close: usize },
    #[error("unbalanced brackets: {open} open, {close} close")]
    UnbalancedBrackets { open: usize, close: usize },
    #[error("unbalanced parentheses: {open} open, {close} close")]
    UnbalancedParens { open: usize, close: usize },
    #[error("environment count mismatch: {begins} \\begin, {ends} \\end")]
    EnvironmentCount { begins: usize, ends: usize },
    #[error("environment `{name}` is opened and closed an unequal number of times")]
    EnvironmentMismatch { name: String },
    #[error("empty fraction numerator")]
    EmptyNumerator,
    #[error("empty fraction denominator")]
    EmptyDenominator,
    #[error("stacked superscript markers")]
    DoubleSuperscript,
    #[error("stacked subscript markers")]
    DoubleSubscript,
    #[error("command starting with a digit")]
    DigitCommand,
    #[error("unsupported command: {name}")]
    UnsupportedCommand { name: String },
}

/// The outcome of [`validate`]. `is_valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Human-readable messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Runs every structural check over `text`. Never fails, never mutates.
pub fn validate(text: &str) -> ValidationReport {
    let mut errors = Vec::new();

    check_balance(text, &mut errors);
    check_environments(text, &mut errors);
    check_bad_patterns(text, &mut errors);
    check_denylist(text, &mut errors);

    ValidationReport { is_valid: errors.is_empty(), errors }
}

/// Convenience wrapper when only the verdict matters.
pub fn is_valid(text: &str) -> bool {
    validate(text).is_valid
}

fn check_balance(text: &str, errors: &mut Vec<ValidationIssue>) {
    let pairs: [(char, char, fn(usize, usize) -> ValidationIssue); 3] = [
        ('{', '}', |open, close| ValidationIssue::UnbalancedBraces { open, close }),
        ('[', ']', |open, close| ValidationIssue::UnbalancedBrackets { open, close }),
        ('(', ')', |open, close| ValidationIssue::UnbalancedParens { open, close }),
    ];
    for (open_ch, close_ch, issue) in pairs {
        let open = text.matches(open_ch).count();
        let close = text.matches(close_ch).count();
        if open != close {
            errors.push(issue(open, close));
        }
    }
}

fn check_environments(text: &str, errors: &mut Vec<ValidationIssue>) {
    let mut begins: HashMap<&str, usize> = HashMap::new();
    let mut ends: HashMap<&str, usize> = HashMap::new();
    for cap in BEGIN_ENV.captures_iter(text) {
        *begins.entry(cap.get(1).expect("group 1").as_str()).or_default() += 1;
    }
    for cap in END_ENV.captures_iter(text) {
        *ends.entry(cap.get(1).expect("group 1").as_str()).or_default() += 1;
    }

    let begin_total: usize = begins.values().sum();
    let end_total: usize = ends.values().sum();
    if begin_total != end_total {
        errors.push(ValidationIssue::EnvironmentCount {
            begins: begin_total,
            ends: end_total,
        });
    }

    let mut names: Vec<&str> = begins.keys().chain(ends.keys()).copied().collect();
    names.sort_unstable();
    names.dedup();
    for name in names {
        if begins.get(name).copied().unwrap_or(0) != ends.get(name).copied().unwrap_or(0) {
            errors.push(ValidationIssue::EnvironmentMismatch { name: name.to_string() });
        }
    }
}

fn check_bad_patterns(text: &str, errors: &mut Vec<ValidationIssue>) {
    if EMPTY_NUMERATOR.is_match(text) {
        errors.push(ValidationIssue::EmptyNumerator);
    }
    if EMPTY_DENOMINATOR.is_match(text) {
        errors.push(ValidationIssue::EmptyDenominator);
    }
    if DOUBLE_SUPERSCRIPT.is_match(text) {
        errors.push(ValidationIssue::DoubleSuperscript);
    }
    if DOUBLE_SUBSCRIPT.is_match(text) {
        errors.push(ValidationIssue::DoubleSubscript);
    }
    if DIGIT_COMMAND.is_match(text) {
        errors.push(ValidationIssue::DigitCommand);
    }
}

fn check_denylist(text: &str, errors: &mut Vec<ValidationIssue>) {
    for cmd in DENYLIST {
        if text.contains(cmd) {
            errors.push(ValidationIssue::UnsupportedCommand { name: cmd.to_string() });
        }
    }
}
