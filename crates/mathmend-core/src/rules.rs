//! The ordered rewrite-rule table used by the normalizer.
//!
//! Each rule restores the escape prefix of one bare keyword (`times` →
//! `\times`). Rules are data, not control flow: the normalizer iterates the
//! table once, in order, and a later rule observes the output of earlier
//! ones. Reordering the table changes behavior on adversarial input, so new
//! rules go where their comment block says they belong.
//!
//! Keywords match only as whole words, and only when not already escaped.
//! `(?P<p>^|[^\w\\])` stands in for a leading `\b` because the `regex` crate
//! has no look-behind; the captured prefix is restored in the replacement.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What kind of notation a rule repairs. Carried for auditability; the
/// normalizer itself treats all categories the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Operator,
    Relation,
    Arrow,
    Function,
    GreekLetter,
    SetTheory,
    Logic,
    Structural,
    TextWrapper,
}

/// One entry of the rewrite table: a trigger pattern and its canonical
/// replacement.
pub struct RewriteRule {
    pub pattern: Regex,
    pub replacement: String,
    pub category: RuleCategory,
}

fn rule(category: RuleCategory, pattern: &str, replacement: &str) -> RewriteRule {
    RewriteRule {
        pattern: Regex::new(pattern).expect("rewrite rule pattern"),
        replacement: replacement.to_string(),
        category,
    }
}

/// A case-insensitive whole-word keyword that gains a backslash prefix.
fn keyword(category: RuleCategory, word: &str) -> RewriteRule {
    rule(
        category,
        &format!(r"(?i)(?P<p>^|[^\w\\]){word}\b"),
        &format!(r"${{p}}\{word}"),
    )
}

/// Like [`keyword`] but also matches when a digit follows directly
/// (`times5`), inserting the separating space the generator forgot.
fn keyword_digit(category: RuleCategory, word: &str) -> RewriteRule {
    rule(
        category,
        &format!(r"(?i)(?P<p>^|[^\w\\]){word}(?P<d>\d)"),
        &format!(r"${{p}}\{word} ${{d}}"),
    )
}

/// A keyword that opens a braced argument (`begin{` → `\begin{`).
fn keyword_brace(category: RuleCategory, word: &str) -> RewriteRule {
    rule(
        category,
        &format!(r"(?i)(?P<p>^|[^\w\\]){word}\{{"),
        &format!(r"${{p}}\{word}{{"),
    )
}

/// The full rewrite table, applied top to bottom.
pub static REWRITE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    use RuleCategory::*;

    let mut rules = Vec::new();

    // Arithmetic operators. The digit-suffix forms must precede the plain
    // forms so `times5` is split before the whole-word rule runs.
    rules.push(keyword_digit(Operator, "times"));
    rules.push(keyword(Operator, "times"));
    rules.push(keyword_digit(Operator, "div"));
    rules.push(keyword(Operator, "div"));
    rules.push(keyword(Operator, "cdot"));
    rules.push(keyword(Operator, "pm"));
    rules.push(keyword(Operator, "mp"));

    // Relations.
    for w in ["leq", "geq", "neq", "approx", "equiv", "sim"] {
        rules.push(keyword(Relation, w));
    }

    // Arrows. The case-sensitive capital forms come first; the
    // case-insensitive lowercase rules would otherwise swallow them.
    rules.push(rule(Arrow, r"(?P<p>^|[^\w\\])Rightarrow\b", r"${p}\Rightarrow"));
    rules.push(rule(Arrow, r"(?P<p>^|[^\w\\])Leftarrow\b", r"${p}\Leftarrow"));
    for w in ["longrightarrow", "longleftarrow", "rightarrow", "leftarrow", "to"] {
        rules.push(keyword(Arrow, w));
    }
    rules.push(rule(Arrow, r"\s*->\s*", r" \to "));

    // Elementary functions.
    for w in ["sqrt", "frac", "sum", "prod", "int", "lim", "infty"] {
        rules.push(keyword(Function, w));
    }

    // Trigonometry. Inverse forms first, although plain-word matching
    // already keeps `sin` out of `arcsin`.
    for w in [
        "arcsin", "arccos", "arctan", "sin", "cos", "tan", "cot", "sec", "csc",
    ] {
        rules.push(keyword(Function, w));
    }

    // Logarithms.
    for w in ["log", "ln", "exp"] {
        rules.push(keyword(Function, w));
    }

    // The lower-case Greek vocabulary. No `omicron`: LaTeX has no such
    // command, the Latin letter `o` is used instead.
    for w in [
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
        "iota", "kappa", "lambda", "mu", "nu", "xi", "pi", "rho", "sigma",
        "tau", "upsilon", "phi", "chi", "psi", "omega",
    ] {
        rules.push(keyword(GreekLetter, w));
    }

    // Set theory. `notin` before `in` so the compound keyword wins.
    for w in ["notin", "in", "subset", "supset", "cup", "cap", "emptyset"] {
        rules.push(keyword(SetTheory, w));
    }

    // Logic.
    for w in ["forall", "exists"] {
        rules.push(keyword(Logic, w));
    }

    // Structural commands.
    rules.push(keyword_brace(Structural, "begin"));
    rules.push(keyword_brace(Structural, "end"));
    rules.push(keyword(Structural, "hline"));

    // Text wrappers. `textbf`/`textit` never collide with `text` because
    // the brace must follow the keyword directly.
    rules.push(keyword_brace(TextWrapper, "textbf"));
    rules.push(keyword_brace(TextWrapper, "textit"));
    rules.push(keyword_brace(TextWrapper, "text"));
    rules.push(keyword_brace(TextWrapper, "mathrm"));

    rules
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_compiles_and_is_nonempty() {
        assert!(REWRITE_RULES.len() > 50);
    }

    #[test]
    fn every_category_is_represented() {
        use RuleCategory::*;
        for cat in [
            Operator, Relation, Arrow, Function, GreekLetter, SetTheory, Logic,
            Structural, TextWrapper,
        ] {
            assert!(
                REWRITE_RULES.iter().any(|r| r.category == cat),
                "no rule for {cat:?}"
            );
        }
    }

    #[test]
    fn capital_arrow_rules_precede_lowercase() {
        let upper = REWRITE_RULES
            .iter()
            .position(|r| r.replacement.contains(r"\Rightarrow"))
            .unwrap();
        let lower = REWRITE_RULES
            .iter()
            .position(|r| r.replacement.contains(r"\rightarrow"))
            .unwrap();
        assert!(upper < lower);
    }
}
