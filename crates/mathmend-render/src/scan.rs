//! Command-token substitution.
//!
//! A single left-to-right scan replaces `\name` tokens through a lookup
//! table. Taking the maximal letter run after the backslash gives
//! longest-match behavior for free: `\leftrightarrow` can never be read as
//! `\left` plus trailing text, and a table hit never fires inside a longer
//! command name.

use std::collections::HashMap;

/// Replaces every known `\name` token via `table`; unknown tokens are kept
/// verbatim for the later stages. With `pad`, replacements are wrapped in
/// spaces, which the speech back-end needs to keep words separated.
pub(crate) fn substitute_known(
    text: &str,
    table: &HashMap<&'static str, &'static str>,
    pad: bool,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let letters = after.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if letters > 0 {
            let name = &after[..letters];
            match table.get(name) {
                Some(rep) => push_replacement(&mut out, rep, pad),
                None => {
                    out.push('\\');
                    out.push_str(name);
                }
            }
            rest = &after[letters..];
        } else if let Some(c) = after.chars().next() {
            // Single-character command such as `\%` or `\,`.
            let len = c.len_utf8();
            match table.get(&after[..len]) {
                Some(rep) => push_replacement(&mut out, rep, pad),
                None => {
                    out.push('\\');
                    out.push(c);
                }
            }
            rest = &after[len..];
        } else {
            out.push('\\');
            rest = "";
        }
    }

    out.push_str(rest);
    out
}

fn push_replacement(out: &mut String, replacement: &str, pad: bool) {
    if pad {
        out.push(' ');
        out.push_str(replacement);
        out.push(' ');
    } else {
        out.push_str(replacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::COMMAND_TO_UNICODE;

    #[test]
    fn replaces_known_commands() {
        assert_eq!(substitute_known(r"\alpha + \beta", &COMMAND_TO_UNICODE, false), "α + β");
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(
            substitute_known(r"\leftrightarrow", &COMMAND_TO_UNICODE, false),
            "↔"
        );
    }

    #[test]
    fn no_hit_inside_longer_names() {
        // `\into` is unknown even though `\in` and `\to` are known.
        assert_eq!(substitute_known(r"\into", &COMMAND_TO_UNICODE, false), r"\into");
    }

    #[test]
    fn single_character_commands() {
        assert_eq!(substitute_known(r"100\%", &COMMAND_TO_UNICODE, false), "100%");
        assert_eq!(substitute_known(r"a\,b", &COMMAND_TO_UNICODE, false), "a b");
    }

    #[test]
    fn unknown_tokens_are_kept() {
        assert_eq!(substitute_known(r"\frac{1}{2}", &COMMAND_TO_UNICODE, false), r"\frac{1}{2}");
    }

    #[test]
    fn trailing_backslash() {
        assert_eq!(substitute_known(r"x\", &COMMAND_TO_UNICODE, false), r"x\");
    }
}
