//! Punctuation and whitespace based splitting
//!
//! This is the fallback used whenever no lexicon entry starts at the current
//! position. It is tuned for French: an apostrophe stays attached to the
//! word before it (`d'un`, `l' homme` → `l'`, `homme`), where English would
//! need `do n't` or `Mike 's`.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Whitespace followed by a run of groupable punctuation and digits.
///
/// No hyphen: compounds stay whole.
const PUNCTUATION_RUN: &str = r#"\s*[.;:, !?()§"'«»\d]+"#;

/// Marks that always stand alone, even inside a punctuation run.
const ISOLATED_MARK: &str = r#"\s*[;:, «»()"]"#;

fn punctuation_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PUNCTUATION_RUN).expect("punctuation pattern is valid"))
}

fn isolated_mark() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISOLATED_MARK).expect("isolated mark pattern is valid"))
}

/// Spacing for one punctuation run found at byte `start` of `text`
///
/// A run beginning with an apostrophe right after a word keeps the
/// apostrophe on that word: no space is inserted before it, and a run of
/// apostrophes only is left glued on both sides (`d'un`).
fn space_run(text: &str, start: usize, run: &str) -> String {
    let after_word = text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace());

    if after_word && run.starts_with('\'') {
        if run.chars().all(|c| c == '\'') {
            run.to_string()
        } else {
            format!("{run} ")
        }
    } else {
        format!(" {run} ")
    }
}

/// Split `text` into tokens on punctuation and whitespace
///
/// Runs of punctuation and digits are kept together (`!?`, `...`, `3.5`),
/// except for `;:,«»()"` which always stand alone. Tokens are always
/// non-empty substrings of `text`.
pub fn simple_tokenize(text: &str) -> Vec<String> {
    let spaced = punctuation_run().replace_all(text, |caps: &Captures<'_>| {
        let run = &caps[0];
        let start = caps.get(0).map_or(0, |m| m.start());
        space_run(text, start, run)
    });

    let spaced = isolated_mark().replace_all(&spaced, " ${0} ");
    let spaced = spaced.replace(" ~", "~");

    spaced.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_punctuation() {
        assert_eq!(
            simple_tokenize("Bonjour, comment ça va ?"),
            vec!["Bonjour", ",", "comment", "ça", "va", "?"]
        );
    }

    #[test]
    fn test_apostrophe_glues_to_word() {
        assert_eq!(simple_tokenize("d'un ami"), vec!["d'un", "ami"]);
        assert_eq!(simple_tokenize("aujourd'hui"), vec!["aujourd'hui"]);
        assert_eq!(simple_tokenize("l' homme"), vec!["l'", "homme"]);
    }

    #[test]
    fn test_no_punctuation_returns_input() {
        assert_eq!(simple_tokenize("bonjour"), vec!["bonjour"]);
        assert_eq!(simple_tokenize("porte-monnaie"), vec!["porte-monnaie"]);
    }

    #[test]
    fn test_grouped_punctuation_stays_together() {
        assert_eq!(simple_tokenize("Quoi !?"), vec!["Quoi", "!?"]);
        assert_eq!(simple_tokenize("Et alors..."), vec!["Et", "alors", "..."]);
    }

    #[test]
    fn test_isolated_marks_split_from_runs() {
        assert_eq!(simple_tokenize("fin.,"), vec!["fin", ".", ","]);
        assert_eq!(
            simple_tokenize("«Bonjour»"),
            vec!["«", "Bonjour", "»"]
        );
        assert_eq!(
            simple_tokenize("(voir ci-dessous)"),
            vec!["(", "voir", "ci-dessous", ")"]
        );
    }

    #[test]
    fn test_digits_grouped_with_punctuation() {
        assert_eq!(simple_tokenize("page 3.5"), vec!["page", "3.5"]);
        assert_eq!(simple_tokenize("x2y"), vec!["x", "2", "y"]);
    }

    #[test]
    fn test_apostrophe_after_punctuation_stands_alone() {
        assert_eq!(simple_tokenize("2 '"), vec!["2", "'"]);
        assert_eq!(simple_tokenize("a)'b"), vec!["a", ")", "'", "b"]);
        assert_eq!(simple_tokenize("'oui'"), vec!["'", "oui'"]);
    }

    #[test]
    fn test_tilde_placeholder_stays_attached() {
        assert_eq!(simple_tokenize("a~b c"), vec!["a~b", "c"]);
    }

    #[test]
    fn test_unbalanced_brackets_are_not_an_error() {
        assert_eq!(simple_tokenize("(oui"), vec!["(", "oui"]);
        assert_eq!(simple_tokenize("non))"), vec!["non", ")", ")"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(simple_tokenize("").is_empty());
        assert!(simple_tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let samples = [
            "Bonjour, comment ça va ?",
            "Il a dit : « non ! » (deux fois).",
            "d'un ami, l'autre... 12,5 % des cas",
            "x ,'y  \"cité\".",
            "b  '-\"1",
            ").  '",
        ];

        for sample in samples {
            let first = simple_tokenize(sample);
            let second = simple_tokenize(&first.join(" "));
            assert_eq!(first, second, "not idempotent for {sample:?}");
        }
    }
}
