//! Multi-word aware tokenization
//!
//! The entry point of the crate. A line is first cut into URL, number and
//! plain spans by [`crate::numurl`]; plain spans are then scanned left to
//! right. At each position the longest lexicon entry starting there wins;
//! when none does, exactly one token of [`simple_tokenize`] is taken and
//! matching is tried again right after it, so an expression may start
//! immediately after an ordinary word.

use crate::numurl;
use crate::prefix_index::PrefixIndex;
use crate::punctuation::simple_tokenize;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Replace typographic apostrophes and collapse whitespace runs to one space
pub fn normalize(line: &str) -> String {
    let line = line.replace('\u{2019}', "'");
    whitespace_run().replace_all(&line, " ").into_owned()
}

/// Tokenizer bound to a lexicon
///
/// Cheap to copy; holds only a reference to the shared index, so one
/// tokenizer can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'d> {
    index: &'d PrefixIndex,
}

impl<'d> Tokenizer<'d> {
    /// Create a tokenizer that recognizes the entries of `index`
    pub fn new(index: &'d PrefixIndex) -> Self {
        Self { index }
    }

    /// The lexicon this tokenizer matches against
    pub fn index(&self) -> &'d PrefixIndex {
        self.index
    }

    /// Lazily tokenize one line
    pub fn tokenize(&self, line: &str) -> Tokens<'d> {
        Tokens::new(self.index, normalize(line))
    }

    /// Tokenize one line into a vector
    pub fn tokenize_to_vec(&self, line: &str) -> Vec<String> {
        self.tokenize(line).collect()
    }
}

impl Tokenizer<'static> {
    /// Tokenizer without a lexicon: URL, number and punctuation rules only
    pub fn simple() -> Self {
        static EMPTY: OnceLock<PrefixIndex> = OnceLock::new();
        Self::new(EMPTY.get_or_init(PrefixIndex::empty))
    }
}

/// Tokenize `line` against `index` in one call
pub fn tokenize_line(line: &str, index: &PrefixIndex) -> Vec<String> {
    Tokenizer::new(index).tokenize_to_vec(line)
}

/// Lazy token stream for a single line
///
/// Owns the normalized line; spans are kept as byte ranges into it.
#[derive(Debug, Clone)]
pub struct Tokens<'d> {
    index: &'d PrefixIndex,
    line: String,
    spans: Vec<(Range<usize>, bool)>,
    span_idx: usize,
    cursor: usize,
}

impl<'d> Tokens<'d> {
    fn new(index: &'d PrefixIndex, line: String) -> Self {
        let spans = numurl::extract(&line)
            .into_iter()
            .map(|span| (span.range(), span.resolved))
            .collect();

        Self {
            index,
            line,
            spans,
            span_idx: 0,
            cursor: 0,
        }
    }

    /// The normalized line being tokenized
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    // Every call either returns None, moves to the next span, or moves the
    // cursor forward by at least one character, so the scan terminates.
    fn next(&mut self) -> Option<String> {
        loop {
            let (range, resolved) = self.spans.get(self.span_idx).cloned()?;

            if resolved {
                self.span_idx += 1;
                self.cursor = range.end;
                return Some(self.line[range].to_string());
            }

            let start = self.cursor.max(range.start);
            let remaining = &self.line[start..range.end];
            let rest = remaining.trim_start();
            if rest.is_empty() {
                self.span_idx += 1;
                self.cursor = range.end;
                continue;
            }

            let rest_start = start + (remaining.len() - rest.len());
            let (token, consumed) = next_token(self.index, rest);
            self.cursor = rest_start + consumed;
            return Some(token);
        }
    }
}

/// Take one token off the front of `rest`, which starts on a non-space
///
/// Returns the token and the number of bytes of `rest` it covers, always
/// at least one character.
fn next_token(index: &PrefixIndex, rest: &str) -> (String, usize) {
    if let Some(len) = index.longest_match(rest) {
        return (rest[..len].to_string(), len);
    }

    if let Some(token) = simple_tokenize(rest).into_iter().next() {
        if rest.starts_with(token.as_str()) {
            let len = token.len();
            return (token, len);
        }
    }

    // Punctuation tokens are substrings of their input, so this only guards
    // forward progress.
    let first = rest.chars().next().map_or(rest.len(), char::len_utf8);
    (rest[..first].to_string(), first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> PrefixIndex {
        PrefixIndex::new(["je ne", "je ne sais quoi", "d'", "parce que", "à cause de"])
    }

    #[test]
    fn test_longest_match_wins() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("je ne sais quoi cette chose", &index),
            vec!["je ne sais quoi", "cette", "chose"]
        );
        assert_eq!(
            tokenize_line("je ne sais pas", &index),
            vec!["je ne", "sais", "pas"]
        );
    }

    #[test]
    fn test_expression_right_after_ordinary_word() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("Il part parce que tu restes.", &index),
            vec!["Il", "part", "parce que", "tu", "restes", "."]
        );
    }

    #[test]
    fn test_expression_at_end_of_line() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("il est parti à cause de", &index),
            vec!["il", "est", "parti", "à cause de"]
        );
    }

    #[test]
    fn test_short_entry_splits_word() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("d'accord", &index),
            vec!["d'", "accord"]
        );
    }

    #[test]
    fn test_apostrophe_without_lexicon_entry() {
        let index = PrefixIndex::empty();

        assert_eq!(tokenize_line("d'un ami", &index), vec!["d'un", "ami"]);
    }

    #[test]
    fn test_typographic_apostrophe_normalized() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("d\u{2019}accord", &index),
            vec!["d'", "accord"]
        );
    }

    #[test]
    fn test_url_and_number_are_single_tokens() {
        let tokenizer = Tokenizer::simple();

        assert_eq!(
            tokenizer.tokenize_to_vec("visit http://example.co.uk/page?x=1 now"),
            vec!["visit", "http://example.co.uk/page?x=1", "now"]
        );
        assert_eq!(
            tokenizer.tokenize_to_vec("I have 1,234.56 dollars"),
            vec!["I", "have", "1,234.56", "dollars"]
        );
    }

    #[test]
    fn test_punctuation_sentence() {
        assert_eq!(
            Tokenizer::simple().tokenize_to_vec("Bonjour, comment ça va ?"),
            vec!["Bonjour", ",", "comment", "ça", "va", "?"]
        );
    }

    #[test]
    fn test_final_single_character_kept() {
        assert_eq!(
            Tokenizer::simple().tokenize_to_vec("Oui ?"),
            vec!["Oui", "?"]
        );
        assert_eq!(Tokenizer::simple().tokenize_to_vec("a"), vec!["a"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        let tokenizer = Tokenizer::simple();

        assert!(tokenizer.tokenize_to_vec("").is_empty());
        assert!(tokenizer.tokenize_to_vec(" \t \n").is_empty());
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("je ne sais quoi\n", &index),
            vec!["je ne sais quoi"]
        );
    }

    #[test]
    fn test_whitespace_collapsed_inside_expressions() {
        let index = lexicon();

        assert_eq!(
            tokenize_line("je\tne   sais quoi", &index),
            vec!["je ne sais quoi"]
        );
    }

    #[test]
    fn test_tokens_is_lazy_iterator() {
        let index = lexicon();
        let tokenizer = Tokenizer::new(&index);

        let mut tokens = tokenizer.tokenize("je ne sais quoi, vraiment");
        assert_eq!(tokens.line(), "je ne sais quoi, vraiment");
        assert_eq!(tokens.next().as_deref(), Some("je ne sais quoi"));
        assert_eq!(tokens.next().as_deref(), Some(","));
        assert_eq!(tokens.next().as_deref(), Some("vraiment"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
