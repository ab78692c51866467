//! URL and number extraction
//!
//! Carves URL-like and number-like substrings out of a line before any
//! punctuation splitting happens, so that `http://exemple.fr/a?b=1` or
//! `1 234,56` survive as single tokens. Everything between the matches is
//! left for the multi-word tokenizer.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Optional scheme or `user@`, a domain ending in a two-letter-dot-two-letter
/// suffix, then an optional path and query.
const URL_PATTERN: &str =
    r"(?i)(?:https?://|\w+@)?[\w%.]*\w\w\.\p{L}\p{L}[\w~/%#]*(?:\?[\w~/%#=&]+)*";

/// Digits interleaved with commas, periods and whitespace, starting and
/// ending on a digit.
const NUMBER_PATTERN: &str = r"\d(?:[\d,.\s]*\d)?";

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is valid"))
}

fn number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

/// A contiguous piece of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The covered text
    pub text: &'a str,
    /// Byte offset of `text` in the line
    pub start: usize,
    /// True when the span is already a complete token (URL or number)
    pub resolved: bool,
}

impl<'a> Span<'a> {
    fn new(text: &'a str, start: usize, resolved: bool) -> Self {
        Self {
            text,
            start,
            resolved,
        }
    }

    /// Byte range of the span in the line
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Split `text` on the matches of `pattern`, matches resolved, gaps not
fn carve<'a>(text: &'a str, base: usize, pattern: &Regex, spans: &mut Vec<Span<'a>>) {
    let mut last_end = 0;

    for m in pattern.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::new(&text[last_end..m.start()], base + last_end, false));
        }
        spans.push(Span::new(m.as_str(), base + m.start(), true));
        last_end = m.end();
    }

    if last_end < text.len() {
        spans.push(Span::new(&text[last_end..], base + last_end, false));
    }
}

/// Split a line into URL, number and remaining spans, in order
///
/// URLs are found first; numbers are then searched only in what is left.
/// Concatenating the texts of the returned spans gives back `text`
/// exactly. Empty spans are never produced.
pub fn extract(text: &str) -> Vec<Span<'_>> {
    let mut urls = Vec::new();
    carve(text, 0, url_pattern(), &mut urls);

    let mut spans = Vec::with_capacity(urls.len());
    for span in urls {
        if span.resolved {
            spans.push(span);
        } else {
            carve(span.text, span.start, number_pattern(), &mut spans);
        }
    }

    spans
}

/// Span texts of [`extract`] without the resolution flags
pub fn extract_texts(text: &str) -> Vec<&str> {
    extract(text).into_iter().map(|span| span.text).collect()
}
