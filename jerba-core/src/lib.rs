//! French tokenizer for dependency parsing
//!
//! Splits raw text, one sentence per line, into the tokens expected by a
//! statistical parser. Three things make this harder than splitting on
//! spaces:
//!
//! - punctuation has to be separated from words, except apostrophes, which
//!   stay glued (`d'un`, `aujourd'hui`);
//! - URLs and numbers (`http://exemple.fr/a?b=1`, `1 234,56`) must not be
//!   split at their inner punctuation;
//! - multi-word expressions from a lexicon (`parce que`, `je ne sais quoi`)
//!   become single tokens, longest match first.
//!
//! # Example
//!
//! ```rust
//! use jerba_core::{PrefixIndex, Tokenizer};
//!
//! let index = PrefixIndex::new(["je ne", "je ne sais quoi"]);
//! let tokenizer = Tokenizer::new(&index);
//!
//! let tokens: Vec<String> = tokenizer.tokenize("je ne sais quoi, d'un ami").collect();
//! assert_eq!(tokens, ["je ne sais quoi", ",", "d'un", "ami"]);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod conll;
pub mod error;
pub mod lexicon;
pub mod numurl;
pub mod prefix_index;
pub mod punctuation;
pub mod tokenizer;

// Re-export key types
pub use batch::{BatchConfig, BatchTokenizer, ExecutionMode};
pub use error::{CoreError, Result};
pub use lexicon::{Lexicon, LexiconStats};
pub use numurl::{extract, Span};
pub use prefix_index::PrefixIndex;
pub use punctuation::simple_tokenize;
pub use tokenizer::{tokenize_line, Tokenizer, Tokens};
