//! Output formatting module

use crate::error::CliError;
use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single tokenized sentence
    fn format_sentence(&mut self, sentence: &str, tokens: &[String]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod conll;
pub mod json;
pub mod text;

pub use conll::ConllFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Empty CoNLL rows, one token per line
    Conll,
    /// Tokens separated by spaces, one sentence per line
    Text,
    /// JSON array of sentences with their tokens
    Json,
}

impl OutputFormat {
    /// Parse a format name as written in a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        let format = <Self as clap::ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))?;
        Ok(format)
    }

    /// Build the formatter for this format
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Conll => Box::new(ConllFormatter::new(writer)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        }
    }
}
