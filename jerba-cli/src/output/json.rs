//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence as read
    pub text: String,
    /// Tokens in order
    pub tokens: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            sentences: Vec::new(),
        }
    }

    /// Enable or disable pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, tokens: &[String]) -> Result<()> {
        self.sentences.push(SentenceData {
            text: sentence.to_string(),
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_written_on_finish() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);

        formatter
            .format_sentence("d'un ami", &["d'un".to_string(), "ami".to_string()])
            .unwrap();
        assert!(formatter.writer.is_empty());

        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output, "[{\"text\":\"d'un ami\",\"tokens\":[\"d'un\",\"ami\"]}]\n");

        let parsed: Vec<SentenceData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0].tokens, vec!["d'un", "ami"]);
    }
}
