//! Empty CoNLL output formatter

use super::OutputFormatter;
use anyhow::Result;
use jerba_core::conll;
use std::io::{BufWriter, Write};

/// CoNLL formatter - one row per token, blank line after each sentence
pub struct ConllFormatter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> ConllFormatter<W> {
    /// Create a new CoNLL formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for ConllFormatter<W> {
    fn format_sentence(&mut self, _sentence: &str, tokens: &[String]) -> Result<()> {
        conll::write_sentence(&mut self.writer, tokens)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
