//! Lexicon command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use jerba_core::{Lexicon, PrefixIndex};
use std::path::PathBuf;

/// Arguments for the lexicon command
#[derive(Debug, Args)]
pub struct LexiconArgs {
    /// Folder of .sfplm lexicon files (default: from config, or lexiqueMultiMots)
    #[arg(short, long, value_name = "DIR")]
    pub lexicon: Option<PathBuf>,

    /// Words or expressions to look up
    #[arg(long, value_name = "WORD")]
    pub lookup: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LexiconArgs {
    /// Execute the lexicon command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let folder = self.lexicon.as_ref().unwrap_or(&config.lexicon.folder);

        let lexicon =
            Lexicon::load_folder(folder).map_err(|e| CliError::LexiconError(e.to_string()))?;
        let stats = lexicon.stats().clone();
        let index = lexicon.into_index();

        println!("Lexicon: {}", folder.display());
        println!("  Files:          {}", stats.files);
        println!("  Entries:        {}", stats.entries);
        println!("  Unique entries: {}", index.len());
        println!("  Skipped lines:  {}", stats.skipped_lines);

        for word in &self.lookup {
            println!("{word}: {}", describe(&index, word));
        }

        Ok(())
    }
}

/// How `word` relates to the lexicon
fn describe(index: &PrefixIndex, word: &str) -> String {
    if index.contains(word) {
        return "entry".to_string();
    }
    if index.has_prefix(word) {
        return "prefix of an entry".to_string();
    }
    match index.longest_match(word) {
        Some(len) => format!("starts with entry '{}'", &word[..len]),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_describe() {
        let index = PrefixIndex::new(["je ne", "je ne sais quoi"]);

        assert_eq!(describe(&index, "je ne"), "entry");
        assert_eq!(describe(&index, "je ne sais"), "prefix of an entry");
        assert_eq!(describe(&index, "je ne peux"), "starts with entry 'je ne'");
        assert_eq!(describe(&index, "bonjour"), "not found");
    }

    #[test]
    fn test_execute_on_folder() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("mots.sfplm"),
            "parce que\tparce que\nsans tabulation\n",
        )
        .unwrap();

        let args = LexiconArgs {
            lexicon: Some(temp_dir.path().to_path_buf()),
            lookup: vec!["parce".to_string()],
            config: None,
            verbose: 0,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let args = LexiconArgs {
            lexicon: Some(temp_dir.path().join("absent")),
            lookup: Vec::new(),
            config: None,
            verbose: 0,
        };

        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("lexicon folder not found"));
    }
}
