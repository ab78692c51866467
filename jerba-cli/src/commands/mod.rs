//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod lexicon;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize sentences into empty CoNLL rows
    Tokenize(tokenize::TokenizeArgs),

    /// Inspect a multi-word lexicon
    Lexicon(lexicon::LexiconArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Lexicon(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let command = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: Some(PathBuf::from("jerba.toml")),
            force: false,
        });

        let debug_str = format!("{:?}", command);
        assert!(debug_str.contains("GenerateConfig"));
        assert!(debug_str.contains("jerba.toml"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(1, false);
        init_logging(3, false);
        init_logging(0, true);
    }
}
