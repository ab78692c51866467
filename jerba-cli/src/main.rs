//! Jerba command-line entry point

use clap::Parser;
use jerba_cli::commands::Commands;

/// Tokenize French text into empty CoNLL files for dependency parsing
#[derive(Debug, Parser)]
#[command(name = "jerba", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
