//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template()?;

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                output.display()
            );
        }

        fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration written to {}", output.display());
        println!();
        println!("Use it with:");
        println!("   jerba tokenize -i input.txt --config {}", output.display());

        Ok(())
    }
}

/// Default configuration, with comments
fn generate_template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        "# Jerba configuration\n\
         #\n\
         # [lexicon]      folder of .sfplm multi-word files, and whether to use it\n\
         # [output]       default format: conll, text or json\n\
         # [performance]  parallel threshold in lines, worker threads (0 = auto)\n\
         \n\
         {body}"
    ))
}
