//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::from_file(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        });

        match result {
            Ok(config) => {
                let extraction = &config.extraction;
                println!("✓ Configuration is valid!");
                match (&extraction.stop_words, &extraction.builtin_stop_words) {
                    (Some(path), _) => println!("  Stop words: {}", path.display()),
                    (None, Some(code)) => println!("  Stop words: embedded '{code}'"),
                    (None, None) => println!("  Stop words: embedded default"),
                }
                println!("  Segmenter: {}", extraction.segmenter);
                println!(
                    "  Stop-word length: {}..={}",
                    extraction.settings.min_stop_word_len, extraction.settings.max_stop_word_len
                );
                println!("  Output format: {:?}", config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
