//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use rakers_core::{SegmenterKind, StopWords};

pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract ranked keyphrases from text files
    Extract(extract::ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List embedded stop-word lists
    Stopwords,

    /// List word segmenters
    Segmenters,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, description) in OutputFormat::descriptions() {
                    println!("  {name:<10} {description}");
                }
            }
            ListCommands::Stopwords => {
                println!("Embedded stop-word lists:");
                for code in StopWords::builtin_languages() {
                    let count = StopWords::builtin(code)?.len();
                    println!("  {code:<10} {count} entries");
                }
            }
            ListCommands::Segmenters => {
                println!("Available segmenters:");
                let default = SegmenterKind::default();
                for name in SegmenterKind::names() {
                    let marker = if *name == default.as_str() { " (default)" } else { "" };
                    println!("  {name}{marker}");
                }
            }
        }
        Ok(())
    }
}
