//! rakers: RAKE keyphrase extraction from the command line

use anyhow::Result;
use clap::Parser;
use rakers_cli::commands::Commands;

/// Rapid Automatic Keyword Extraction for unsegmented text
#[derive(Debug, Parser)]
#[command(name = "rakers", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
