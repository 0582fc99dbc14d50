//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "rakers.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Commented configuration template; every value shown is the default
pub const TEMPLATE: &str = r#"# rakers configuration

[extraction]
# Stop-word file, one entry per line. Takes precedence over builtin_stop_words.
# stop_words = "stopwords.txt"

# Embedded stop-word list (see `rakers list stopwords`)
builtin_stop_words = "zh"

# Word segmenter: "jieba" (embedded Chinese dictionary), "unicode" (UAX #29
# word bounds) or "lexicon"
segmenter = "jieba"

# Dictionary for the lexicon segmenter; jieba-style "word freq tag" lines work
# lexicon = "dict.txt"

# Only stop words with a character length in this range cut sentences
min_stop_word_len = 1
max_stop_word_len = 3

# Tokens of this many characters or fewer are not scored
min_token_len = 0

# Candidates whose score is not positive after pruning: "fail", "clamp" or "discard"
non_positive = "fail"

# Keep only the best N keyphrases per document
# max_keywords = 20

[output]
# Output format: "text", "json" or "markdown"
format = "text"

# Pretty print JSON output
pretty_json = true

# Label output with the source file even for a single input
include_source = false
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to point at your stop words and lexicon");
        println!("2. Validate it:");
        println!("   rakers validate -c {}", self.output.display());
        println!("3. Use it for extraction:");
        println!("   rakers extract -i input.txt -c {}", self.output.display());

        Ok(())
    }
}
