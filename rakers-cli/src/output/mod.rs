//! Output formatting module

use anyhow::Result;
use rakers_core::Keyword;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Trait for output formatters
pub trait KeywordFormatter: Send + Sync {
    /// Format the ranked keyphrases of one document
    fn format_document(&mut self, source: Option<&Path>, keywords: &[Keyword]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `score<TAB>phrase` line per keyphrase
    #[default]
    Text,
    /// JSON array of documents with their keyphrases
    Json,
    /// Markdown numbered list per document
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description, for `list formats`
    pub fn descriptions() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Tab-separated score and phrase, one keyphrase per line"),
            ("json", "JSON array of documents with phrase/score pairs"),
            ("markdown", "Numbered Markdown list per document"),
        ]
    }
}

/// Create a formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn KeywordFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
