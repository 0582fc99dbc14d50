//! Markdown output formatter

use super::KeywordFormatter;
use anyhow::Result;
use rakers_core::Keyword;
use std::io::Write;
use std::path::Path;

/// Markdown formatter - outputs keyphrases as a numbered list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    keyword_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            keyword_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> KeywordFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: Option<&Path>, keywords: &[Keyword]) -> Result<()> {
        if let Some(path) = source {
            writeln!(self.writer, "## {}", path.display())?;
            writeln!(self.writer)?;
        }

        for (rank, (phrase, score)) in keywords.iter().map(Keyword::as_pair).enumerate() {
            writeln!(self.writer, "{}. **{phrase}** ({score:.4})", rank + 1)?;
        }
        if source.is_some() {
            writeln!(self.writer)?;
        }

        self.keyword_count += keywords.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total keyphrases: {}*", self.keyword_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
