//! JSON output formatter

use super::KeywordFormatter;
use anyhow::Result;
use rakers_core::Keyword;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentKeywords>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentKeywords {
    /// Source file, when requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    /// Ranked keyphrases, best first
    pub keywords: Vec<Keyword>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> KeywordFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: Option<&Path>, keywords: &[Keyword]) -> Result<()> {
        self.documents.push(DocumentKeywords {
            source: source.map(|path| path.display().to_string()),
            keywords: keywords.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
