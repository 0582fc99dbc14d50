//! Plain text output formatter

use super::KeywordFormatter;
use anyhow::Result;
use rakers_core::Keyword;
use std::io::Write;
use std::path::Path;

/// Plain text formatter - outputs one `score<TAB>phrase` line per keyphrase
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> KeywordFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: Option<&Path>, keywords: &[Keyword]) -> Result<()> {
        if let Some(path) = source {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {} <==", path.display())?;
        }
        self.documents += 1;

        for (phrase, score) in keywords.iter().map(Keyword::as_pair) {
            writeln!(self.writer, "{score:.4}\t{phrase}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_document(None, &[Keyword::new("机器学习", 2.0794), Keyword::new("猫", 1.0986)])
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "2.0794\t机器学习\n1.0986\t猫\n");
    }

    #[test]
    fn test_headers_between_documents() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_document(Some(Path::new("a.txt")), &[Keyword::new("猫", 1.0)])
                .unwrap();
            formatter
                .format_document(Some(Path::new("b.txt")), &[])
                .unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "==> a.txt <==\n1.0000\t猫\n\n==> b.txt <==\n");
    }
}
