//! File reading utilities

use anyhow::{Context, Result};
use rakers_core::{Input, Lexicon, StopWords};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = Input::from_file(path)
            .read_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Load a stop-word file
    pub fn read_stop_words(path: &Path) -> Result<StopWords> {
        StopWords::from_file(path)
            .with_context(|| format!("Failed to read stop words: {}", path.display()))
    }

    /// Load a lexicon file
    pub fn read_lexicon(path: &Path) -> Result<Lexicon> {
        Lexicon::from_file(path)
            .with_context(|| format!("Failed to read lexicon: {}", path.display()))
    }
}
