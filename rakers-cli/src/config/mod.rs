//! Configuration module
//!
//! A `rakers.toml` file has two sections. `[extraction]` carries the core
//! extractor settings plus the stop-word and segmenter sources; `[output]`
//! carries formatting defaults. Every key is optional and command-line flags
//! take precedence.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use rakers_core::{ExtractorConfig, SegmenterKind, StopWords};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Extraction-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Stop-word file, one entry per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<PathBuf>,

    /// Embedded stop-word list, used when no file is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builtin_stop_words: Option<String>,

    /// Word segmenter
    pub segmenter: SegmenterKind,

    /// Lexicon file for the lexicon segmenter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Core extractor settings
    #[serde(flatten)]
    pub settings: ExtractorConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Label each document with its source file, even when there is only one
    pub include_source: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
            include_source: false,
        }
    }
}

impl CliConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(format!("invalid TOML: {e}")))?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check settings that can be verified without touching the file system
    pub fn validate(&self) -> Result<()> {
        self.extraction.settings.validate()?;

        if self.extraction.segmenter == SegmenterKind::Lexicon && self.extraction.lexicon.is_none()
        {
            return Err(CliError::ConfigError(
                "segmenter \"lexicon\" requires a lexicon file".to_string(),
            )
            .into());
        }

        if let Some(code) = &self.extraction.builtin_stop_words {
            if !StopWords::builtin_languages().contains(&code.as_str()) {
                return Err(CliError::ConfigError(format!(
                    "no embedded stop-word list for '{code}'"
                ))
                .into());
            }
        }

        Ok(())
    }
}
