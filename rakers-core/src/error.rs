//! Error types for keyphrase extraction

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while loading inputs or running the extraction pipeline
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading a document, stop-word list or lexicon failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// Invalid extractor configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No embedded stop-word list for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A candidate token has no entry in the word-score table.
    ///
    /// The table and the candidates were derived from different phrase sets;
    /// this is an internal invariant violation, not a recoverable condition.
    #[error("token '{token}' of phrase '{phrase}' has no word score")]
    UnscoredToken {
        /// The token that was looked up
        token: String,
        /// The candidate phrase containing it
        phrase: String,
    },

    /// A pruned candidate score cannot be log-transformed
    #[error("score {score} of phrase '{phrase}' is not positive")]
    NonPositiveScore {
        /// The pruned phrase
        phrase: String,
        /// Its score before the log transform
        score: f64,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, CoreError>;
