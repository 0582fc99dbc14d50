//! RAKE keyphrase extraction for text without explicit word boundaries
//!
//! Rapid Automatic Keyword Extraction scores candidate phrases by the
//! co-occurrence of their words. This crate targets Chinese-like text: stop
//! words are matched by substring rather than by whitespace tokenization, and
//! words are produced by a pluggable [`Segmenter`].
//!
//! # Architecture
//!
//! - **Pipeline**: pure stages (sentence split, stop-word cut, word scoring,
//!   aggregation, boundary pruning) in [`pipeline`]
//! - **Segmentation**: the [`Segmenter`] trait; jieba dictionary segmentation
//!   by default (feature `jieba`), UAX #29 word bounds, and a
//!   dictionary-driven [`LexiconSegmenter`]
//! - **Extractor**: [`KeywordExtractor`] composes the stages once per document
//!
//! # Example
//!
//! ```rust
//! use rakers_core::{KeywordExtractor, StopWords};
//!
//! let stop_words = StopWords::from_lines(["喜欢", "吃"]);
//! let extractor = KeywordExtractor::new(&stop_words).unwrap();
//!
//! let keywords = extractor.extract("猫喜欢吃鱼。狗喜欢吃肉。").unwrap();
//! let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
//! assert_eq!(phrases, vec!["猫", "鱼", "狗", "肉"]);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod input;
pub mod keyword;
pub mod pipeline;
pub mod segmenter;
pub mod stopwords;

pub use config::{defaults, ExtractorConfig, ExtractorConfigBuilder, NonPositivePolicy};
pub use error::{CoreError, Result};
pub use extractor::KeywordExtractor;
pub use input::Input;
pub use keyword::Keyword;
#[cfg(feature = "jieba")]
pub use segmenter::JiebaSegmenter;
pub use segmenter::{
    default_segmenter, FnSegmenter, Lexicon, LexiconSegmenter, Segmenter, SegmenterKind,
    UnicodeSegmenter,
};
pub use stopwords::StopWords;

/// Extract keyphrases with the default configuration and segmenter
///
/// Builds a throwaway [`KeywordExtractor`]; reuse one when processing many
/// documents with the same stop words.
pub fn extract_keywords(text: &str, stop_words: &StopWords) -> Result<Vec<Keyword>> {
    KeywordExtractor::new(stop_words)?.extract(text)
}
