//! Stop-word lists
//!
//! Lists are plain text, one word per line. Each line is stripped of
//! surrounding whitespace and blank lines are dropped; order is preserved
//! because it decides which alternative wins when stop words overlap.

use crate::error::{CoreError, Result};
use std::path::Path;

macro_rules! embed_stop_words {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_STOP_WORDS: [(&str, &str); 1] =
    [embed_stop_words!("zh", "../configs/stopwords/zh.txt")];

/// Ordered stop-word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: Vec<String>,
}

impl StopWords {
    /// Build from individual entries (each is trimmed; blank entries dropped)
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Parse newline-separated text
    pub fn parse(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Load a UTF-8 stop-word file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let content = String::from_utf8(bytes)?;
        let stop_words = Self::parse(&content);
        log::debug!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.as_ref().display()
        );
        Ok(stop_words)
    }

    /// Embedded list for a language code
    pub fn builtin(code: &str) -> Result<Self> {
        EMBEDDED_STOP_WORDS
            .iter()
            .find(|(lang, _)| *lang == code)
            .map(|(_, content)| Self::parse(content))
            .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
    }

    /// Language codes with an embedded list
    pub fn builtin_languages() -> Vec<&'static str> {
        EMBEDDED_STOP_WORDS.iter().map(|(code, _)| *code).collect()
    }

    /// Entries in their original order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_strips_and_skips_blank_lines() {
        let stop_words = StopWords::parse("  的 \n\n了\r\n 喜欢\n");
        assert_eq!(stop_words.words(), &["的", "了", "喜欢"]);
    }

    #[test]
    fn test_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "喜欢\n吃\n").unwrap();
        let stop_words = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop_words.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let result = StopWords::from_file("/nonexistent/stop_words.txt");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[test]
    fn test_builtin_chinese() {
        let stop_words = StopWords::builtin("zh").unwrap();
        assert!(!stop_words.is_empty());
        assert!(stop_words.words().iter().any(|w| w == "的"));
    }

    #[test]
    fn test_builtin_unsupported() {
        match StopWords::builtin("xx") {
            Err(CoreError::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("Expected UnsupportedLanguage error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_languages() {
        assert_eq!(StopWords::builtin_languages(), vec!["zh"]);
    }

    #[test]
    fn test_collect() {
        let stop_words: StopWords = ["吃", " ", "喝"].into_iter().collect();
        assert_eq!(stop_words.words(), &["吃", "喝"]);
    }
}
