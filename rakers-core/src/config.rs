//! Extractor configuration

use crate::error::{CoreError, Result};

/// Default configuration constants
pub mod defaults {
    /// Shortest stop word (in characters) used for cutting sentences
    pub const MIN_STOP_WORD_LEN: usize = 1;

    /// Longest stop word (in characters) used for cutting sentences
    pub const MAX_STOP_WORD_LEN: usize = 3;

    /// Tokens must be strictly longer than this many characters to be scored
    pub const MIN_TOKEN_LEN: usize = 0;

    /// Floor applied to every word score
    pub const MIN_WORD_SCORE: f64 = 3.0;
}

/// What to do with a candidate whose pruned score is not positive
///
/// The natural log is undefined there, so one of these must be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NonPositivePolicy {
    /// Abort extraction with [`CoreError::NonPositiveScore`]
    #[default]
    Fail,
    /// Clamp the score to `f64::MIN_POSITIVE` before taking the log
    Clamp,
    /// Drop the candidate from the result
    Discard,
}

impl std::str::FromStr for NonPositivePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "clamp" => Ok(Self::Clamp),
            "discard" => Ok(Self::Discard),
            other => Err(CoreError::Configuration(format!(
                "unknown non-positive score policy '{other}'"
            ))),
        }
    }
}

/// Configuration for a [`crate::KeywordExtractor`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorConfig {
    /// Stop words shorter than this (in characters) are ignored
    pub min_stop_word_len: usize,
    /// Stop words longer than this (in characters) are ignored
    pub max_stop_word_len: usize,
    /// Tokens with this many characters or fewer are not scored
    pub min_token_len: usize,
    /// Handling of non-positive scores before the log transform
    pub non_positive: NonPositivePolicy,
    /// Keep only the best `n` keyphrases
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_keywords: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_stop_word_len: defaults::MIN_STOP_WORD_LEN,
            max_stop_word_len: defaults::MAX_STOP_WORD_LEN,
            min_token_len: defaults::MIN_TOKEN_LEN,
            non_positive: NonPositivePolicy::default(),
            max_keywords: None,
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_stop_word_len > self.max_stop_word_len {
            return Err(CoreError::Configuration(format!(
                "min_stop_word_len ({}) must not exceed max_stop_word_len ({})",
                self.min_stop_word_len, self.max_stop_word_len
            )));
        }

        if self.max_keywords == Some(0) {
            return Err(CoreError::Configuration(
                "max_keywords must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CoreError::Configuration(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent builder for [`ExtractorConfig`]
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted stop-word length range (inclusive, in characters)
    pub fn stop_word_len(mut self, min: usize, max: usize) -> Self {
        self.config.min_stop_word_len = min;
        self.config.max_stop_word_len = max;
        self
    }

    /// Set the minimum token length
    pub fn min_token_len(mut self, len: usize) -> Self {
        self.config.min_token_len = len;
        self
    }

    /// Set the non-positive score policy
    pub fn non_positive(mut self, policy: NonPositivePolicy) -> Self {
        self.config.non_positive = policy;
        self
    }

    /// Limit the number of returned keyphrases
    pub fn max_keywords(mut self, count: Option<usize>) -> Self {
        self.config.max_keywords = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ExtractorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.min_stop_word_len, 1);
        assert_eq!(config.max_stop_word_len, 3);
        assert_eq!(config.min_token_len, 0);
        assert_eq!(config.non_positive, NonPositivePolicy::Fail);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_inverted_range() {
        let result = ExtractorConfig::builder().stop_word_len(4, 2).build();
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_builder_rejects_zero_keywords() {
        let result = ExtractorConfig::builder().max_keywords(Some(0)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Clamp".parse::<NonPositivePolicy>().unwrap(),
            NonPositivePolicy::Clamp
        );
        assert_eq!(
            "discard".parse::<NonPositivePolicy>().unwrap(),
            NonPositivePolicy::Discard
        );
        assert!("ignore".parse::<NonPositivePolicy>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_partial() {
        let config = ExtractorConfig::from_toml_str(
            r#"
            max_stop_word_len = 4
            non_positive = "clamp"
            "#,
        )
        .unwrap();
        assert_eq!(config.min_stop_word_len, 1);
        assert_eq!(config.max_stop_word_len, 4);
        assert_eq!(config.non_positive, NonPositivePolicy::Clamp);
        assert_eq!(config.max_keywords, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_invalid() {
        assert!(ExtractorConfig::from_toml_str("min_stop_word_len = \"one\"").is_err());
        assert!(ExtractorConfig::from_toml_str("min_stop_word_len = 5").is_err());
    }
}
