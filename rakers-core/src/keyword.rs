//! Scored keyphrase

/// A candidate keyphrase and its score
///
/// Created with a raw additive score during aggregation, trimmed and
/// log-transformed by pruning, then only read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyword {
    /// Phrase text
    pub phrase: String,
    /// Score; higher ranks first
    pub score: f64,
}

impl Keyword {
    /// Create a new keyword
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }

    /// Borrow as a `(phrase, score)` pair
    pub fn as_pair(&self) -> (&str, f64) {
        (&self.phrase, self.score)
    }
}

impl From<Keyword> for (String, f64) {
    fn from(keyword: Keyword) -> Self {
        (keyword.phrase, keyword.score)
    }
}
