//! Stop-word matching
//!
//! The filtered stop-word list is compiled once into a single
//! case-insensitive alternation. At any position the earliest list entry that
//! matches wins, so list order matters when entries overlap. A `|` already in
//! the text is a phrase separator as well.

use crate::error::{CoreError, Result};
use crate::segmenter::char_len;
use crate::stopwords::StopWords;
use regex::{Regex, RegexBuilder};

/// Phrase separator that cuts even without a stop word
pub const PHRASE_SEPARATOR: char = '|';

/// Compiled matcher over a length-filtered stop-word list
#[derive(Debug, Clone)]
pub struct StopWordMatcher {
    /// `None` when no stop word survived filtering; such a matcher never matches
    regex: Option<Regex>,
    active: usize,
    dropped: usize,
}

impl StopWordMatcher {
    /// Compile the entries whose character length lies in `[min_len, max_len]`
    ///
    /// Entries are matched literally. Entries outside the range are dropped
    /// silently, and an empty result is not an error.
    pub fn build(stop_words: &StopWords, min_len: usize, max_len: usize) -> Result<Self> {
        let active: Vec<String> = stop_words
            .words()
            .iter()
            .filter(|word| {
                let len = char_len(word);
                len > 0 && (min_len..=max_len).contains(&len)
            })
            .map(|word| regex::escape(word))
            .collect();

        let dropped = stop_words.len() - active.len();
        log::debug!(
            "stop-word matcher: {} active, {} outside [{min_len}, {max_len}]",
            active.len(),
            dropped
        );

        let regex = if active.is_empty() {
            None
        } else {
            let pattern = active.join("|");
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .size_limit(1 << 26)
                .build()
                .map_err(|e| {
                    CoreError::Configuration(format!("cannot compile stop words: {e}"))
                })?;
            Some(regex)
        };

        Ok(Self {
            regex,
            active: active.len(),
            dropped,
        })
    }

    /// Number of stop words taking part in matching
    pub fn active_len(&self) -> usize {
        self.active
    }

    /// Number of stop words excluded by the length filter
    pub fn dropped_len(&self) -> usize {
        self.dropped
    }

    /// Whether any stop word occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Cut a sentence into candidate phrases
    ///
    /// The sentence is trimmed, every stop-word match and every
    /// [`PHRASE_SEPARATOR`] becomes a cut point, and empty pieces are
    /// discarded.
    pub fn apply<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let sentence = sentence.trim();

        let pieces: Vec<&'a str> = match &self.regex {
            Some(re) => re.split(sentence).collect(),
            None => vec![sentence],
        };

        pieces
            .into_iter()
            .flat_map(|piece| piece.split(PHRASE_SEPARATOR))
            .filter(|phrase| !phrase.is_empty())
            .collect()
    }
}
