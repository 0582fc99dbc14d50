//! Word degree/frequency scoring

use crate::config::defaults::MIN_WORD_SCORE;
use crate::segmenter::{char_len, Segmenter, Tokens};
use std::collections::HashMap;

/// Per-token statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStats {
    /// Number of token occurrences across all candidate phrases
    pub frequency: usize,
    /// Co-occurrence degree, including the frequency itself
    pub degree: usize,
    /// `max(3, degree / frequency)`
    pub score: f64,
}

/// Word-score table of one document
///
/// Built once from the candidate phrases and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordScores {
    stats: HashMap<String, WordStats>,
}

impl WordScores {
    /// Score of a token, if it occurred in any candidate phrase
    pub fn score(&self, token: &str) -> Option<f64> {
        self.stats.get(token).map(|s| s.score)
    }

    /// Full statistics of a token
    pub fn stats(&self, token: &str) -> Option<&WordStats> {
        self.stats.get(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate over all tokens and their statistics
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStats)> {
        self.stats.iter().map(|(token, stats)| (token.as_str(), stats))
    }
}

/// Segment a phrase, keeping tokens longer than `min_token_len` characters
pub fn phrase_tokens<'a>(
    segmenter: &dyn Segmenter,
    phrase: &'a str,
    min_token_len: usize,
) -> Tokens<'a> {
    let mut tokens = segmenter.segment(phrase);
    tokens.retain(|token| char_len(*token) > min_token_len);
    tokens
}

/// Build the word-score table from every candidate phrase occurrence
///
/// Each token of a phrase with `n` tokens gains one frequency and `n - 1`
/// degree; afterwards each token's frequency is added to its degree. Scores
/// never fall below 3.
pub fn score_words(
    phrases: &[&str],
    segmenter: &dyn Segmenter,
    min_token_len: usize,
) -> WordScores {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for phrase in phrases {
        let tokens = phrase_tokens(segmenter, phrase, min_token_len);
        let degree = tokens.len().saturating_sub(1);

        for token in tokens {
            let entry = counts.entry(token.to_string()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += degree;
        }
    }

    let stats = counts
        .into_iter()
        .map(|(token, (frequency, degree))| {
            let degree = degree + frequency;
            let score = (degree as f64 / frequency as f64).max(MIN_WORD_SCORE);
            (
                token,
                WordStats {
                    frequency,
                    degree,
                    score,
                },
            )
        })
        .collect();

    WordScores { stats }
}
