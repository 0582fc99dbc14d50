//! Candidate aggregation

use super::scoring::{phrase_tokens, WordScores};
use crate::error::{CoreError, Result};
use crate::keyword::Keyword;
use crate::segmenter::Segmenter;
use std::collections::HashSet;

/// Look up a token score, treating a miss as an invariant violation
pub(crate) fn lookup(scores: &WordScores, token: &str, phrase: &str) -> Result<f64> {
    scores.score(token).ok_or_else(|| CoreError::UnscoredToken {
        token: token.to_string(),
        phrase: phrase.to_string(),
    })
}

/// Sum token scores for each distinct phrase
///
/// One keyword per distinct phrase text, in order of first appearance. The
/// score depends only on the phrase text, so repeats add nothing. `scores`
/// must have been built from the same phrase set.
pub fn aggregate_candidates(
    phrases: &[&str],
    scores: &WordScores,
    segmenter: &dyn Segmenter,
    min_token_len: usize,
) -> Result<Vec<Keyword>> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for &phrase in phrases {
        if !seen.insert(phrase) {
            continue;
        }

        let mut score = 0.0;
        for token in phrase_tokens(segmenter, phrase, min_token_len) {
            score += lookup(scores, token, phrase)?;
        }

        candidates.push(Keyword::new(phrase, score));
    }

    Ok(candidates)
}
