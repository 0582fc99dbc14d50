//! The RAKE scoring pipeline
//!
//! Five pure stages run in sequence over one document:
//!
//! 1. [`split_sentences`] cuts text at punctuation and quotes
//! 2. [`StopWordMatcher::apply`] cuts sentences at stop words into candidates
//! 3. [`score_words`] builds the word degree/frequency table
//! 4. [`aggregate_candidates`] sums token scores per distinct candidate
//! 5. [`prune_candidates`] trims one-character edges and log-transforms
//!
//! [`rank`] then orders the result.

pub mod aggregate;
pub mod matcher;
pub mod prune;
pub mod scoring;
pub mod sentence;

pub use aggregate::aggregate_candidates;
pub use matcher::{StopWordMatcher, PHRASE_SEPARATOR};
pub use prune::prune_candidates;
pub use scoring::{phrase_tokens, score_words, WordScores, WordStats};
pub use sentence::split_sentences;

use crate::keyword::Keyword;

/// Sort by descending score; equal scores keep their relative order
pub fn rank(keywords: &mut [Keyword]) {
    keywords.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Collect candidate phrases from every sentence, in document order
///
/// Repeated phrases are kept: every occurrence counts towards word scores.
pub fn candidate_phrases<'a>(sentences: &[&'a str], matcher: &StopWordMatcher) -> Vec<&'a str> {
    sentences
        .iter()
        .flat_map(|&sentence| matcher.apply(sentence))
        .collect()
}
