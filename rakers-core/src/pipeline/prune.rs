//! Boundary pruning and log transform
//!
//! A candidate whose first (or last) token is a single character, while it
//! has more than one token, loses that character. The score then drops by
//! the score of the token that sits at the trimmed edge afterwards, i.e. the
//! neighbour of the removed character, not the removed character itself.
//! The leading edge is handled first and the trailing edge is checked on the
//! already-trimmed phrase.

use super::aggregate::lookup;
use super::scoring::{phrase_tokens, WordScores};
use crate::config::NonPositivePolicy;
use crate::error::{CoreError, Result};
use crate::keyword::Keyword;
use crate::segmenter::{char_len, Segmenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
}

fn edge_token<'a>(tokens: &[&'a str], edge: Edge) -> Option<&'a str> {
    match edge {
        Edge::Leading => tokens.first().copied(),
        Edge::Trailing => tokens.last().copied(),
    }
}

fn trim_edge(
    keyword: &mut Keyword,
    edge: Edge,
    scores: &WordScores,
    segmenter: &dyn Segmenter,
    min_token_len: usize,
) -> Result<()> {
    let trim = {
        let tokens = phrase_tokens(segmenter, &keyword.phrase, min_token_len);
        tokens.len() > 1 && edge_token(&tokens, edge).is_some_and(|t| char_len(t) == 1)
    };
    if !trim {
        return Ok(());
    }

    match edge {
        Edge::Leading => {
            keyword.phrase.remove(0);
        }
        Edge::Trailing => {
            keyword.phrase.pop();
        }
    }

    let tokens = phrase_tokens(segmenter, &keyword.phrase, min_token_len);
    if let Some(token) = edge_token(&tokens, edge) {
        let penalty = lookup(scores, token, &keyword.phrase)?;
        keyword.score -= penalty;
    }

    Ok(())
}

fn log_transform(mut keyword: Keyword, policy: NonPositivePolicy) -> Result<Option<Keyword>> {
    if keyword.score > 0.0 {
        keyword.score = keyword.score.ln();
        return Ok(Some(keyword));
    }

    match policy {
        NonPositivePolicy::Fail => Err(CoreError::NonPositiveScore {
            phrase: keyword.phrase,
            score: keyword.score,
        }),
        NonPositivePolicy::Clamp => {
            log::debug!("clamping score {} of '{}'", keyword.score, keyword.phrase);
            keyword.score = f64::MIN_POSITIVE.ln();
            Ok(Some(keyword))
        }
        NonPositivePolicy::Discard => {
            log::debug!("discarding '{}' with score {}", keyword.phrase, keyword.score);
            Ok(None)
        }
    }
}

/// Trim single-character edge tokens, then replace each score by its natural log
pub fn prune_candidates(
    candidates: Vec<Keyword>,
    scores: &WordScores,
    segmenter: &dyn Segmenter,
    min_token_len: usize,
    policy: NonPositivePolicy,
) -> Result<Vec<Keyword>> {
    let mut pruned = Vec::with_capacity(candidates.len());

    for mut keyword in candidates {
        trim_edge(&mut keyword, Edge::Leading, scores, segmenter, min_token_len)?;
        trim_edge(&mut keyword, Edge::Trailing, scores, segmenter, min_token_len)?;

        if let Some(keyword) = log_transform(keyword, policy)? {
            pruned.push(keyword);
        }
    }

    Ok(pruned)
}
