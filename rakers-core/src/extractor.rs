//! Keyword extractor: the composed pipeline

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::input::Input;
use crate::keyword::Keyword;
use crate::pipeline::{
    aggregate_candidates, candidate_phrases, prune_candidates, rank, score_words,
    split_sentences, StopWordMatcher,
};
use crate::segmenter::{default_segmenter, Segmenter};
use crate::stopwords::StopWords;
use std::sync::Arc;

/// RAKE keyphrase extractor
///
/// Holds the compiled stop-word matcher, the segmenter and the configuration.
/// It is immutable once built, so one extractor can serve many documents,
/// including from several threads at once.
#[derive(Clone)]
pub struct KeywordExtractor {
    matcher: StopWordMatcher,
    segmenter: Arc<dyn Segmenter>,
    config: ExtractorConfig,
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("matcher", &self.matcher)
            .field("segmenter", &"<dyn Segmenter>")
            .field("config", &self.config)
            .finish()
    }
}

impl KeywordExtractor {
    /// Create an extractor with default configuration and the default segmenter
    ///
    /// See [`default_segmenter`] for which segmenter that is.
    pub fn new(stop_words: &StopWords) -> Result<Self> {
        Self::with_config(stop_words, ExtractorConfig::default())
    }

    /// Create an extractor with custom configuration
    pub fn with_config(stop_words: &StopWords, config: ExtractorConfig) -> Result<Self> {
        Self::build(stop_words, config, default_segmenter())
    }

    /// Create an extractor with a custom segmenter
    pub fn with_segmenter<S>(stop_words: &StopWords, config: ExtractorConfig, segmenter: S) -> Result<Self>
    where
        S: Segmenter + 'static,
    {
        Self::build(stop_words, config, Arc::new(segmenter))
    }

    fn build(
        stop_words: &StopWords,
        config: ExtractorConfig,
        segmenter: Arc<dyn Segmenter>,
    ) -> Result<Self> {
        config.validate()?;
        let matcher =
            StopWordMatcher::build(stop_words, config.min_stop_word_len, config.max_stop_word_len)?;

        Ok(Self {
            matcher,
            segmenter,
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The compiled stop-word matcher
    pub fn matcher(&self) -> &StopWordMatcher {
        &self.matcher
    }

    /// Extract ranked keyphrases from text, best first
    pub fn extract(&self, text: &str) -> Result<Vec<Keyword>> {
        let segmenter = self.segmenter.as_ref();
        let min_token_len = self.config.min_token_len;

        let sentences = split_sentences(text);
        let phrases = candidate_phrases(&sentences, &self.matcher);
        let scores = score_words(&phrases, segmenter, min_token_len);
        let candidates = aggregate_candidates(&phrases, &scores, segmenter, min_token_len)?;
        let mut keywords = prune_candidates(
            candidates,
            &scores,
            segmenter,
            min_token_len,
            self.config.non_positive,
        )?;

        rank(&mut keywords);
        if let Some(limit) = self.config.max_keywords {
            keywords.truncate(limit);
        }

        log::debug!(
            "{} sentences, {} phrases, {} scored tokens, {} keywords",
            sentences.len(),
            phrases.len(),
            scores.len(),
            keywords.len()
        );

        Ok(keywords)
    }

    /// Read an input source and extract from it
    pub fn extract_input(&self, input: Input) -> Result<Vec<Keyword>> {
        let text = input.read_text()?;
        self.extract(&text)
    }

    /// Extract from independent documents
    ///
    /// Documents share no state, so with the `parallel` feature they are
    /// processed on the rayon pool. Results keep the input order.
    pub fn extract_batch<T>(&self, documents: &[T]) -> Vec<Result<Vec<Keyword>>>
    where
        T: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            documents
                .par_iter()
                .map(|doc| self.extract(doc.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.extract(doc.as_ref()))
                .collect()
        }
    }
}
