use super::{Segmenter, Tokens};
use crate::error::{CoreError, Result};
use jieba_rs::Jieba;
use std::io::BufRead;
use std::sync::{Arc, OnceLock};

static DEFAULT_JIEBA: OnceLock<Arc<Jieba>> = OnceLock::new();

fn default_jieba() -> Arc<Jieba> {
    DEFAULT_JIEBA
        .get_or_init(|| {
            log::debug!("Loading embedded jieba dictionary");
            Arc::new(Jieba::new())
        })
        .clone()
}

/// Chinese word segmenter backed by the jieba dictionary
///
/// By default only the dictionary route is used: the most probable split of
/// each run of Han text into dictionary words. That route is stable under
/// removing a single character from either end of a phrase, so a trimmed
/// phrase re-segments into tokens that were already scored. The HMM pass for
/// unknown words can be switched on with [`JiebaSegmenter::with_hmm`].
///
/// The embedded dictionary is loaded once per process and shared by every
/// segmenter built with [`JiebaSegmenter::new`].
#[derive(Clone)]
pub struct JiebaSegmenter {
    jieba: Arc<Jieba>,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Segmenter over the embedded jieba dictionary
    pub fn new() -> Self {
        Self {
            jieba: default_jieba(),
            hmm: false,
        }
    }

    /// Segmenter over a custom dictionary in jieba format (`word freq [tag]`)
    pub fn with_dictionary<R: BufRead>(dictionary: &mut R) -> Result<Self> {
        let jieba = Jieba::with_dict(dictionary)
            .map_err(|e| CoreError::Configuration(format!("invalid jieba dictionary: {e}")))?;
        Ok(Self {
            jieba: Arc::new(jieba),
            hmm: false,
        })
    }

    /// Enable or disable HMM recognition of words missing from the dictionary
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    /// Whether the HMM pass is enabled
    pub fn hmm(&self) -> bool {
        self.hmm
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        self.jieba.cut(text, self.hmm).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_words_survive() {
        let tokens = JiebaSegmenter::new().segment("机器学习是人工智能的核心领域");
        assert_eq!(
            tokens.as_slice(),
            &["机器", "学习", "是", "人工智能", "的", "核心", "领域"]
        );
    }

    #[test]
    fn test_dictionary_route_without_hmm() {
        let tokens = JiebaSegmenter::new().segment("小明硕士毕业于中国科学院计算所");
        assert_eq!(
            tokens.as_slice(),
            &["小", "明", "硕士", "毕业", "于", "中国科学院", "计算所"]
        );
    }

    #[test]
    fn test_latin_words_and_spaces() {
        let tokens = JiebaSegmenter::new().segment("cats AND dogs");
        assert_eq!(tokens.as_slice(), &["cats", " ", "AND", " ", "dogs"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(JiebaSegmenter::new().segment("").is_empty());
    }

    #[test]
    fn test_tokens_cover_input() {
        let text = "深度学习 2024 版本，很重要";
        let tokens = JiebaSegmenter::new().segment(text);
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_custom_dictionary() {
        let mut dictionary = "核心领域 100 n\n机器 10\n".as_bytes();
        let segmenter = JiebaSegmenter::with_dictionary(&mut dictionary).unwrap();
        let tokens = segmenter.segment("机器核心领域");
        assert_eq!(tokens.as_slice(), &["机器", "核心领域"]);
    }

    #[test]
    fn test_invalid_dictionary() {
        let mut dictionary = "机器 many\n".as_bytes();
        assert!(matches!(
            JiebaSegmenter::with_dictionary(&mut dictionary),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_hmm_toggle() {
        let segmenter = JiebaSegmenter::new().with_hmm(true);
        assert!(segmenter.hmm());
        assert!(!JiebaSegmenter::default().hmm());
    }
}
