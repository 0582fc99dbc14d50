//! Word segmentation
//!
//! The extraction pipeline never splits on whitespace itself. Every phrase is
//! handed to a [`Segmenter`], which turns it into a sequence of tokens. Tokens
//! are slices of the phrase, compared by exact text.

#[cfg(feature = "jieba")]
mod jieba;
mod lexicon;
mod unicode;

#[cfg(feature = "jieba")]
pub use jieba::JiebaSegmenter;
pub use lexicon::{Lexicon, LexiconSegmenter};
pub use unicode::UnicodeSegmenter;

use crate::error::{CoreError, Result};
use smallvec::SmallVec;
use std::sync::Arc;

/// Token sequence of one phrase; phrases are short, so this rarely allocates
pub type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Splits text into word tokens
///
/// Implementations must be deterministic and free of side effects: the
/// pipeline re-segments the same phrase several times and relies on getting
/// identical tokens back.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into tokens borrowed from it
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a>;
}

/// Adapts a plain function into a [`Segmenter`]
///
/// ```
/// use rakers_core::segmenter::{FnSegmenter, Segmenter};
///
/// fn by_slash(text: &str) -> Vec<&str> {
///     text.split('/').collect()
/// }
///
/// let tokens = FnSegmenter(by_slash).segment("机器/学习");
/// assert_eq!(tokens.as_slice(), &["机器", "学习"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSegmenter<F>(pub F);

impl<F> Segmenter for FnSegmenter<F>
where
    F: Fn(&str) -> Vec<&str> + Send + Sync,
{
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        SmallVec::from_vec((self.0)(text))
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Arc<S> {
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        (**self).segment(text)
    }
}

/// The segmenter used when none is chosen explicitly
///
/// Jieba dictionary segmentation when the `jieba` feature is enabled,
/// UAX #29 word bounds otherwise.
pub fn default_segmenter() -> Arc<dyn Segmenter> {
    #[cfg(feature = "jieba")]
    {
        Arc::new(JiebaSegmenter::new())
    }

    #[cfg(not(feature = "jieba"))]
    {
        Arc::new(UnicodeSegmenter)
    }
}

/// Segmenter selection for configuration files and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmenterKind {
    /// [`JiebaSegmenter`] over the embedded dictionary
    #[cfg(feature = "jieba")]
    Jieba,
    /// [`UnicodeSegmenter`]
    Unicode,
    /// [`LexiconSegmenter`]; needs a lexicon file
    Lexicon,
}

impl Default for SegmenterKind {
    fn default() -> Self {
        #[cfg(feature = "jieba")]
        {
            Self::Jieba
        }

        #[cfg(not(feature = "jieba"))]
        {
            Self::Unicode
        }
    }
}

impl SegmenterKind {
    /// Configuration name of the segmenter
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "jieba")]
            Self::Jieba => "jieba",
            Self::Unicode => "unicode",
            Self::Lexicon => "lexicon",
        }
    }

    /// Names accepted by [`std::str::FromStr`]
    pub fn names() -> &'static [&'static str] {
        &[
            #[cfg(feature = "jieba")]
            "jieba",
            "unicode",
            "lexicon",
        ]
    }
}

impl std::fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SegmenterKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            #[cfg(feature = "jieba")]
            "jieba" => Ok(Self::Jieba),
            "unicode" => Ok(Self::Unicode),
            "lexicon" => Ok(Self::Lexicon),
            other => Err(CoreError::Configuration(format!("unknown segmenter '{other}'"))),
        }
    }
}

/// Number of characters (not bytes) in a token
#[inline]
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_on_slash(text: &str) -> Vec<&str> {
        text.split('/').collect()
    }

    #[test]
    fn test_fn_segmenter() {
        let tokens = FnSegmenter(split_on_slash).segment("机器/学习");
        assert_eq!(tokens.as_slice(), &["机器", "学习"]);
    }

    #[test]
    fn test_boxed_segmenter() {
        let boxed: Box<dyn Segmenter> = Box::new(UnicodeSegmenter);
        assert_eq!(boxed.segment("猫").as_slice(), &["猫"]);
    }

    #[test]
    fn test_char_len_is_multibyte_safe() {
        assert_eq!(char_len("学习"), 2);
        assert_eq!("学习".len(), 6);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_segmenter_kind_from_str() {
        assert_eq!("Lexicon".parse::<SegmenterKind>().unwrap(), SegmenterKind::Lexicon);
        assert_eq!("unicode".parse::<SegmenterKind>().unwrap(), SegmenterKind::Unicode);
        assert!("icu".parse::<SegmenterKind>().is_err());
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn test_jieba_is_the_default() {
        assert_eq!(SegmenterKind::default(), SegmenterKind::Jieba);
        assert_eq!(SegmenterKind::default().to_string(), "jieba");
        assert_eq!("JIEBA".parse::<SegmenterKind>().unwrap(), SegmenterKind::Jieba);
        assert_eq!(SegmenterKind::names(), &["jieba", "unicode", "lexicon"]);

        let tokens = default_segmenter().segment("深度学习");
        assert_eq!(tokens.as_slice(), &["深度", "学习"]);
    }
}
