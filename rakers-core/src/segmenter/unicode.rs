use super::{Segmenter, Tokens};
use unicode_segmentation::UnicodeSegmentation;

/// UAX #29 word-boundary segmenter
///
/// Han ideographs and hiragana come out one character per token, Latin words
/// and katakana runs stay whole, and whitespace and punctuation become tokens
/// of their own. The tokens always concatenate back to the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        text.split_word_bounds().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_is_split_per_character() {
        let tokens = UnicodeSegmenter.segment("机器学习");
        assert_eq!(tokens.as_slice(), &["机", "器", "学", "习"]);
    }

    #[test]
    fn test_latin_words_and_spaces() {
        let tokens = UnicodeSegmenter.segment("deep learning");
        assert_eq!(tokens.as_slice(), &["deep", " ", "learning"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(UnicodeSegmenter.segment("").is_empty());
    }

    #[test]
    fn test_tokens_cover_input() {
        let text = "Rust语言 2024 版本";
        let tokens = UnicodeSegmenter.segment(text);
        assert_eq!(tokens.concat(), text);
    }
}
