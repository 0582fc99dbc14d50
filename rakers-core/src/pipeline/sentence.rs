//! Sentence splitting
//!
//! Text is cut at a fixed delimiter set: ASCII and full-width terminal
//! punctuation, separators, quotation marks, tabs, parentheses, backslashes,
//! apostrophes, the en dash, and a hyphen surrounded by whitespace and
//! followed by a space. Matching is on code points, so multi-byte text is
//! never cut mid-character.

use regex::Regex;
use std::sync::OnceLock;

const SENTENCE_DELIMITERS: &str = r#"[.、。!！?？,，;；:：“”\t\\"()'’–]|\s-\s "#;

static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();

fn delimiter_regex() -> &'static Regex {
    DELIMITER_REGEX.get_or_init(|| {
        Regex::new(SENTENCE_DELIMITERS).expect("sentence delimiter pattern is valid")
    })
}

/// Split text into sentence spans
///
/// Adjacent delimiters yield empty spans; they are kept so that callers see
/// every span the delimiters define. Empty text yields one empty span.
pub fn split_sentences(text: &str) -> Vec<&str> {
    delimiter_regex().split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_terminators() {
        let sentences = split_sentences("猫喜欢吃鱼。狗喜欢吃肉！鸟呢？");
        assert_eq!(sentences, vec!["猫喜欢吃鱼", "狗喜欢吃肉", "鸟呢", ""]);
    }

    #[test]
    fn test_separators_and_quotes() {
        let sentences = split_sentences("甲，乙；丙：“丁”");
        assert_eq!(sentences, vec!["甲", "乙", "丙", "", "丁", ""]);
    }

    #[test]
    fn test_enumeration_comma() {
        assert_eq!(split_sentences("苹果、香蕉"), vec!["苹果", "香蕉"]);
    }

    #[test]
    fn test_ascii_delimiters() {
        let sentences = split_sentences("a.b!c?d,e;f:g\th\\i\"j(k)l'm’n–o");
        assert_eq!(
            sentences,
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o"]
        );
    }

    #[test]
    fn test_spaced_hyphen_requires_trailing_space() {
        assert_eq!(split_sentences("左 -  右"), vec!["左", "右"]);
        assert_eq!(split_sentences("左 - 右"), vec!["左 - 右"]);
        assert_eq!(split_sentences("well-known"), vec!["well-known"]);
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_spans() {
        assert_eq!(split_sentences("甲。。乙"), vec!["甲", "", "乙"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_text_without_delimiters() {
        assert_eq!(split_sentences("机器学习"), vec!["机器学习"]);
    }
}
