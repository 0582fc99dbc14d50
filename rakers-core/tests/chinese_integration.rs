//! Integration tests for Chinese text with the embedded stop-word list
//!
//! Covers every segmenter: jieba (the default), UAX #29 (one token per Han
//! character) and the lexicon-driven maximum matcher.

use rakers_core::{
    ExtractorConfig, Keyword, KeywordExtractor, Lexicon, LexiconSegmenter, StopWords,
    UnicodeSegmenter,
};

const TEXT: &str = "机器学习是人工智能的核心领域。深度学习是机器学习的重要分支。";

fn phrases(keywords: &[Keyword]) -> Vec<&str> {
    keywords.iter().map(|k| k.phrase.as_str()).collect()
}

fn scores(keywords: &[Keyword]) -> Vec<f64> {
    keywords.iter().map(|k| k.score).collect()
}

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn test_builtin_list_filters_long_entries() {
    let stop_words = StopWords::builtin("zh").unwrap();
    let extractor = KeywordExtractor::new(&stop_words).unwrap();

    // 除此之外, 换句话说, 总而言之, 与此同时 and 相对而言 are four characters long
    assert_eq!(extractor.matcher().dropped_len(), 5);
    assert_eq!(
        extractor.matcher().active_len(),
        stop_words.len() - 5
    );
}

#[cfg(feature = "jieba")]
#[test]
fn test_default_segmentation_keeps_whole_words() {
    let stop_words = StopWords::builtin("zh").unwrap();
    let extractor = KeywordExtractor::new(&stop_words).unwrap();
    let keywords = extractor.extract(TEXT).unwrap();

    // Every word scores 3. 工智 splits into 工 + 智 and loses 工 together
    // with the score of 智; the other two-word phrases are left intact.
    assert_eq!(
        phrases(&keywords),
        vec!["机器学习", "核心领域", "深度学习", "智", "重", "分支"]
    );
    let (six, three) = (6f64.ln(), 3f64.ln());
    assert_all_close(&scores(&keywords), &[six, six, six, three, three, three]);
}

#[test]
fn test_per_character_segmentation_trims_edges() {
    let stop_words = StopWords::builtin("zh").unwrap();
    let extractor =
        KeywordExtractor::with_segmenter(&stop_words, ExtractorConfig::default(), UnicodeSegmenter)
            .unwrap();
    let keywords = extractor.extract(TEXT).unwrap();

    // Candidates: 机器学习 (twice), 工智, 核心领域, 深度学习, 重, 分支.
    // 人, 能 and 要 are stop words and cut inside 人工智能 and 重要.
    assert_eq!(
        phrases(&keywords),
        vec!["器学", "心领", "度学", "智", "重", "支"]
    );
    let (eight, three) = (8f64.ln(), 3f64.ln());
    assert_all_close(&scores(&keywords), &[eight, eight, eight, three, three, three]);
}

#[test]
fn test_lexicon_segmentation_keeps_whole_words() {
    let lexicon = Lexicon::from_words([
        "机器", "学习", "人工", "智能", "核心", "领域", "深度", "重要", "分支", "机器学习",
        "人工智能", "深度学习",
    ]);
    let stop_words = StopWords::builtin("zh").unwrap();
    let extractor = KeywordExtractor::with_segmenter(
        &stop_words,
        ExtractorConfig::default(),
        LexiconSegmenter::new(lexicon),
    )
    .unwrap();
    let keywords = extractor.extract(TEXT).unwrap();

    // 核心领域 is the only multi-token candidate: 核心 + 领域, 3 each
    assert_eq!(
        phrases(&keywords),
        vec!["核心领域", "机器学习", "智", "深度学习", "重", "分支"]
    );
    assert!((keywords[0].score - 6f64.ln()).abs() < 1e-9);
}

#[test]
fn test_lexicon_from_jieba_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    std::fs::write(&path, "# user dictionary\n核心 10 n\n领域 8 n\n").unwrap();

    let lexicon = Lexicon::from_file(&path).unwrap();
    assert_eq!(lexicon.len(), 2);

    let extractor = KeywordExtractor::with_segmenter(
        &StopWords::builtin("zh").unwrap(),
        ExtractorConfig::default(),
        LexiconSegmenter::new(lexicon),
    )
    .unwrap();
    let keywords = extractor.extract("核心领域").unwrap();
    assert_eq!(phrases(&keywords), vec!["核心领域"]);
}

#[test]
fn test_full_width_and_ascii_punctuation_both_split() {
    let stop_words = StopWords::from_lines(["的"]);
    let extractor = KeywordExtractor::new(&stop_words).unwrap();

    let full_width = extractor.extract("猫，狗；鸟：鱼").unwrap();
    let ascii = extractor.extract("猫,狗;鸟:鱼").unwrap();
    assert_eq!(phrases(&full_width), vec!["猫", "狗", "鸟", "鱼"]);
    assert_eq!(full_width, ascii);
}

#[test]
fn test_quotes_and_brackets_split() {
    let stop_words = StopWords::default();
    let extractor = KeywordExtractor::new(&stop_words).unwrap();
    let keywords = extractor.extract("他说“猫”(狗)").unwrap();
    assert_eq!(phrases(&keywords), vec!["说", "猫", "狗"]);
}
