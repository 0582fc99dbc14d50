//! Dictionary-driven segmentation
//!
//! Forward maximum matching against a word list, for text where UAX #29
//! would cut every ideograph apart.

use super::{Segmenter, Tokens};
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks the end of a word
    is_end: bool,
}

/// Word list compiled into a character trie
///
/// Nodes live in one contiguous vector; lookups never allocate.
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Parse dictionary text
    ///
    /// One entry per line. Only the first whitespace-separated field is used,
    /// so jieba-style `word freq tag` dictionaries load as-is. Blank lines and
    /// lines starting with `#` are skipped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .filter_map(|line| line.split_whitespace().next()),
        )
    }

    /// Load a dictionary file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let content = String::from_utf8(bytes)?;
        let lexicon = Self::parse(&content);
        log::debug!(
            "loaded {} lexicon entries from {}",
            lexicon.len(),
            path.as_ref().display()
        );
        Ok(lexicon)
    }

    /// Insert a word
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current_idx = 0u32;

        for ch in word.chars() {
            let node = &self.nodes[current_idx as usize];
            let next_idx = if let Some(&child_idx) = node.children.get(&ch) {
                child_idx
            } else {
                let new_idx = self.nodes.len() as u32;
                self.nodes.push(TrieNode::default());
                self.nodes[current_idx as usize]
                    .children
                    .insert(ch, new_idx);
                new_idx
            };

            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the lexicon holds no words
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Exact membership test
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.longest_prefix(word) == Some(word.len())
    }

    /// Byte length of the longest word that is a prefix of `text`
    pub fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut current_idx = 0u32;
        let mut longest = None;

        for (idx, ch) in text.char_indices() {
            match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&next) => {
                    current_idx = next;
                    if self.nodes[current_idx as usize].is_end {
                        longest = Some(idx + ch.len_utf8());
                    }
                }
                None => break,
            }
        }

        longest
    }
}

/// Forward maximum matching segmenter
///
/// At each position the longer of the longest lexicon word and the UAX #29
/// word segment starting there is taken; when neither applies the token is a
/// single character. Tokens concatenate back to the input.
#[derive(Debug, Clone, Default)]
pub struct LexiconSegmenter {
    lexicon: Lexicon,
}

impl LexiconSegmenter {
    /// Create a segmenter over `lexicon`
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Segmenter for LexiconSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Tokens<'a> {
        let bounds: HashMap<usize, usize> = text
            .split_word_bound_indices()
            .map(|(start, word)| (start, start + word.len()))
            .collect();

        let mut tokens = Tokens::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            let single = rest.chars().next().map_or(rest.len(), char::len_utf8);
            let by_lexicon = self.lexicon.longest_prefix(rest).map_or(0, |len| pos + len);
            let by_bounds = bounds.get(&pos).copied().unwrap_or(0);
            let end = by_lexicon.max(by_bounds).max(pos + single);

            tokens.push(&text[pos..end]);
            pos = end;
        }

        tokens
    }
}
