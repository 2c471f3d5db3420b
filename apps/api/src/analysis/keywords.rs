//! Keyword extraction: lowercase, strip punctuation, drop short tokens and stop-words,
//! rank by frequency.

use std::collections::{HashMap, HashSet};

use crate::analysis::vocabulary::Vocabulary;

pub const MIN_KEYWORD_CHARS: usize = 3;
pub const MAX_KEYWORDS: usize = 50;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    min_chars: usize,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            stop_words: vocabulary.stop_words.iter().copied().collect(),
            min_chars: MIN_KEYWORD_CHARS,
            max_keywords: MAX_KEYWORDS,
        }
    }

    /// Returns up to 50 keywords, most frequent first. Ties keep first-occurrence order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        // (token, count) in first-occurrence order
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() < self.min_chars || self.stop_words.contains(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        // stable sort keeps first occurrence ahead on ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(self.max_keywords)
            .map(|(token, _)| token.to_string())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}
