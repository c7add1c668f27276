use std::collections::HashSet;

use crate::shared::constants::{MAX_KEYWORDS, MIN_KEYWORD_LEN, STOPWORDS};

/// Picks candidate keywords out of a line of transcript text.
///
/// A token qualifies when it is not a stopword and is longer than
/// `min_len` characters. Qualifying tokens are deduplicated keeping their
/// first occurrence, then truncated to `max_keywords`.
#[derive(Clone, Debug)]
pub struct KeywordExtractor {
    stopwords: HashSet<String>,
    min_len: usize,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(min_len: usize, max_keywords: usize) -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
            min_len,
            max_keywords,
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in lowered.split_whitespace() {
            if keywords.len() == self.max_keywords {
                break;
            }
            if self.is_stopword(token) || token.chars().count() <= self.min_len {
                continue;
            }
            if seen.insert(token) {
                keywords.push(token.to_string());
            }
        }

        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(MIN_KEYWORD_LEN, MAX_KEYWORDS)
    }
}

/// Extract up to five keywords from `text` using the default stopwords and
/// minimum length.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::default().extract(text)
}
