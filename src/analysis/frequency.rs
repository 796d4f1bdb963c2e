//! Word frequency ranking.
//!
//! Counts case-folded content words and returns the most frequent ones.
//! Ties keep the order in which the words first appeared in the source.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::stop::StopwordSet;
use crate::analysis::token::Token;

/// Number of entries returned by default.
pub const DEFAULT_TOP_N: usize = 10;

/// Minimum word length (in characters) counted by default.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// A word and how often it occurs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Lowercase word.
    pub word: String,
    /// Number of occurrences, at least 1.
    pub count: usize,
}

/// Ranks case-folded, stopword-filtered tokens by occurrence count.
#[derive(Clone, Debug)]
pub struct FrequencyAnalyzer {
    stop_words: Arc<StopwordSet>,
    top_n: usize,
    min_length: usize,
}

impl FrequencyAnalyzer {
    /// Create an analyzer returning the top 10 words of three or more characters.
    pub fn new(stop_words: Arc<StopwordSet>) -> Self {
        FrequencyAnalyzer {
            stop_words,
            top_n: DEFAULT_TOP_N,
            min_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    /// Set the maximum number of entries returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the minimum word length in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Maximum number of entries returned.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Length is measured on the word as written; folding may change it.
    fn qualifies(&self, token: &Token, folded: &str) -> bool {
        token.char_len() >= self.min_length && !self.stop_words.contains(folded)
    }

    /// Count every qualifying word, in first-occurrence order.
    pub fn count(&self, tokens: &[Token]) -> Vec<FrequencyEntry> {
        let mut index: AHashMap<String, usize> = AHashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();

        for token in tokens {
            let folded = token.folded();
            if !self.qualifies(token, &folded) {
                continue;
            }
            match index.get(&folded) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(folded.clone(), entries.len());
                    entries.push(FrequencyEntry {
                        word: folded,
                        count: 1,
                    });
                }
            }
        }

        entries
    }

    /// The `top_n` most frequent words, count descending, ties by first occurrence.
    pub fn top_words(&self, tokens: &[Token]) -> Vec<FrequencyEntry> {
        let mut entries = self.count(tokens);
        // sort_by is stable, so equal counts keep insertion order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(self.top_n);
        entries
    }
}
