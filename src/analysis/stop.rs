//! Stopword dictionary and stop filter.
//!
//! The [`StopwordSet`] is the base English dictionary, optionally merged with
//! custom words supplied by a [`StopwordStore`](crate::store::StopwordStore)
//! snapshot or by configuration. The [`StopFilter`] partitions a token
//! sequence into removed and retained tokens without changing their casing
//! or order.
//!
//! # Examples
//!
//! ```
//! use textscope::analysis::stop::{StopFilter, StopwordSet};
//! use textscope::analysis::token::Token;
//!
//! let filter = StopFilter::new(StopwordSet::english());
//! let tokens = vec![Token::new("The", 0), Token::new("quick", 1), Token::new("fox", 2)];
//!
//! let result = filter.partition(&tokens);
//! assert_eq!(result.removed, vec!["The"]);
//! assert_eq!(result.clean_text, "quick fox");
//! assert_eq!(result.removed_count, 1);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Default English stop words as a set, built once per process.
static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<StopwordSet>> = LazyLock::new(|| {
    Arc::new(StopwordSet::from_words(
        DEFAULT_ENGLISH_STOP_WORDS.iter().copied(),
    ))
});

/// An immutable, case-insensitive stopword dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl StopwordSet {
    /// The base English dictionary.
    pub fn english() -> Arc<StopwordSet> {
        Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET)
    }

    /// Build a set from arbitrary words. Words are trimmed and lowercased;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        StopwordSet { words }
    }

    /// The base English dictionary merged with custom words.
    pub fn with_custom<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopwordSet::english().as_ref().clone();
        set.extend(custom);
        set
    }

    /// Merge more words into this set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().filter_map(|w| normalize_word(w.as_ref())));
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize a dictionary word: trimmed and lowercased, `None` when blank.
pub(crate) fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// The outcome of partitioning a token sequence by stopword membership.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwordResult {
    /// Removed tokens, in original casing and order.
    pub removed: Vec<String>,
    /// Retained tokens joined by single spaces.
    pub clean_text: String,
    /// Always equal to `removed.len()`.
    pub removed_count: usize,
}

/// A filter that separates stop words from content words.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<StopwordSet>,
}

impl StopFilter {
    /// Create a stop filter over the given dictionary.
    pub fn new(stop_words: Arc<StopwordSet>) -> Self {
        StopFilter { stop_words }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the dictionary used by this filter.
    pub fn stop_words(&self) -> &Arc<StopwordSet> {
        &self.stop_words
    }

    /// Classify every token exactly once as removed or retained.
    pub fn partition(&self, tokens: &[Token]) -> StopwordResult {
        let mut removed = Vec::new();
        let mut retained: Vec<&str> = Vec::with_capacity(tokens.len());

        for token in tokens {
            if self.is_stop_word(&token.text) {
                removed.push(token.text.clone());
            } else {
                retained.push(&token.text);
            }
        }

        StopwordResult {
            removed_count: removed.len(),
            removed,
            clean_text: retained.join(" "),
        }
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    #[test]
    fn test_english_dictionary() {
        let set = StopwordSet::english();
        assert!(set.len() > 150);
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("NOT"));
        assert!(set.contains("don't"));
        assert!(!set.contains("love"));
    }

    #[test]
    fn test_partition_preserves_case_and_order() {
        let filter = StopFilter::default();
        let result = filter.partition(&tokens(&["The", "Cat", "and", "THE", "Dog"]));

        assert_eq!(result.removed, vec!["The", "and", "THE"]);
        assert_eq!(result.clean_text, "Cat Dog");
        assert_eq!(result.removed_count, 3);
    }

    #[test]
    fn test_partition_all_removed_or_empty() {
        let filter = StopFilter::default();

        let result = filter.partition(&tokens(&["I", "am"]));
        assert_eq!(result.removed_count, 2);
        assert_eq!(result.clean_text, "");

        let result = filter.partition(&[]);
        assert_eq!(result, StopwordResult::default());
    }

    #[test]
    fn test_custom_words() {
        let set = StopwordSet::with_custom(vec!["  Foo ", "", "bar"]);
        assert!(set.contains("foo"));
        assert!(set.contains("BAR"));
        assert!(set.contains("the"));
        assert_eq!(set.len(), StopwordSet::english().len() + 2);

        let filter = StopFilter::new(Arc::new(set));
        let result = filter.partition(&tokens(&["Foo", "fighters", "the", "bar"]));
        assert_eq!(result.clean_text, "fighters");
    }

    #[test]
    fn test_small_injected_dictionary() {
        let filter = StopFilter::new(Arc::new(StopwordSet::from_words(["x"])));
        assert!(filter.is_stop_word("X"));
        assert!(!filter.is_stop_word("the"));
        assert_eq!(filter.stop_words().len(), 1);
    }
}
