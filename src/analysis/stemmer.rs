//! Stemming algorithms for reducing words to a heuristic stem.
//!
//! The [`SuffixStemmer`] is a deliberately small, non-recursive rule set: a
//! plural reduction step followed by a verb-suffix step, each firing at most
//! once. It is not a Porter stemmer and its output is not guaranteed to be a
//! dictionary word ("running" stems to "runn", "boxes" to "boxe").
//!
//! # Examples
//!
//! ```
//! use textscope::analysis::stemmer::{Stemmer, SuffixStemmer};
//!
//! let stemmer = SuffixStemmer::new();
//! assert_eq!(stemmer.stem("Flies"), "fli");
//! assert_eq!(stemmer.stem("agreed"), "agree");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// A token paired with its stem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemPair {
    /// The token text as it appeared in the source.
    pub original: String,
    /// The lowercase stem.
    pub stem: String,
}

/// Suffix-stripping stemmer with a fixed rule order.
///
/// 1. Lowercase; words shorter than three characters are returned as-is.
/// 2. `sses` → drop 2, else `ies` → drop 2, else `ss` → keep, else `s` → drop 1.
/// 3. On the result of step 2: `eed` → drop 1, else `ed` (length > 3) → drop 2,
///    else `ing` (length > 3) → drop 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer;

impl SuffixStemmer {
    /// Create a new suffix stemmer.
    pub fn new() -> Self {
        SuffixStemmer
    }

    fn reduce_plural(word: &mut String) {
        if word.ends_with("sses") || word.ends_with("ies") {
            drop_suffix(word, 2);
        } else if word.ends_with("ss") {
            // unchanged
        } else if word.ends_with('s') {
            drop_suffix(word, 1);
        }
    }

    fn reduce_verb(word: &mut String) {
        let len = word.chars().count();
        if word.ends_with("eed") {
            drop_suffix(word, 1);
        } else if word.ends_with("ed") && len > 3 {
            drop_suffix(word, 2);
        } else if word.ends_with("ing") && len > 3 {
            drop_suffix(word, 3);
        }
    }
}

/// Drop `n` trailing ASCII bytes. Callers only pass suffixes they matched.
fn drop_suffix(word: &mut String, n: usize) {
    let new_len = word.len() - n;
    word.truncate(new_len);
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let mut stem = word.to_lowercase();

        if stem.chars().count() < 3 {
            return stem;
        }

        Self::reduce_plural(&mut stem);
        Self::reduce_verb(&mut stem);

        stem
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

/// Stem every token, preserving order and cardinality.
pub fn stem_tokens(stemmer: &dyn Stemmer, tokens: &[Token]) -> Vec<StemPair> {
    tokens
        .iter()
        .map(|token| StemPair {
            original: token.text.clone(),
            stem: stemmer.stem(&token.text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_stemmer() {
        let stemmer = SuffixStemmer::new();

        assert_eq!(stemmer.stem("running"), "runn");
        assert_eq!(stemmer.stem("boxes"), "boxe");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("class"), "class");
        assert_eq!(stemmer.stem("cats"), "cat");
    }

    #[test]
    fn test_verb_suffixes() {
        let stemmer = SuffixStemmer::new();

        assert_eq!(stemmer.stem("agreed"), "agree");
        assert_eq!(stemmer.stem("feed"), "fee");
        assert_eq!(stemmer.stem("jumped"), "jump");
        assert_eq!(stemmer.stem("red"), "red");
        assert_eq!(stemmer.stem("sing"), "s");
        assert_eq!(stemmer.stem("ing"), "ing");
    }

    #[test]
    fn test_single_pass() {
        let stemmer = SuffixStemmer::new();

        // "needs" -> "need" (plural) -> "nee" (eed); no further rules fire.
        assert_eq!(stemmer.stem("needs"), "nee");
        // "things" -> "thing" -> "th"
        assert_eq!(stemmer.stem("things"), "th");
        // "ides" -> "ide"; verb step sees "ide" which has no matching suffix.
        assert_eq!(stemmer.stem("ides"), "ide");
    }

    #[test]
    fn test_short_words_are_lowercased_only() {
        let stemmer = SuffixStemmer::new();

        assert_eq!(stemmer.stem("Is"), "is");
        assert_eq!(stemmer.stem("A"), "a");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("HOUSES"), "house");
    }

    #[test]
    fn test_stem_tokens() {
        let tokens = vec![Token::new("Dogs", 0), Token::new("barked", 1)];
        let pairs = stem_tokens(&SuffixStemmer::new(), &tokens);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].original, "Dogs");
        assert_eq!(pairs[0].stem, "dog");
        assert_eq!(pairs[1].stem, "bark");
        assert_eq!(SuffixStemmer::new().name(), "suffix");
    }
}
