//! Dictionary-based sentiment scoring.
//!
//! Every token is case-folded and looked up in a [`PolarityLexicon`]; there is
//! no length or stopword filtering, so negators such as "not" and "no" carry
//! their own weight. The verdict depends only on the sign of the total.
//!
//! # Examples
//!
//! ```
//! use textscope::analysis::sentiment::{SentimentScorer, Verdict};
//! use textscope::analysis::token::Token;
//!
//! let scorer = SentimentScorer::default();
//! let tokens = vec![Token::new("I", 0), Token::new("love", 1), Token::new("it", 2)];
//!
//! let result = scorer.score(&tokens);
//! assert_eq!(result.score, 3);
//! assert_eq!(result.verdict, Verdict::Positive);
//! ```

mod lexicon;

use std::fmt;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use lexicon::DEFAULT_POLARITY_LEXICON;

static DEFAULT_LEXICON: LazyLock<Arc<PolarityLexicon>> = LazyLock::new(|| {
    Arc::new(PolarityLexicon::from_entries(
        DEFAULT_POLARITY_LEXICON.iter().copied(),
    ))
});

/// A read-only mapping from lowercase word to signed weight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolarityLexicon {
    weights: AHashMap<String, i32>,
}

impl PolarityLexicon {
    /// The built-in English lexicon.
    pub fn english() -> Arc<PolarityLexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Build a lexicon from `(word, weight)` pairs. Words are lowercased;
    /// a later duplicate overrides an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let weights = entries
            .into_iter()
            .map(|(word, weight)| (word.as_ref().to_lowercase(), weight))
            .collect();
        PolarityLexicon { weights }
    }

    /// Weight of an already case-folded word.
    pub fn weight(&self, folded: &str) -> Option<i32> {
        self.weights.get(folded).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Three-way classification of an aggregated score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Verdict {
    /// Positive above zero, Negative below, Neutral at zero.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Verdict::Positive,
            s if s < 0 => Verdict::Negative,
            _ => Verdict::Neutral,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Positive => "Positive",
            Verdict::Negative => "Negative",
            Verdict::Neutral => "Neutral",
        };
        write!(f, "{label}")
    }
}

/// One scored token occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdownEntry {
    /// Token text in original casing.
    pub word: String,
    /// Lexicon weight.
    pub score: i32,
}

/// Aggregated sentiment of a token sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sum of all breakdown scores.
    pub score: i64,
    pub verdict: Verdict,
    /// One entry per matching token, in source order.
    pub breakdown: Vec<SentimentBreakdownEntry>,
}

/// Scores tokens against a polarity lexicon.
#[derive(Clone, Debug)]
pub struct SentimentScorer {
    lexicon: Arc<PolarityLexicon>,
}

impl SentimentScorer {
    /// Create a scorer over the given lexicon.
    pub fn new(lexicon: Arc<PolarityLexicon>) -> Self {
        SentimentScorer { lexicon }
    }

    /// Get the lexicon used by this scorer.
    pub fn lexicon(&self) -> &Arc<PolarityLexicon> {
        &self.lexicon
    }

    /// Score every token. Zero-weight entries contribute nothing and are
    /// left out of the breakdown.
    pub fn score(&self, tokens: &[Token]) -> SentimentResult {
        let breakdown: Vec<SentimentBreakdownEntry> = tokens
            .iter()
            .filter_map(|token| {
                let weight = self.lexicon.weight(&token.folded())?;
                (weight != 0).then(|| SentimentBreakdownEntry {
                    word: token.text.clone(),
                    score: weight,
                })
            })
            .collect();

        let score: i64 = breakdown.iter().map(|entry| i64::from(entry.score)).sum();

        SentimentResult {
            score,
            verdict: Verdict::from_score(score),
            breakdown,
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(PolarityLexicon::english())
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
    fn test_builtin_lexicon() {
        let lexicon = PolarityLexicon::english();
        assert!(lexicon.len() > 250);
        assert_eq!(lexicon.weight("love"), Some(3));
        assert_eq!(lexicon.weight("hate"), Some(-3));
        assert_eq!(lexicon.weight("not"), Some(-1));
        assert_eq!(lexicon.weight("table"), None);
    }

    #[test]
    fn test_love_and_hate_cancel_out() {
        let result =
            SentimentScorer::default().score(&tokens(&["I", "love", "this", "I", "hate", "that"]));

        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::Neutral);
        assert_eq!(
            result.breakdown,
            vec![
                SentimentBreakdownEntry {
                    word: "love".to_string(),
                    score: 3
                },
                SentimentBreakdownEntry {
                    word: "hate".to_string(),
                    score: -3
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_and_original_case() {
        let result = SentimentScorer::default().score(&tokens(&["Good", "GOOD", "not", "bad"]));

        let words: Vec<&str> = result.breakdown.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Good", "GOOD", "not", "bad"]);
        assert_eq!(result.score, 3 + 3 - 1 - 3);
        assert_eq!(result.verdict, Verdict::Positive);
    }

    #[test]
    fn test_negative_and_empty() {
        let scorer = SentimentScorer::default();

        let result = scorer.score(&tokens(&["awful", "day"]));
        assert_eq!(result.verdict, Verdict::Negative);

        let result = scorer.score(&[]);
        assert_eq!(result, SentimentResult::default());
        assert_eq!(result.verdict.to_string(), "Neutral");
    }

    #[test]
    fn test_injected_lexicon() {
        let lexicon = PolarityLexicon::from_entries([("Zap", 5), ("meh", 0)]);
        let scorer = SentimentScorer::new(Arc::new(lexicon));

        let result = scorer.score(&tokens(&["zap", "meh", "love"]));
        assert_eq!(result.score, 5);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(scorer.lexicon().len(), 2);
    }

    #[test]
    fn test_verdict_from_score() {
        assert_eq!(Verdict::from_score(1), Verdict::Positive);
        assert_eq!(Verdict::from_score(-7), Verdict::Negative);
        assert_eq!(Verdict::from_score(0), Verdict::Neutral);
    }
}
