//! Text analysis components for TextScope.
//!
//! This module provides the deterministic building blocks of the analysis
//! pipeline: tokenization, stemming, stopword filtering, frequency ranking
//! and sentiment scoring. Each component is a pure function of its input and
//! of the read-only dictionaries it was constructed with.

pub mod frequency;
pub mod sentiment;
pub mod stemmer;
pub mod stop;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use frequency::{FrequencyAnalyzer, FrequencyEntry};
pub use sentiment::{
    PolarityLexicon, SentimentBreakdownEntry, SentimentResult, SentimentScorer, Verdict,
};
pub use stemmer::{StemPair, Stemmer, SuffixStemmer};
pub use stop::{StopFilter, StopwordResult, StopwordSet};
pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer};
