//! # TextScope
//!
//! Lexical, morphological, stopword, part-of-speech and sentiment analysis of
//! English text.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Regex tokenizer and suffix-stripping stemmer
//! - Configurable stopword filtering and word frequency ranking
//! - Dictionary-based sentiment scoring
//! - Pluggable linguistic annotator for sentences, lemmas and tags
//! - Parallel or sequential pipeline with identical results
//!
//! ## Example
//!
//! ```
//! use textscope::prelude::*;
//!
//! let pipeline = AnalysisPipeline::new().unwrap();
//! let result = pipeline.analyze("The cats were happy and running.").unwrap();
//!
//! assert!(result.has_data);
//! assert_eq!(result.lexical.word_count, 6);
//! assert_eq!(result.sentiment.verdict, Verdict::Positive);
//! ```

pub mod analysis;
pub mod annotation;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;

pub mod prelude {
    pub use crate::analysis::{
        FrequencyEntry, PolarityLexicon, SentimentResult, StemPair, Stemmer, StopwordResult,
        StopwordSet, Token, Tokenizer, Verdict,
    };
    pub use crate::annotation::{Annotation, Annotator, LemmaPair, PosTagEntry, Term};
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Result, TextScopeError};
    pub use crate::pipeline::{AnalysisPipeline, AnalysisResult, AnalysisView, LexicalStats};
    pub use crate::store::StopwordStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
