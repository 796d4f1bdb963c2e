//! The analysis pipeline.
//!
//! [`AnalysisPipeline`] tokenizes a text once, runs the stemmer, stop filter,
//! frequency analyzer and sentiment scorer over the token sequence, asks the
//! annotation adapter for sentences, lemmas and tags, and assembles a single
//! [`AnalysisResult`].
//!
//! The components do not depend on each other. With
//! [`AnalysisConfig::parallel`] set they are fanned out with `rayon::join`;
//! otherwise they run one after the other. Both paths give the same result.
//!
//! # Examples
//!
//! ```
//! use textscope::analysis::sentiment::Verdict;
//! use textscope::pipeline::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new().unwrap();
//! let result = pipeline.analyze("I love this! I hate that.").unwrap();
//!
//! assert!(result.has_data);
//! assert_eq!(result.tokens, vec!["I", "love", "this", "I", "hate", "that"]);
//! assert_eq!(result.lexical.word_count, 6);
//! assert_eq!(result.sentiment.score, 0);
//! assert_eq!(result.sentiment.verdict, Verdict::Neutral);
//! ```

pub mod result;

use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, info};
use serde_json::Value;

use crate::analysis::frequency::{FrequencyAnalyzer, FrequencyEntry};
use crate::analysis::sentiment::{PolarityLexicon, SentimentResult, SentimentScorer};
use crate::analysis::stemmer::{StemPair, Stemmer, SuffixStemmer, stem_tokens};
use crate::analysis::stop::{StopFilter, StopwordResult, StopwordSet};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::annotation::{Annotator, LinguisticAnnotationAdapter, RuleBasedAnnotator};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::store::StopwordStore;

pub use result::{AnalysisResult, AnalysisView, LexicalStats};

/// Outputs of the token-based components.
struct TokenAnalysis {
    stems: Vec<StemPair>,
    stopwords: StopwordResult,
    word_freq: Vec<FrequencyEntry>,
    sentiment: SentimentResult,
}

/// Orchestrates every analysis component over one input text.
///
/// A pipeline holds only read-only state and can be shared between threads.
#[derive(Clone)]
pub struct AnalysisPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
    stop_filter: StopFilter,
    frequency: FrequencyAnalyzer,
    sentiment: SentimentScorer,
    annotation: LinguisticAnnotationAdapter,
    parallel: bool,
}

impl AnalysisPipeline {
    /// Create a pipeline with the default components and configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a pipeline from a configuration, with default components.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Start building a pipeline.
    pub fn builder() -> AnalysisPipelineBuilder {
        AnalysisPipelineBuilder::default()
    }

    /// Whether the components run concurrently.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Analyze `text`.
    ///
    /// Empty or whitespace-only text yields [`AnalysisResult::empty`] without
    /// invoking any component. An annotator failure aborts the whole analysis
    /// with an `AnnotationUnavailable` error; no partial result is returned.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.trim().is_empty() {
            debug!("input has no content, returning empty result");
            return Ok(AnalysisResult::empty());
        }

        let tokens = self.tokenizer.tokenize_to_vec(text)?;
        debug!(
            "tokenizer '{}' produced {} tokens",
            self.tokenizer.name(),
            tokens.len()
        );

        let (token_analysis, annotation) = if self.parallel {
            rayon::join(
                || self.analyze_tokens_parallel(&tokens),
                || self.annotation.annotate(text),
            )
        } else {
            (
                self.analyze_tokens(&tokens),
                self.annotation.annotate(text),
            )
        };
        let annotation = annotation?;

        let distinct: AHashSet<String> = tokens.iter().map(Token::folded).collect();
        let lexical = LexicalStats {
            sentence_count: annotation.sentence_count,
            word_count: tokens.len(),
            char_count: text.chars().count(),
            density: LexicalStats::density_of(distinct.len(), tokens.len()),
            word_freq: token_analysis.word_freq,
        };

        info!(
            "analyzed {} sentences, {} words, sentiment {}",
            lexical.sentence_count, lexical.word_count, token_analysis.sentiment.verdict
        );

        Ok(AnalysisResult {
            has_data: true,
            lexical,
            tokens: tokens.into_iter().map(|t| t.text).collect(),
            lemmas: annotation.lemmas,
            stems: token_analysis.stems,
            stopwords: token_analysis.stopwords,
            pos: annotation.pos,
            sentiment: token_analysis.sentiment,
        })
    }

    /// Analyze `text` and return one facet of the result as JSON.
    pub fn analyze_view(&self, text: &str, view: AnalysisView) -> Result<Value> {
        self.analyze(text)?.view(view)
    }

    fn analyze_tokens(&self, tokens: &[Token]) -> TokenAnalysis {
        TokenAnalysis {
            stems: stem_tokens(self.stemmer.as_ref(), tokens),
            stopwords: self.stop_filter.partition(tokens),
            word_freq: self.frequency.top_words(tokens),
            sentiment: self.sentiment.score(tokens),
        }
    }

    fn analyze_tokens_parallel(&self, tokens: &[Token]) -> TokenAnalysis {
        let ((stems, stopwords), (word_freq, sentiment)) = rayon::join(
            || {
                rayon::join(
                    || stem_tokens(self.stemmer.as_ref(), tokens),
                    || self.stop_filter.partition(tokens),
                )
            },
            || {
                rayon::join(
                    || self.frequency.top_words(tokens),
                    || self.sentiment.score(tokens),
                )
            },
        );

        TokenAnalysis {
            stems,
            stopwords,
            word_freq,
            sentiment,
        }
    }
}

impl std::fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_filter.stop_words().len())
            .field("top_n", &self.frequency.top_n())
            .field("annotator", &self.annotation.annotator_name())
            .field("parallel", &self.parallel)
            .finish()
    }
}

/// Builder for [`AnalysisPipeline`]. Every component not set explicitly
/// falls back to its default.
#[derive(Default)]
pub struct AnalysisPipelineBuilder {
    config: AnalysisConfig,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    stemmer: Option<Arc<dyn Stemmer>>,
    stop_words: Option<Arc<StopwordSet>>,
    lexicon: Option<Arc<PolarityLexicon>>,
    annotator: Option<Arc<dyn Annotator>>,
}

impl AnalysisPipelineBuilder {
    /// Use this configuration.
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom tokenizer instead of one built from `token_pattern`.
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Use a custom stemmer.
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Use this stopword dictionary instead of the base English one.
    pub fn stop_words(mut self, stop_words: Arc<StopwordSet>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Merge a snapshot of the store's words into the base English dictionary.
    ///
    /// Later changes to the store do not affect the built pipeline.
    pub fn stopword_store(self, store: &StopwordStore) -> Self {
        let set = StopwordSet::with_custom(store.snapshot());
        self.stop_words(Arc::new(set))
    }

    /// Use a custom polarity lexicon.
    pub fn lexicon(mut self, lexicon: Arc<PolarityLexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Use a custom annotator instead of the rule-based one.
    pub fn annotator(mut self, annotator: Arc<dyn Annotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    /// Validate the configuration and assemble the pipeline.
    pub fn build(self) -> Result<AnalysisPipeline> {
        let config = self.config;
        config.validate()?;

        let tokenizer = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(RegexTokenizer::with_pattern(&config.token_pattern)?),
        };
        let stemmer = self
            .stemmer
            .unwrap_or_else(|| Arc::new(SuffixStemmer::new()));

        let mut stop_words = self.stop_words.unwrap_or_else(StopwordSet::english);
        if !config.custom_stopwords.is_empty() {
            let mut merged = stop_words.as_ref().clone();
            merged.extend(&config.custom_stopwords);
            stop_words = Arc::new(merged);
        }

        let lexicon = self.lexicon.unwrap_or_else(PolarityLexicon::english);
        let annotator = self
            .annotator
            .unwrap_or_else(|| Arc::new(RuleBasedAnnotator::new()));

        debug!(
            "building pipeline: {} stop words, {} lexicon entries, annotator '{}', parallel={}",
            stop_words.len(),
            lexicon.len(),
            annotator.name(),
            config.parallel
        );

        Ok(AnalysisPipeline {
            tokenizer,
            stemmer,
            stop_filter: StopFilter::new(Arc::clone(&stop_words)),
            frequency: FrequencyAnalyzer::new(stop_words)
                .with_top_n(config.top_n)
                .with_min_length(config.min_word_length),
            sentiment: SentimentScorer::new(lexicon),
            annotation: LinguisticAnnotationAdapter::new(annotator),
            parallel: config.parallel,
        })
    }
}
