//! Configuration for the analysis pipeline.
//!
//! An [`AnalysisConfig`] can be built in code, deserialized from a JSON file
//! with [`AnalysisConfig::from_file`], or left at its defaults. Missing JSON
//! fields take their default value.
//!
//! ```json
//! {
//!   "top_n": 5,
//!   "min_word_length": 4,
//!   "parallel": false,
//!   "custom_stopwords": ["lorem", "ipsum"]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::frequency::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_N};
use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;
use crate::error::{Result, TextScopeError};

/// Configuration for [`AnalysisPipeline`](crate::pipeline::AnalysisPipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of word frequency entries.
    pub top_n: usize,

    /// Minimum length, in characters, of a word counted by the frequency analyzer.
    pub min_word_length: usize,

    /// Run the token analyses and the annotation concurrently.
    pub parallel: bool,

    /// Extra stop words merged into the base English dictionary.
    pub custom_stopwords: Vec<String>,

    /// Regular expression matching one token.
    pub token_pattern: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            parallel: true,
            custom_stopwords: Vec::new(),
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading analysis config from {}", path.display());

        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&content).map_err(|e| {
            TextScopeError::config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of word frequency entries.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the minimum counted word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Enable or disable concurrent execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Add custom stop words.
    pub fn with_custom_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the token pattern.
    pub fn with_token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.token_pattern = pattern.into();
        self
    }

    /// Check every value, reporting the first problem as a `Config` error.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(TextScopeError::config("top_n must be at least 1"));
        }
        if self.min_word_length == 0 {
            return Err(TextScopeError::config("min_word_length must be at least 1"));
        }
        if let Err(e) = Regex::new(&self.token_pattern) {
            return Err(TextScopeError::config(format!(
                "invalid token_pattern '{}': {e}",
                self.token_pattern
            )));
        }
        Ok(())
    }
}
