//! Result records produced by the analysis pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::frequency::FrequencyEntry;
use crate::analysis::sentiment::SentimentResult;
use crate::analysis::stemmer::StemPair;
use crate::analysis::stop::StopwordResult;
use crate::annotation::{LemmaPair, PosTagEntry};
use crate::error::{Result, TextScopeError};

/// Counts and lexical density of one text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalStats {
    /// Sentences reported by the annotator.
    pub sentence_count: usize,
    /// Number of plain tokens.
    pub word_count: usize,
    /// Number of Unicode scalar values in the raw text.
    pub char_count: usize,
    /// Distinct case-folded tokens per hundred tokens, in `[0, 100]`.
    pub density: f64,
    pub word_freq: Vec<FrequencyEntry>,
}

impl LexicalStats {
    /// Lexical density: distinct words over total words, as a percentage.
    pub fn density_of(distinct: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            distinct as f64 / total as f64 * 100.0
        }
    }
}

/// The complete analysis of one text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `false` only for empty or whitespace-only input.
    pub has_data: bool,
    pub lexical: LexicalStats,
    /// Plain token texts in source order.
    pub tokens: Vec<String>,
    pub lemmas: Vec<LemmaPair>,
    pub stems: Vec<StemPair>,
    pub stopwords: StopwordResult,
    pub pos: Vec<PosTagEntry>,
    pub sentiment: SentimentResult,
}

impl AnalysisResult {
    /// The zeroed result returned for text with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Serialize one facet of the result.
    pub fn view(&self, view: AnalysisView) -> Result<Value> {
        let value = match view {
            AnalysisView::Lexical => serde_json::to_value(&self.lexical)?,
            AnalysisView::Tokenization => serde_json::to_value(&self.tokens)?,
            AnalysisView::Lemmatization => serde_json::to_value(&self.lemmas)?,
            AnalysisView::Stemming => serde_json::to_value(&self.stems)?,
            AnalysisView::Stopwords => serde_json::to_value(&self.stopwords)?,
            AnalysisView::Pos => serde_json::to_value(&self.pos)?,
            AnalysisView::Sentiment => serde_json::to_value(&self.sentiment)?,
        };
        Ok(value)
    }
}

/// One facet of an [`AnalysisResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisView {
    /// Sentence, word and character counts, density and top words
    Lexical,
    /// Plain tokens
    Tokenization,
    /// Lemma pairs from the annotator
    Lemmatization,
    /// Stem pairs
    Stemming,
    /// Removed stop words and clean text
    Stopwords,
    /// Grammatical tags from the annotator
    Pos,
    /// Sentiment score, verdict and breakdown
    Sentiment,
}

impl AnalysisView {
    /// All views, in display order.
    pub const ALL: [AnalysisView; 7] = [
        AnalysisView::Lexical,
        AnalysisView::Tokenization,
        AnalysisView::Lemmatization,
        AnalysisView::Stemming,
        AnalysisView::Stopwords,
        AnalysisView::Pos,
        AnalysisView::Sentiment,
    ];

    /// Lowercase identifier of the view.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisView::Lexical => "lexical",
            AnalysisView::Tokenization => "tokenization",
            AnalysisView::Lemmatization => "lemmatization",
            AnalysisView::Stemming => "stemming",
            AnalysisView::Stopwords => "stopwords",
            AnalysisView::Pos => "pos",
            AnalysisView::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for AnalysisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisView {
    type Err = TextScopeError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        AnalysisView::ALL
            .into_iter()
            .find(|view| view.as_str() == needle)
            .ok_or_else(|| TextScopeError::invalid_argument(format!("unknown view '{s}'")))
    }
}
