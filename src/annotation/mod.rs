//! Linguistic annotation: sentence segmentation, lemmas and grammatical tags.
//!
//! The pipeline does not tag text itself. It talks to an [`Annotator`]
//! through the [`LinguisticAnnotationAdapter`], which repackages the
//! collaborator's terms into lemma pairs and tag entries. The crate bundles
//! one implementation, the [`RuleBasedAnnotator`]; any other tagger can be
//! plugged in by implementing the trait.
//!
//! # Examples
//!
//! ```
//! use textscope::annotation::{Annotator, RuleBasedAnnotator};
//!
//! let annotation = RuleBasedAnnotator::new().annotate("Dogs bark. Cats sleep.").unwrap();
//! assert_eq!(annotation.sentence_count, 2);
//! assert_eq!(annotation.terms[0].text, "Dogs");
//! assert_eq!(annotation.terms[0].root.as_deref(), Some("dog"));
//! ```

pub mod adapter;
pub mod rule_based;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use adapter::{AnnotationOutput, LemmaPair, LinguisticAnnotationAdapter, PosTagEntry};
pub use rule_based::RuleBasedAnnotator;

/// Unordered set of grammatical labels such as "Noun" or "Verb".
///
/// A `BTreeSet` keeps serialized output stable across runs.
pub type TagSet = BTreeSet<String>;

/// One term as reported by an annotator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Display text as it appears in the source. Empty for implicit terms,
    /// such as the "not" hidden inside "don't".
    pub text: String,
    /// Normalized form (lowercase, punctuation stripped).
    pub normal: String,
    /// Best-effort dictionary base form, when the annotator knows one.
    pub root: Option<String>,
    /// Grammatical category labels.
    pub tags: TagSet,
}

impl Term {
    /// Create a term with no root and no tags.
    pub fn new<T: Into<String>, N: Into<String>>(text: T, normal: N) -> Self {
        Term {
            text: text.into(),
            normal: normal.into(),
            root: None,
            tags: TagSet::new(),
        }
    }

    /// Set the root form.
    pub fn with_root<S: Into<String>>(mut self, root: S) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Add a tag.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Check whether the term carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the display text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Everything an annotator reports for one text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Number of sentences found by the annotator's segmenter.
    pub sentence_count: usize,
    /// Terms in source order.
    pub terms: Vec<Term>,
}

/// Capability interface of the linguistic annotation collaborator.
///
/// Implementations must be deterministic for a fixed input. Any failure is
/// reported as an error; the adapter turns it into
/// [`TextScopeError::AnnotationUnavailable`](crate::error::TextScopeError::AnnotationUnavailable).
pub trait Annotator: Send + Sync {
    /// Segment and annotate the whole text in one call.
    fn annotate(&self, text: &str) -> Result<Annotation>;

    /// Get the name of this annotator (for logging and diagnostics).
    fn name(&self) -> &'static str;
}
