//! Adapter between the pipeline and an [`Annotator`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Annotation, Annotator, RuleBasedAnnotator, TagSet};
use crate::error::{Result, TextScopeError};

/// A term paired with its lemma.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaPair {
    pub original: String,
    pub root: String,
}

/// A term with its grammatical labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTagEntry {
    pub text: String,
    pub tags: TagSet,
}

/// What the pipeline takes from an annotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationOutput {
    pub sentence_count: usize,
    pub lemmas: Vec<LemmaPair>,
    pub pos: Vec<PosTagEntry>,
}

/// Calls the annotator once per text and repackages its terms.
///
/// The adapter performs no linguistic work of its own. Errors, panics and
/// malformed output from the annotator all surface as
/// [`TextScopeError::AnnotationUnavailable`].
///
/// Panics are caught with [`std::panic::catch_unwind`], so two limits apply.
/// The process panic hook still runs first and by default prints the panic
/// message to stderr. A build with `panic = "abort"` terminates the process
/// instead of returning an error.
#[derive(Clone)]
pub struct LinguisticAnnotationAdapter {
    annotator: Arc<dyn Annotator>,
}

impl LinguisticAnnotationAdapter {
    /// Wrap an annotator.
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        LinguisticAnnotationAdapter { annotator }
    }

    /// Name of the wrapped annotator.
    pub fn annotator_name(&self) -> &'static str {
        self.annotator.name()
    }

    /// Annotate `text` and derive sentence count, lemmas and tags.
    pub fn annotate(&self, text: &str) -> Result<AnnotationOutput> {
        let name = self.annotator.name();
        let annotation = panic::catch_unwind(AssertUnwindSafe(|| self.annotator.annotate(text)))
            .map_err(|_| {
                TextScopeError::annotation_unavailable(format!("annotator '{name}' panicked"))
            })?
            .map_err(|e| match e {
                TextScopeError::AnnotationUnavailable(_) => e,
                other => TextScopeError::annotation_unavailable(format!("{name}: {other}")),
            })?;

        validate(name, &annotation)?;
        debug!(
            "annotator '{name}' reported {} sentences, {} terms",
            annotation.sentence_count,
            annotation.terms.len()
        );

        Ok(repackage(annotation))
    }
}

fn validate(name: &str, annotation: &Annotation) -> Result<()> {
    if annotation.sentence_count == 0 && annotation.terms.iter().any(|t| !t.is_blank()) {
        warn!("annotator '{name}' returned terms without any sentence");
        return Err(TextScopeError::annotation_unavailable(format!(
            "{name}: {} terms reported outside of any sentence",
            annotation.terms.len()
        )));
    }
    Ok(())
}

fn repackage(annotation: Annotation) -> AnnotationOutput {
    let mut lemmas = Vec::with_capacity(annotation.terms.len());
    let mut pos = Vec::with_capacity(annotation.terms.len());

    for term in annotation.terms {
        if !term.is_blank() {
            let root = term
                .root
                .as_deref()
                .filter(|r| !r.is_empty())
                .or(Some(term.normal.as_str()).filter(|n| !n.is_empty()))
                .unwrap_or(term.text.as_str())
                .to_string();
            lemmas.push(LemmaPair {
                original: term.text.clone(),
                root,
            });
        }
        pos.push(PosTagEntry {
            text: term.text,
            tags: term.tags,
        });
    }

    AnnotationOutput {
        sentence_count: annotation.sentence_count,
        lemmas,
        pos,
    }
}

impl Default for LinguisticAnnotationAdapter {
    fn default() -> Self {
        Self::new(Arc::new(RuleBasedAnnotator::new()))
    }
}

impl std::fmt::Debug for LinguisticAnnotationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticAnnotationAdapter")
            .field("annotator", &self.annotator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Term;

    struct FixedAnnotator(Annotation);

    impl Annotator for FixedAnnotator {
        fn annotate(&self, _text: &str) -> Result<Annotation> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingAnnotator;

    impl Annotator for FailingAnnotator {
        fn annotate(&self, _text: &str) -> Result<Annotation> {
            Err(TextScopeError::other("connection refused"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct PanickingAnnotator;

    impl Annotator for PanickingAnnotator {
        fn annotate(&self, _text: &str) -> Result<Annotation> {
            panic!("tagger crashed")
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    fn adapter(annotation: Annotation) -> LinguisticAnnotationAdapter {
        LinguisticAnnotationAdapter::new(Arc::new(FixedAnnotator(annotation)))
    }

    #[test]
    fn test_root_fallbacks() {
        let output = adapter(Annotation {
            sentence_count: 1,
            terms: vec![
                Term::new("Running", "running").with_root("run"),
                Term::new("Fast", "fast"),
                Term::new("X", "").with_root(""),
            ],
        })
        .annotate("Running Fast X")
        .unwrap();

        assert_eq!(output.sentence_count, 1);
        assert_eq!(
            output.lemmas,
            vec![
                LemmaPair {
                    original: "Running".to_string(),
                    root: "run".to_string()
                },
                LemmaPair {
                    original: "Fast".to_string(),
                    root: "fast".to_string()
                },
                LemmaPair {
                    original: "X".to_string(),
                    root: "X".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_blank_terms_skip_lemmas_but_keep_tags() {
        let output = adapter(Annotation {
            sentence_count: 1,
            terms: vec![
                Term::new("don't", "do").with_root("do").with_tag("Verb"),
                Term::new("", "not").with_tag("Adverb"),
            ],
        })
        .annotate("don't")
        .unwrap();

        assert_eq!(output.lemmas.len(), 1);
        assert_eq!(output.pos.len(), 2);
        assert_eq!(output.pos[1].text, "");
        assert!(output.pos[1].tags.contains("Adverb"));
    }

    #[test]
    fn test_failure_is_annotation_unavailable() {
        let adapter = LinguisticAnnotationAdapter::new(Arc::new(FailingAnnotator));
        let err = adapter.annotate("hello").unwrap_err();

        assert!(err.is_annotation_unavailable());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_panic_is_annotation_unavailable() {
        let adapter = LinguisticAnnotationAdapter::new(Arc::new(PanickingAnnotator));
        let err = adapter.annotate("hello").unwrap_err();

        assert!(err.is_annotation_unavailable());
    }

    #[test]
    fn test_malformed_annotation() {
        let err = adapter(Annotation {
            sentence_count: 0,
            terms: vec![Term::new("word", "word")],
        })
        .annotate("word")
        .unwrap_err();

        assert!(err.is_annotation_unavailable());
    }

    #[test]
    fn test_default_uses_rule_based() {
        let adapter = LinguisticAnnotationAdapter::default();
        assert_eq!(adapter.annotator_name(), "rule_based");
        assert_eq!(
            format!("{adapter:?}"),
            "LinguisticAnnotationAdapter { annotator: \"rule_based\" }"
        );
    }
}
