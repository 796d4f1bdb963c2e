use std::sync::Arc;

use textscope::annotation::rule_based::tags;
use textscope::annotation::{Annotation, Annotator, RuleBasedAnnotator, Term};
use textscope::error::{Result, TextScopeError};
use textscope::pipeline::AnalysisPipeline;

/// Tags every whitespace-separated word as a noun and reports one sentence.
struct WhitespaceAnnotator;

impl Annotator for WhitespaceAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation> {
        Ok(Annotation {
            sentence_count: 1,
            terms: text
                .split_whitespace()
                .map(|w| Term::new(w, w.to_lowercase()).with_tag("Noun"))
                .collect(),
        })
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

struct UnavailableAnnotator;

impl Annotator for UnavailableAnnotator {
    fn annotate(&self, _text: &str) -> Result<Annotation> {
        Err(TextScopeError::other("service unreachable"))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

struct SentencelessAnnotator;

impl Annotator for SentencelessAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation> {
        WhitespaceAnnotator.annotate(text).map(|mut annotation| {
            annotation.sentence_count = 0;
            annotation
        })
    }

    fn name(&self) -> &'static str {
        "sentenceless"
    }
}

#[test]
fn test_swapped_annotator() {
    let pipeline = AnalysisPipeline::builder()
        .annotator(Arc::new(WhitespaceAnnotator))
        .build()
        .unwrap();

    let result = pipeline.analyze("Dogs bark. Cats sleep.").unwrap();
    assert_eq!(result.lexical.sentence_count, 1);
    assert_eq!(result.lemmas.len(), 4);
    assert_eq!(result.lemmas[0].original, "Dogs");
    assert_eq!(result.lemmas[0].root, "dogs");
    assert!(result.pos.iter().all(|p| p.tags.contains("Noun")));

    // the token-based analyses do not depend on the annotator
    assert_eq!(result.tokens, vec!["Dogs", "bark", "Cats", "sleep"]);
}

#[test]
fn test_failure_is_distinct_from_empty_input() {
    let pipeline = AnalysisPipeline::builder()
        .annotator(Arc::new(UnavailableAnnotator))
        .build()
        .unwrap();

    let err = pipeline.analyze("Some real text.").unwrap_err();
    assert!(err.is_annotation_unavailable());
    assert!(err.to_string().contains("service unreachable"));

    let empty = pipeline.analyze("  ").unwrap();
    assert!(!empty.has_data);
}

#[test]
fn test_malformed_annotation_is_rejected() {
    let pipeline = AnalysisPipeline::builder()
        .annotator(Arc::new(SentencelessAnnotator))
        .build()
        .unwrap();

    let err = pipeline.analyze("words without sentences").unwrap_err();
    assert!(matches!(err, TextScopeError::AnnotationUnavailable(_)));
}

#[test]
fn test_rule_based_annotation_through_pipeline() {
    let result = AnalysisPipeline::new()
        .unwrap()
        .analyze("The children were running. They didn't stop!")
        .unwrap();

    assert_eq!(result.lexical.sentence_count, 2);

    let root_of = |word: &str| {
        result
            .lemmas
            .iter()
            .find(|l| l.original == word)
            .map(|l| l.root.clone())
    };
    assert_eq!(root_of("children").as_deref(), Some("child"));
    assert_eq!(root_of("were").as_deref(), Some("be"));
    assert_eq!(root_of("running").as_deref(), Some("run"));
    assert_eq!(root_of("didn't").as_deref(), Some("do"));

    // "didn't" yields a visible term and an implicit "not"
    let implicit = result.pos.iter().find(|p| p.text.is_empty()).unwrap();
    assert!(implicit.tags.contains(tags::NEGATIVE));
    assert_eq!(result.lemmas.len() + 1, result.pos.len());
}

#[test]
fn test_rule_based_annotator_is_deterministic() {
    let annotator = RuleBasedAnnotator::new();
    let text = "Alice met Bob in Paris. They walked quickly and talked about 3 books.";

    let first = annotator.annotate(text).unwrap();
    let second = annotator.annotate(text).unwrap();
    assert_eq!(first, second);
    assert!(first.terms.iter().all(|t| !t.tags.is_empty()));
}
