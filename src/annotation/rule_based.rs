//! Rule-based English annotator.
//!
//! Sentences and words are found with Unicode text segmentation (UAX #29).
//! Each word is then tagged from a small closed-class lexicon (determiners,
//! pronouns, prepositions, auxiliaries, ...), a list of common open-class
//! words and irregular forms, and finally suffix rules. Contractions are
//! split into a visible term and an implicit one with empty display text,
//! so "don't" becomes `do` + `not`.
//!
//! The tagger looks at one word of left context: a verb-like word right
//! after a determiner, possessive or adjective is read as a noun.

use unicode_segmentation::UnicodeSegmentation;

use super::{Annotation, Annotator, TagSet, Term};
use crate::error::Result;

/// Labels emitted by the rule-based annotator.
pub mod tags {
    pub const NOUN: &str = "Noun";
    pub const SINGULAR: &str = "Singular";
    pub const PLURAL: &str = "Plural";
    pub const PROPER_NOUN: &str = "ProperNoun";
    pub const VERB: &str = "Verb";
    pub const PRESENT_TENSE: &str = "PresentTense";
    pub const PAST_TENSE: &str = "PastTense";
    pub const GERUND: &str = "Gerund";
    pub const COPULA: &str = "Copula";
    pub const AUXILIARY: &str = "Auxiliary";
    pub const MODAL: &str = "Modal";
    pub const ADJECTIVE: &str = "Adjective";
    pub const COMPARATIVE: &str = "Comparative";
    pub const SUPERLATIVE: &str = "Superlative";
    pub const ADVERB: &str = "Adverb";
    pub const NEGATIVE: &str = "Negative";
    pub const PREPOSITION: &str = "Preposition";
    pub const CONJUNCTION: &str = "Conjunction";
    pub const DETERMINER: &str = "Determiner";
    pub const PRONOUN: &str = "Pronoun";
    pub const POSSESSIVE: &str = "Possessive";
    pub const VALUE: &str = "Value";
    pub const CARDINAL: &str = "Cardinal";
    pub const CONTRACTION: &str = "Contraction";
}

use tags::*;

/// Annotator built from segmentation rules and word lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedAnnotator;

impl RuleBasedAnnotator {
    /// Create a new rule-based annotator.
    pub fn new() -> Self {
        RuleBasedAnnotator
    }

    fn annotate_word(&self, word: &str, sentence_start: bool, terms: &mut Vec<Term>) {
        let normal = normalize(word);

        if let Some((base, implicit)) = split_contraction(&normal) {
            let prev = terms.last().map(|t| t.tags.clone()).unwrap_or_default();
            let (mut base_tags, base_root) = tag_word(base, word, sentence_start, &prev);
            base_tags.insert(CONTRACTION.to_string());
            terms.push(build_term(word, base, base_root, base_tags));

            let (mut implicit_tags, implicit_root) =
                tag_word(implicit, implicit, false, &TagSet::new());
            implicit_tags.insert(CONTRACTION.to_string());
            terms.push(build_term("", implicit, implicit_root, implicit_tags));
            return;
        }

        let prev = terms.last().map(|t| t.tags.clone()).unwrap_or_default();
        let (tag_set, root) = tag_word(&normal, word, sentence_start, &prev);
        terms.push(build_term(word, &normal, root, tag_set));
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation> {
        let mut sentence_count = 0;
        let mut terms = Vec::new();

        for sentence in text.unicode_sentences() {
            sentence_count += 1;
            for (i, word) in sentence.unicode_words().enumerate() {
                self.annotate_word(word, i == 0, &mut terms);
            }
        }

        Ok(Annotation {
            sentence_count,
            terms,
        })
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

fn build_term(text: &str, normal: &str, root: Option<String>, tags: TagSet) -> Term {
    Term {
        text: text.to_string(),
        normal: normal.to_string(),
        root,
        tags,
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

fn tag_set(labels: &[&str]) -> TagSet {
    labels.iter().map(|l| l.to_string()).collect()
}

/// Split a normalized contraction into its visible base and implicit word.
fn split_contraction(normal: &str) -> Option<(&str, &str)> {
    if let Some(base) = normal.strip_suffix("n't") {
        let base = match base {
            "ca" => "can",
            "wo" => "will",
            "sha" => "shall",
            "ai" => "is",
            other => other,
        };
        return (!base.is_empty()).then_some((base, "not"));
    }

    const SUFFIXES: &[(&str, &str)] = &[
        ("'ll", "will"),
        ("'re", "are"),
        ("'ve", "have"),
        ("'m", "am"),
        ("'d", "would"),
    ];
    for &(suffix, implicit) in SUFFIXES {
        if let Some(base) = normal.strip_suffix(suffix)
            && !base.is_empty()
        {
            return Some((base, implicit));
        }
    }

    if let Some(base) = normal.strip_suffix("'s") {
        return match base {
            "it" | "he" | "she" | "that" | "there" | "here" | "what" | "where" | "who" | "how" => {
                Some((base, "is"))
            }
            "let" => Some((base, "us")),
            _ => None,
        };
    }

    None
}

/// Tag one normalized word and find its root.
fn tag_word(
    normal: &str,
    text: &str,
    sentence_start: bool,
    prev: &TagSet,
) -> (TagSet, Option<String>) {
    if let Some(result) = closed_class(normal) {
        return result;
    }
    if let Some(result) = irregular(normal) {
        return result;
    }
    if normal.chars().all(|c| c.is_numeric()) || is_number_word(normal) {
        return (tag_set(&[VALUE, CARDINAL]), None);
    }
    if let Some(base) = normal.strip_suffix("'s") {
        return (
            tag_set(&[NOUN, POSSESSIVE, SINGULAR]),
            Some(base.to_string()),
        );
    }

    let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
    if starts_upper && !sentence_start {
        return (tag_set(&[NOUN, PROPER_NOUN, SINGULAR]), None);
    }

    let after_modifier = [DETERMINER, POSSESSIVE, ADJECTIVE]
        .iter()
        .any(|t| prev.contains(*t));

    if is_common_verb(normal) {
        if after_modifier {
            return (tag_set(&[NOUN, SINGULAR]), None);
        }
        return (tag_set(&[VERB, PRESENT_TENSE]), Some(normal.to_string()));
    }
    if is_common_adjective(normal) {
        return (tag_set(&[ADJECTIVE]), None);
    }

    suffix_rules(normal, after_modifier)
}

fn suffix_rules(normal: &str, after_modifier: bool) -> (TagSet, Option<String>) {
    let len = normal.chars().count();

    if len > 4
        && normal.ends_with("ly")
        && !matches!(normal, "family" | "supply" | "reply" | "apply" | "july")
    {
        return (tag_set(&[ADVERB]), None);
    }
    if len > 4 && normal.ends_with("ing") {
        return (tag_set(&[VERB, GERUND]), Some(verb_root(normal, "ing")));
    }
    if len > 3 && normal.ends_with("ed") {
        return (tag_set(&[VERB, PAST_TENSE]), Some(verb_root(normal, "ed")));
    }

    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "hood", "ist",
    ];
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ful", "ous", "ive", "able", "ible", "less", "ish", "ical", "ic", "al", "ary",
    ];

    if NOUN_SUFFIXES.iter().any(|s| normal.ends_with(s)) {
        return (tag_set(&[NOUN, SINGULAR]), None);
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| normal.ends_with(s)) && len > 4 {
        return (tag_set(&[ADJECTIVE]), None);
    }

    if len > 3
        && normal.ends_with('s')
        && !normal.ends_with("ss")
        && !normal.ends_with("us")
        && !normal.ends_with("is")
    {
        let base = singularize(normal);
        if is_common_verb(&base) && !after_modifier {
            return (tag_set(&[VERB, PRESENT_TENSE]), Some(base));
        }
        return (tag_set(&[NOUN, PLURAL]), Some(base));
    }

    (tag_set(&[NOUN, SINGULAR]), None)
}

fn closed_class(normal: &str) -> Option<(TagSet, Option<String>)> {
    let result = match normal {
        "am" | "is" | "are" | "was" | "were" | "be" | "been" | "being" => {
            (tag_set(&[VERB, COPULA]), Some("be".to_string()))
        }
        "do" | "does" | "did" => (tag_set(&[VERB, AUXILIARY]), Some("do".to_string())),
        "have" | "has" | "had" => (tag_set(&[VERB, AUXILIARY]), Some("have".to_string())),
        "will" | "would" | "shall" | "should" | "can" | "could" | "may" | "might" | "must" => {
            (tag_set(&[VERB, AUXILIARY, MODAL]), None)
        }
        "not" | "never" => (tag_set(&[ADVERB, NEGATIVE]), None),
        "no" => (tag_set(&[DETERMINER, NEGATIVE]), None),
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "each" | "every" | "some"
        | "any" | "another" | "all" | "both" | "either" | "neither" | "such" => {
            (tag_set(&[DETERMINER]), None)
        }
        "my" | "your" | "his" | "her" | "its" | "our" | "their" | "whose" => {
            (tag_set(&[PRONOUN, POSSESSIVE]), None)
        }
        "i" | "me" | "mine" | "myself" | "you" | "yours" | "yourself" | "yourselves" | "he"
        | "him" | "himself" | "she" | "hers" | "herself" | "it" | "itself" | "we" | "us"
        | "ours" | "ourselves" | "they" | "them" | "theirs" | "themselves" | "who" | "whom"
        | "what" | "which" | "someone" | "somebody" | "something" | "anyone" | "anybody"
        | "anything" | "everyone" | "everybody" | "everything" | "nobody" | "nothing" => {
            (tag_set(&[PRONOUN]), None)
        }
        "about" | "above" | "across" | "after" | "against" | "along" | "among" | "around"
        | "at" | "before" | "behind" | "below" | "beneath" | "beside" | "between" | "beyond"
        | "by" | "despite" | "down" | "during" | "except" | "for" | "from" | "in" | "inside"
        | "into" | "near" | "of" | "off" | "on" | "onto" | "out" | "outside" | "over"
        | "past" | "since" | "through" | "throughout" | "to" | "toward" | "towards"
        | "under" | "until" | "up" | "upon" | "with" | "within" | "without" | "via" => {
            (tag_set(&[PREPOSITION]), None)
        }
        "and" | "or" | "but" | "nor" | "so" | "yet" | "because" | "although" | "though"
        | "while" | "whereas" | "unless" | "if" | "whether" | "than" => {
            (tag_set(&[CONJUNCTION]), None)
        }
        "very" | "too" | "also" | "just" | "only" | "even" | "still" | "already" | "always"
        | "often" | "sometimes" | "usually" | "rarely" | "soon" | "now" | "then" | "here"
        | "there" | "again" | "once" | "almost" | "quite" | "rather" | "really" | "ever"
        | "perhaps" | "maybe" | "however" | "therefore" | "thus" | "indeed" => {
            (tag_set(&[ADVERB]), None)
        }
        _ => return None,
    };
    Some(result)
}

fn irregular(normal: &str) -> Option<(TagSet, Option<String>)> {
    const PAST: &[&str] = &[VERB, PAST_TENSE];
    const PRESENT: &[&str] = &[VERB, PRESENT_TENSE];
    const PLURAL_NOUN: &[&str] = &[NOUN, PLURAL];
    const COMPARATIVE_ADJ: &[&str] = &[ADJECTIVE, COMPARATIVE];
    const SUPERLATIVE_ADJ: &[&str] = &[ADJECTIVE, SUPERLATIVE];

    let (root, labels) = match normal {
        "went" => ("go", PAST),
        "gone" => ("go", PAST),
        "goes" => ("go", PRESENT),
        "ran" => ("run", PAST),
        "saw" | "seen" => ("see", PAST),
        "made" => ("make", PAST),
        "said" => ("say", PAST),
        "took" | "taken" => ("take", PAST),
        "came" => ("come", PAST),
        "got" | "gotten" => ("get", PAST),
        "knew" | "known" => ("know", PAST),
        "thought" => ("think", PAST),
        "found" => ("find", PAST),
        "gave" | "given" => ("give", PAST),
        "told" => ("tell", PAST),
        "felt" => ("feel", PAST),
        "left" => ("leave", PAST),
        "kept" => ("keep", PAST),
        "brought" => ("bring", PAST),
        "began" | "begun" => ("begin", PAST),
        "wrote" | "written" => ("write", PAST),
        "ate" | "eaten" => ("eat", PAST),
        "sat" => ("sit", PAST),
        "stood" => ("stand", PAST),
        "lost" => ("lose", PAST),
        "paid" => ("pay", PAST),
        "met" => ("meet", PAST),
        "led" => ("lead", PAST),
        "spoke" | "spoken" => ("speak", PAST),
        "spent" => ("spend", PAST),
        "grew" | "grown" => ("grow", PAST),
        "won" => ("win", PAST),
        "taught" => ("teach", PAST),
        "bought" => ("buy", PAST),
        "built" => ("build", PAST),
        "fell" | "fallen" => ("fall", PAST),
        "broke" => ("break", PAST),
        "chose" | "chosen" => ("choose", PAST),
        "caught" => ("catch", PAST),
        "sent" => ("send", PAST),
        "became" => ("become", PAST),
        "heard" => ("hear", PAST),
        "held" => ("hold", PAST),
        "done" => ("do", PAST),
        "children" => ("child", PLURAL_NOUN),
        "men" => ("man", PLURAL_NOUN),
        "women" => ("woman", PLURAL_NOUN),
        "people" => ("person", PLURAL_NOUN),
        "mice" => ("mouse", PLURAL_NOUN),
        "feet" => ("foot", PLURAL_NOUN),
        "teeth" => ("tooth", PLURAL_NOUN),
        "geese" => ("goose", PLURAL_NOUN),
        "better" => ("good", COMPARATIVE_ADJ),
        "best" => ("good", SUPERLATIVE_ADJ),
        "worse" => ("bad", COMPARATIVE_ADJ),
        "worst" => ("bad", SUPERLATIVE_ADJ),
        _ => return None,
    };
    Some((tag_set(labels), Some(root.to_string())))
}

fn is_number_word(normal: &str) -> bool {
    matches!(
        normal,
        "one"
            | "two"
            | "three"
            | "four"
            | "five"
            | "six"
            | "seven"
            | "eight"
            | "nine"
            | "ten"
            | "hundred"
            | "thousand"
            | "million"
            | "billion"
    )
}

fn is_common_verb(normal: &str) -> bool {
    matches!(
        normal,
        "go" | "get" | "make" | "know" | "think" | "take" | "see" | "come" | "want" | "look"
            | "use" | "find" | "give" | "tell" | "work" | "call" | "try" | "ask" | "need"
            | "feel" | "become" | "leave" | "put" | "mean" | "keep" | "let" | "begin" | "seem"
            | "help" | "show" | "hear" | "play" | "run" | "move" | "live" | "believe"
            | "bring" | "happen" | "write" | "sit" | "stand" | "lose" | "pay" | "meet"
            | "include" | "continue" | "set" | "learn" | "change" | "lead" | "understand"
            | "watch" | "follow" | "stop" | "create" | "speak" | "read" | "spend" | "grow"
            | "open" | "walk" | "win" | "teach" | "offer" | "remember" | "love" | "hate"
            | "like" | "consider" | "appear" | "buy" | "wait" | "serve" | "die" | "send"
            | "build" | "stay" | "fall" | "cut" | "reach" | "kill" | "raise" | "pass" | "sell"
            | "decide" | "return" | "explain" | "hope" | "develop" | "carry" | "break"
            | "receive" | "agree" | "support" | "hit" | "produce" | "eat" | "cover" | "catch"
            | "draw" | "choose" | "say" | "bark" | "sleep" | "jump" | "enjoy"
    )
}

fn is_common_adjective(normal: &str) -> bool {
    matches!(
        normal,
        "good" | "bad" | "great" | "new" | "old" | "big" | "small" | "large" | "little"
            | "long" | "short" | "high" | "low" | "young" | "happy" | "sad" | "nice" | "fine"
            | "real" | "sure" | "whole" | "free" | "full" | "easy" | "hard" | "strong"
            | "weak" | "early" | "late" | "important" | "different" | "same" | "other"
            | "own" | "right" | "wrong" | "beautiful" | "ugly" | "quick" | "slow" | "fast"
            | "lazy" | "brown" | "red" | "blue" | "green" | "black" | "white"
    )
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Consonant-vowel-consonant ending, where the last consonant is not w, x or y.
fn ends_cvc(chars: &[char]) -> bool {
    match chars {
        [.., a, b, c] => {
            !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c) && !matches!(c, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// Undo an inflectional verb suffix: undoubling, `i` → `y`, `e` restoration.
fn verb_root(word: &str, suffix: &str) -> String {
    let stem = &word[..word.len() - suffix.len()];
    let mut chars: Vec<char> = stem.chars().collect();

    if suffix == "ed" && chars.last() == Some(&'i') {
        chars.pop();
        chars.push('y');
        return chars.into_iter().collect();
    }

    let n = chars.len();
    if n >= 3
        && chars[n - 1] == chars[n - 2]
        && !is_vowel(chars[n - 1])
        && !matches!(chars[n - 1], 'l' | 's' | 'z' | 'f')
    {
        chars.pop();
        return chars.into_iter().collect();
    }

    let restore_e = match chars.as_slice() {
        [.., 'v'] | [.., 'c'] => true,
        [.., before, 'a', 't'] if n >= 4 => !is_vowel(*before),
        [first, second] => is_vowel(*first) && !is_vowel(*second),
        _ => n <= 3 && ends_cvc(&chars),
    };
    if restore_e {
        chars.push('e');
    }
    chars.into_iter().collect()
}

/// Reduce a regular plural to its singular form.
fn singularize(word: &str) -> String {
    if word.chars().count() > 4
        && let Some(base) = word.strip_suffix("ies")
    {
        return format!("{base}y");
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> Annotation {
        RuleBasedAnnotator::new().annotate(text).unwrap()
    }

    fn term<'a>(annotation: &'a Annotation, text: &str) -> &'a Term {
        annotation
            .terms
            .iter()
            .find(|t| t.text == text)
            .unwrap_or_else(|| panic!("no term {text}"))
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(annotate("I love this! I hate that.").sentence_count, 2);
        assert_eq!(annotate("One sentence without a stop").sentence_count, 1);
        assert_eq!(annotate("First. Second? Third!").sentence_count, 3);
        assert_eq!(annotate("").sentence_count, 0);
    }

    #[test]
    fn test_closed_class_tags() {
        let annotation = annotate("The dog and I sat on my mat.");

        assert!(term(&annotation, "The").has_tag(DETERMINER));
        assert!(term(&annotation, "and").has_tag(CONJUNCTION));
        assert!(term(&annotation, "I").has_tag(PRONOUN));
        assert!(term(&annotation, "on").has_tag(PREPOSITION));
        assert!(term(&annotation, "my").has_tag(POSSESSIVE));
        assert!(term(&annotation, "mat").has_tag(NOUN));

        let sat = term(&annotation, "sat");
        assert!(sat.has_tag(VERB));
        assert_eq!(sat.root.as_deref(), Some("sit"));
    }

    #[test]
    fn test_lemmas() {
        let annotation = annotate("She was running and stopped. The children loved flies.");

        assert_eq!(term(&annotation, "was").root.as_deref(), Some("be"));
        assert_eq!(term(&annotation, "running").root.as_deref(), Some("run"));
        assert_eq!(term(&annotation, "stopped").root.as_deref(), Some("stop"));
        assert_eq!(term(&annotation, "children").root.as_deref(), Some("child"));
        assert_eq!(term(&annotation, "loved").root.as_deref(), Some("love"));
        assert_eq!(term(&annotation, "flies").root.as_deref(), Some("fly"));
        assert!(term(&annotation, "flies").has_tag(PLURAL));
    }

    #[test]
    fn test_contractions_produce_implicit_terms() {
        let annotation = annotate("I don't know.");
        let texts: Vec<&str> = annotation.terms.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["I", "don't", "", "know"]);
        assert_eq!(annotation.terms[1].normal, "do");
        assert_eq!(annotation.terms[2].normal, "not");
        assert!(annotation.terms[2].has_tag(NEGATIVE));
        assert!(annotation.terms[2].is_blank());
    }

    #[test]
    fn test_curly_apostrophe_and_irregular_contractions() {
        let annotation = annotate("It\u{2019}s fine, we can't stop.");

        assert_eq!(annotation.terms[0].normal, "it");
        assert_eq!(annotation.terms[1].normal, "is");
        let cant = term(&annotation, "can't");
        assert_eq!(cant.normal, "can");
        assert!(cant.has_tag(MODAL));
    }

    #[test]
    fn test_proper_nouns_and_values() {
        let annotation = annotate("We met Alice in 2024 with two friends.");

        assert!(term(&annotation, "Alice").has_tag(PROPER_NOUN));
        assert!(term(&annotation, "2024").has_tag(VALUE));
        assert!(term(&annotation, "two").has_tag(CARDINAL));
        assert!(term(&annotation, "friends").has_tag(PLURAL));
    }

    #[test]
    fn test_left_context() {
        let annotation = annotate("They love the work. I work daily.");

        assert!(term(&annotation, "love").has_tag(VERB));
        let works: Vec<&Term> = annotation.terms.iter().filter(|t| t.text == "work").collect();
        assert!(works[0].has_tag(NOUN));
        assert!(works[1].has_tag(VERB));
        assert!(term(&annotation, "daily").has_tag(ADVERB));
    }

    #[test]
    fn test_every_term_has_tags() {
        let annotation = annotate("The quick brown fox jumps over the lazy dog, doesn't it?");

        assert!(annotation.terms.iter().all(|t| !t.tags.is_empty()));
        assert!(term(&annotation, "jumps").has_tag(VERB));
        assert_eq!(term(&annotation, "jumps").root.as_deref(), Some("jump"));
        assert!(term(&annotation, "quick").has_tag(ADJECTIVE));
    }

    #[test]
    fn test_verb_root_rules() {
        assert_eq!(verb_root("making", "ing"), "make");
        assert_eq!(verb_root("hoping", "ing"), "hope");
        assert_eq!(verb_root("hopping", "ing"), "hop");
        assert_eq!(verb_root("tried", "ed"), "try");
        assert_eq!(verb_root("falling", "ing"), "fall");
        assert_eq!(verb_root("eating", "ing"), "eat");
        assert_eq!(verb_root("using", "ing"), "use");
        assert_eq!(verb_root("updated", "ed"), "update");
        assert_eq!(verb_root("jumped", "ed"), "jump");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("cities"), "city");
        assert_eq!(singularize("churches"), "church");
        assert_eq!(singularize("dogs"), "dog");
    }

    #[test]
    fn test_deterministic() {
        let text = "Stop! Don't run. The runners ran quickly.";
        assert_eq!(annotate(text), annotate(text));
    }
}
