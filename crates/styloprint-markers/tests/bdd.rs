//! BDD-style scenarios for the built-in English marker tables.

use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_types::{ArchetypeKind, TopicKind};

fn english() -> MarkerLibrary {
    MarkerLibrary::english()
}

#[test]
fn given_contractions_when_counted_then_each_is_found_once() {
    let lib = english();
    let text = "I'm sure it's fine, but we don't know and they'd say we're late.";
    assert_eq!(lib.count(Feature::Contractions, text), 5);
}

#[test]
fn given_curly_apostrophes_when_counted_then_contractions_still_match() {
    let lib = english();
    assert_eq!(lib.count(Feature::Contractions, "I can’t and won’t."), 2);
}

#[test]
fn given_formal_prose_when_counted_then_formal_markers_dominate() {
    let lib = english();
    let text = "Furthermore, the committee will commence review. Moreover, it is sufficient.";
    assert_eq!(lib.count(Feature::FormalDiction, text), 4);
    assert_eq!(lib.count(Feature::InformalDiction, text), 0);
}

#[test]
fn given_multi_word_markers_with_line_breaks_when_counted_then_they_match() {
    let lib = english();
    assert_eq!(lib.count(Feature::Dialectical, "On the\nother   hand, no."), 1);
}

#[test]
fn given_conditional_inside_conditional_when_counted_then_nested_hypothetical_matches() {
    let lib = english();
    let text = "If the bridge holds, then we cross, and if it rains we wait.";
    assert_eq!(lib.count(Feature::NestedHypothetical, text), 1);
}

#[test]
fn given_one_clause_covered_by_several_nested_patterns_when_counted_then_it_counts_once() {
    let lib = english();
    // `imagine…if`, `if…then…if` and `if…would…if` all reach into this clause.
    let text = "Imagine if it rains then we would stay if cold.";
    assert_eq!(lib.count(Feature::NestedHypothetical, text), 1);
}

#[test]
fn given_single_conditional_when_counted_then_no_nested_hypothetical() {
    let lib = english();
    assert_eq!(lib.count(Feature::NestedHypothetical, "If it rains, then we wait."), 0);
}

#[test]
fn given_nested_hypothetical_across_sentences_when_counted_then_no_match() {
    let lib = english();
    let text = "If it rains, then we wait. If it snows we leave.";
    assert_eq!(lib.count(Feature::NestedHypothetical, text), 0);
}

#[test]
fn given_word_inside_longer_word_when_counted_then_no_partial_match() {
    let lib = english();
    // "thus" must not match inside "enthusiasm".
    assert_eq!(lib.count(Feature::AnaphoricReasoning, "Great enthusiasm."), 0);
}

#[test]
fn given_archetype_vocabulary_when_counted_then_matching_set_fires() {
    let lib = english();
    let text = "We design the structure in layers, each component modular.";
    let architect = lib.count(Feature::Archetype(ArchetypeKind::Architect), text);
    let cataloguer = lib.count(Feature::Archetype(ArchetypeKind::Cataloguer), text);
    assert!(architect >= 4, "architect = {architect}");
    assert_eq!(cataloguer, 0);
}

#[test]
fn given_topic_vocabulary_when_counted_then_matching_topic_fires() {
    let lib = english();
    let text = "The research study gathered evidence in the laboratory.";
    assert_eq!(lib.count(Feature::Topic(TopicKind::Science), text), 4);
    assert_eq!(lib.count(Feature::Topic(TopicKind::Business), text), 0);
}
