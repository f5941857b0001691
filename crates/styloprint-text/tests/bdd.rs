//! BDD-style scenarios for segmentation.

use styloprint_text::{TextStats, is_embedded, sentences};

#[test]
fn given_mixed_terminators_when_segmented_then_each_run_ends_one_sentence() {
    let got: Vec<&str> = sentences("Really?! I think so... Fine.").collect();
    assert_eq!(got, vec!["Really", "I think so", "Fine"]);
}

#[test]
fn given_whitespace_only_document_when_measured_then_everything_is_zero() {
    let stats = TextStats::of("   \n\t  ");
    assert_eq!(stats, TextStats::default());
}

#[test]
fn given_list_like_sentence_when_checked_then_it_is_embedded() {
    assert!(is_embedded("We tested speed, memory, and latency"));
}

#[test]
fn given_long_sentences_when_measured_then_average_reflects_words_per_sentence() {
    let text = "one two three four five six. seven eight nine ten eleven twelve.";
    let stats = TextStats::of(text);
    assert_eq!(stats.sentence_count, 2);
    assert_eq!(stats.avg_sentence_length(), 6.0);
}
