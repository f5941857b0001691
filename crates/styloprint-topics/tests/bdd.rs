//! BDD-style scenarios for topic distribution.

use styloprint_markers::MarkerLibrary;
use styloprint_topics::analyze_topics;
use styloprint_types::TopicKind;

#[test]
fn given_no_topic_keywords_when_analyzed_then_all_topics_share_equally() {
    let d = analyze_topics("Nothing to see here.", &MarkerLibrary::english());
    assert_eq!(d.total_matches, 0);
    assert_eq!(d.dominant.len(), 5);
    assert!(d.dominant.iter().all(|s| s.percentage == 20.0));
}

#[test]
fn given_technical_writing_when_analyzed_then_technology_dominates() {
    let text = "The software runs in the cloud. Our programming team ships code to the internet, \
                and automation keeps the network healthy.";
    let d = analyze_topics(text, &MarkerLibrary::english());
    assert_eq!(d.dominant[0].topic, TopicKind::Technology);
    assert_eq!(d.dominant[0].percentage, 100.0);
    assert_eq!(d.dominant.len(), 1);
    assert_eq!(d.cognitive_style, "Systems-oriented problem solver");
    assert!(d.interpretation.contains("technology"));
}

#[test]
fn given_mixed_writing_when_analyzed_then_output_is_sorted_descending() {
    let text = "Ethics and morality shape justice. Research and evidence inform science. \
                The market rewards strategy.";
    let d = analyze_topics(text, &MarkerLibrary::english());
    let pcts: Vec<f64> = d.dominant.iter().map(|s| s.percentage).collect();
    assert!(pcts.windows(2).all(|w| w[0] >= w[1]), "{pcts:?}");
    assert_eq!(d.dominant[0].topic, TopicKind::Philosophy);
}

#[test]
fn given_a_distribution_when_serialized_then_fields_are_camel_case() {
    let d = analyze_topics("art and music", &MarkerLibrary::english());
    let json = serde_json::to_value(&d).expect("serialize");
    assert_eq!(json["dominant"][0]["colorToken"], "pink-500");
    assert!(json["dominant"][0]["psychologicalImplication"].is_string());
    assert_eq!(json["cognitiveStyle"], "Expressive creative thinker");
    assert_eq!(json["totalMatches"], 2);
}
