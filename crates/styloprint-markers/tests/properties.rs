use proptest::prelude::*;
use styloprint_markers::{Feature, MarkerLibrary};

proptest! {
    #[test]
    fn counting_is_deterministic(text in "[a-zA-Z ',.!?]{0,300}") {
        let lib = MarkerLibrary::english();
        for feature in Feature::all() {
            prop_assert_eq!(lib.count(feature, &text), lib.count(feature, &text));
        }
    }

    #[test]
    fn appending_text_never_reduces_counts(a in "[a-z ,.]{0,120}", b in "[a-z ,.]{0,120}") {
        let lib = MarkerLibrary::english();
        let joined = format!("{a}. {b}");
        for feature in [Feature::FormalDiction, Feature::Hedging, Feature::Analogy] {
            prop_assert!(lib.count(feature, &joined) >= lib.count(feature, &a));
        }
    }

    #[test]
    fn weighted_count_matches_default_weight(text in "[a-z ]{0,200}") {
        let lib = MarkerLibrary::english();
        let raw = lib.count(Feature::Modality, &text) as f64;
        prop_assert_eq!(lib.weighted_count(Feature::Modality, &text), raw);
    }
}
