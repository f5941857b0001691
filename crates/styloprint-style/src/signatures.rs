use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::{clamp01, per_unit, round_f64};
use styloprint_text::TextStats;
use styloprint_types::CognitiveSignatures;

const NESTED_HYPOTHETICAL_MULTIPLIER: f64 = 5.0;
const ANAPHORIC_MULTIPLIER: f64 = 2.0;
const ANALOGY_MULTIPLIER: f64 = 3.0;

fn per_sentence(markers: &MarkerLibrary, feature: Feature, text: &str, sentences: usize) -> f64 {
    per_unit(markers.count(feature, text) as f64, sentences)
}

/// Per-sentence rates of the reasoning signatures, each scaled and clamped
/// to `[0, 1]`.
pub fn extract_signatures(
    text: &str,
    stats: &TextStats,
    markers: &MarkerLibrary,
) -> CognitiveSignatures {
    let sentences = stats.sentence_count;
    let nested = per_sentence(markers, Feature::NestedHypothetical, text, sentences);
    let anaphoric = per_sentence(markers, Feature::AnaphoricReasoning, text, sentences);
    let analogies = per_sentence(markers, Feature::Analogy, text, sentences);

    // The +1 biases toward didactic when neither kind of marker appears.
    let dialectical = markers.count(Feature::Dialectical, text) as f64;
    let didactic = markers.count(Feature::Didactic, text) as f64;
    let ratio = dialectical / (dialectical + didactic + 1.0);

    CognitiveSignatures {
        nested_hypotheticals: round_f64(clamp01(nested * NESTED_HYPOTHETICAL_MULTIPLIER), 4),
        anaphoric_reasoning: round_f64(clamp01(anaphoric * ANAPHORIC_MULTIPLIER), 4),
        structural_analogies: round_f64(clamp01(analogies * ANALOGY_MULTIPLIER), 4),
        dialectical_vs_didactic: round_f64(clamp01(ratio), 4),
    }
}
