//! The cold-start result returned when the filtered corpus is empty.

use std::collections::BTreeMap;

use styloprint_archetype::{CONFIDENCE_FLOOR, describe};
use styloprint_temporal::default_evolution;
use styloprint_topics::uniform_distribution;
use styloprint_types::{
    AnalyticsResult, ArchetypeKind, CognitiveSignatures, ComplexityAnalysis,
    ComplexitySubdimensions, FormalityAnalysis, FormalitySubdimensions, SCHEMA_VERSION, Timeframe,
    WritingStyleAnalysis,
};

/// The fixed result for an empty corpus.
///
/// `timeframe` echoes the request so the envelope still reports the window
/// that was asked for; every analytic field is the same literal value.
pub fn cold_start(timeframe: Timeframe) -> AnalyticsResult {
    let marker_counts: BTreeMap<ArchetypeKind, usize> =
        ArchetypeKind::ALL.into_iter().map(|k| (k, 0)).collect();

    AnalyticsResult {
        schema_version: SCHEMA_VERSION,
        timeframe,
        document_count: 0,
        corpus_signature: String::new(),
        writing_style: WritingStyleAnalysis {
            formality: FormalityAnalysis {
                score: 0.5,
                percentile: 50.0,
                band: "balanced".to_string(),
                subdimensions: FormalitySubdimensions::default(),
            },
            complexity: ComplexityAnalysis {
                score: 0.5,
                percentile: 50.0,
                band: "moderate".to_string(),
                subdimensions: ComplexitySubdimensions::default(),
            },
            cognitive_signatures: CognitiveSignatures::default(),
        },
        cognitive_archetype: describe(ArchetypeKind::Cataloguer, CONFIDENCE_FLOOR, marker_counts),
        topic_distribution: uniform_distribution(),
        temporal_evolution: default_evolution(),
        longitudinal_patterns: Vec::new(),
    }
}
