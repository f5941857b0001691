//! # styloprint-archetype
//!
//! Cognitive archetype classification.
//!
//! Each archetype's marker set is counted over the corpus text; the highest
//! count wins and ties resolve to the earliest archetype in declared order.

use std::collections::BTreeMap;

use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::round_f64;
use styloprint_types::{ArchetypeKind, CognitiveArchetype};
use tracing::debug;

pub const CONFIDENCE_FLOOR: f64 = 0.6;
pub const CONFIDENCE_CEILING: f64 = 0.95;
const MARKERS_PER_DOCUMENT: f64 = 10.0;

pub fn display_name(kind: ArchetypeKind) -> &'static str {
    match kind {
        ArchetypeKind::Deconstructor => "The Deconstructor",
        ArchetypeKind::Synthesist => "The Synthesist",
        ArchetypeKind::AlgorithmicThinker => "The Algorithmic Thinker",
        ArchetypeKind::RhetoricalStrategist => "The Rhetorical Strategist",
        ArchetypeKind::Architect => "The Architect",
        ArchetypeKind::Cataloguer => "The Cataloguer",
    }
}

pub fn description(kind: ArchetypeKind) -> &'static str {
    match kind {
        ArchetypeKind::Deconstructor => {
            "Breaks ideas apart to expose their assumptions, testing each premise before accepting the whole."
        }
        ArchetypeKind::Synthesist => {
            "Connects ideas across domains, building integrated views out of separate threads."
        }
        ArchetypeKind::AlgorithmicThinker => {
            "Works through problems as ordered procedures, favoring explicit steps and efficient paths."
        }
        ArchetypeKind::RhetoricalStrategist => {
            "Shapes arguments for an audience, attending to framing, persuasion, and narrative effect."
        }
        ArchetypeKind::Architect => {
            "Designs ideas as structures, laying foundations and arranging components into layered systems."
        }
        ArchetypeKind::Cataloguer => {
            "Organizes knowledge into lists and categories, valuing completeness and clear classification."
        }
    }
}

pub fn traits(kind: ArchetypeKind) -> &'static [&'static str] {
    match kind {
        ArchetypeKind::Deconstructor => &[
            "Critical analysis",
            "Assumption testing",
            "Skeptical inquiry",
            "Precision in argument",
        ],
        ArchetypeKind::Synthesist => &[
            "Cross-domain thinking",
            "Pattern integration",
            "Holistic perspective",
            "Conceptual bridging",
        ],
        ArchetypeKind::AlgorithmicThinker => &[
            "Procedural reasoning",
            "Optimization focus",
            "Systematic method",
            "Input-output clarity",
        ],
        ArchetypeKind::RhetoricalStrategist => &[
            "Audience awareness",
            "Persuasive framing",
            "Narrative control",
            "Strategic emphasis",
        ],
        ArchetypeKind::Architect => &[
            "Structural design",
            "Layered planning",
            "Modular thinking",
            "Foundational focus",
        ],
        ArchetypeKind::Cataloguer => &[
            "Taxonomic organization",
            "Comprehensive coverage",
            "Categorical precision",
            "Reference building",
        ],
    }
}

/// `min(0.95, max_count / (documents * 10) + 0.6)`; documents floored at 1.
pub fn confidence(max_count: usize, document_count: usize) -> f64 {
    let density = max_count as f64 / (document_count.max(1) as f64 * MARKERS_PER_DOCUMENT);
    round_f64((density + CONFIDENCE_FLOOR).min(CONFIDENCE_CEILING), 4)
}

/// Build the result record for `kind` from fixed lookup tables.
pub fn describe(
    kind: ArchetypeKind,
    confidence: f64,
    marker_counts: BTreeMap<ArchetypeKind, usize>,
) -> CognitiveArchetype {
    CognitiveArchetype {
        kind,
        name: display_name(kind).to_string(),
        confidence,
        description: description(kind).to_string(),
        traits: traits(kind).iter().map(|t| (*t).to_string()).collect(),
        marker_counts,
    }
}

/// Classify the corpus text against all six archetypes.
pub fn classify_archetype(
    text: &str,
    document_count: usize,
    markers: &MarkerLibrary,
) -> CognitiveArchetype {
    let counts: BTreeMap<ArchetypeKind, usize> = ArchetypeKind::ALL
        .into_iter()
        .map(|kind| (kind, markers.count(Feature::Archetype(kind), text)))
        .collect();

    let mut best = ArchetypeKind::ALL[0];
    let mut best_count = 0usize;
    for kind in ArchetypeKind::ALL {
        let count = counts.get(&kind).copied().unwrap_or(0);
        if count > best_count {
            best = kind;
            best_count = count;
        }
    }

    let confidence = confidence(best_count, document_count);
    debug!(archetype = best.key(), count = best_count, confidence, "archetype selected");
    describe(best, confidence, counts)
}
