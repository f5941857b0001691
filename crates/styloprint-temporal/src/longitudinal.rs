use rayon::prelude::*;
use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::{clamp01, per_unit, round_f64};
use styloprint_text::TextStats;
use styloprint_types::{Document, LongitudinalPoint};

use crate::time_ordered;

const CONCEPTUAL_SCALE: f64 = 10.0;
const FORMALITY_SCALE: f64 = 20.0;

const HIGH_CONCEPTUAL_DENSITY: f64 = 0.7;
const HIGH_FORMALITY: f64 = 0.8;
const PEAK_COMPLEXITY: f64 = 0.75;

/// Feature vector for a single document.
pub fn longitudinal_point(doc: &Document, markers: &MarkerLibrary) -> LongitudinalPoint {
    let text = doc.content.as_str();
    let stats = TextStats::of(text);
    let conceptual = markers.count(Feature::AbstractTerms, text)
        + markers.count(Feature::TechnicalTerms, text);
    let connectives = markers.count(Feature::DiscourseConnectives, text);

    let conceptual_density = round_f64(
        clamp01(per_unit(conceptual as f64, stats.word_count) * CONCEPTUAL_SCALE),
        3,
    );
    let formality_index = round_f64(
        clamp01(per_unit(connectives as f64, stats.word_count) * FORMALITY_SCALE),
        3,
    );
    let cognitive_complexity = round_f64(
        clamp01(
            0.6 * stats.avg_sentence_length() / 30.0 + 0.4 * (stats.avg_word_length() - 3.0) / 5.0,
        ),
        3,
    );

    let mut annotations = Vec::new();
    if conceptual_density > HIGH_CONCEPTUAL_DENSITY {
        annotations.push("High conceptual density".to_string());
    }
    if formality_index > HIGH_FORMALITY {
        annotations.push("Highly formal register".to_string());
    }
    if cognitive_complexity > PEAK_COMPLEXITY {
        annotations.push("Peak complexity".to_string());
    }

    LongitudinalPoint {
        id: doc.id.clone(),
        date: doc.date,
        conceptual_density,
        formality_index,
        cognitive_complexity,
        annotations,
    }
}

/// One point per document, ascending by date.
///
/// With `parallel` set the points are computed on the rayon pool; the
/// output is identical either way.
pub fn build_series<'a, I>(docs: I, markers: &MarkerLibrary, parallel: bool) -> Vec<LongitudinalPoint>
where
    I: IntoIterator<Item = &'a Document>,
{
    let ordered = time_ordered(docs);
    if parallel {
        ordered
            .par_iter()
            .map(|doc| longitudinal_point(doc, markers))
            .collect()
    } else {
        ordered
            .iter()
            .map(|doc| longitudinal_point(doc, markers))
            .collect()
    }
}
