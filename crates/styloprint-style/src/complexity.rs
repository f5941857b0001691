use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::{clamp01, per_unit, round_f64};
use styloprint_text::TextStats;
use styloprint_types::{ComplexityAnalysis, ComplexitySubdimensions};

use crate::percentile::calibrate_complexity;

const SENTENCE_LENGTH_DIVISOR: f64 = 30.0;
const WORD_LENGTH_OFFSET: f64 = 3.0;
const WORD_LENGTH_DIVISOR: f64 = 5.0;
const LEXICAL_DIVISOR: f64 = 0.3;
const CLAUSES_PER_SENTENCE_DIVISOR: f64 = 3.0;
const SEGMENT_LENGTH_DIVISOR: f64 = 15.0;
const RARITY_DIVISOR: f64 = 0.25;

/// Blend sentence length, word length, embedded-sentence rate and lexical
/// rarity into a `[0, 1]` complexity score with its subdimensions.
pub fn score_complexity(
    text: &str,
    stats: &TextStats,
    markers: &MarkerLibrary,
) -> ComplexityAnalysis {
    let avg_sentence_length = stats.avg_sentence_length();
    let sentence_norm = clamp01(avg_sentence_length / SENTENCE_LENGTH_DIVISOR);
    let word_norm = clamp01((stats.avg_word_length() - WORD_LENGTH_OFFSET) / WORD_LENGTH_DIVISOR);
    let embedded_rate = clamp01(per_unit(
        stats.embedded_sentences as f64,
        stats.sentence_count,
    ));
    let rare_rate = per_unit(stats.rare_words as f64, stats.word_count);
    let technical_rate = per_unit(
        markers.count(Feature::TechnicalTerms, text) as f64,
        stats.word_count,
    );
    let lexical_norm = clamp01((rare_rate + technical_rate) / LEXICAL_DIVISOR);

    let score = round_f64(
        clamp01(0.3 * sentence_norm + 0.2 * word_norm + 0.3 * embedded_rate + 0.2 * lexical_norm),
        4,
    );

    let subordinators = markers.count(Feature::Subordination, text) as f64;
    let subdimensions = ComplexitySubdimensions {
        clause_density: round_f64(
            clamp01(per_unit(subordinators, stats.sentence_count) / CLAUSES_PER_SENTENCE_DIVISOR),
            4,
        ),
        dependency_length: round_f64(
            clamp01(stats.avg_segment_length() / SEGMENT_LENGTH_DIVISOR),
            4,
        ),
        embedded_structure_rate: round_f64(embedded_rate, 4),
        lexical_rarity: round_f64(clamp01(rare_rate / RARITY_DIVISOR), 4),
    };

    let calibration = calibrate_complexity(score, avg_sentence_length);
    ComplexityAnalysis {
        score,
        percentile: calibration.percentile,
        band: calibration.band.name().to_string(),
        subdimensions,
    }
}
