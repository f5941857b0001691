use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::{clamp01, per_unit, round_f64};
use styloprint_text::TextStats;
use styloprint_types::{FormalityAnalysis, FormalitySubdimensions};

use crate::percentile::calibrate_formality;

/// Markers per 1000 words that swing the score by a full unit.
const RATE_SCALE: f64 = 50.0;
const MODALITY_SCALE: f64 = 20.0;
const HEDGING_SCALE: f64 = 20.0;

fn rate(weighted_matches: f64, words: usize) -> f64 {
    per_unit(weighted_matches * 1000.0, words) / RATE_SCALE
}

/// Score formality in `[0, 1]` from formal vs. informal marker density per
/// 1000 words, centered on 0.5, and calibrate it to a percentile and band.
pub fn score_formality(text: &str, stats: &TextStats, markers: &MarkerLibrary) -> FormalityAnalysis {
    let words = stats.word_count;
    let formal = markers.weighted_count(Feature::FormalDiction, text);
    let informal = markers.weighted_count(Feature::InformalDiction, text)
        + markers.weighted_count(Feature::Contractions, text);

    let score = round_f64(clamp01(rate(formal, words) - rate(informal, words) + 0.5), 4);

    let contractions = markers.count(Feature::Contractions, text) as f64;
    let tone_register = if formal + informal > 0.0 {
        formal / (formal + informal)
    } else {
        0.5
    };
    let subdimensions = FormalitySubdimensions {
        tone_register: round_f64(clamp01(tone_register), 4),
        modality_usage: round_f64(
            clamp01(
                per_unit(markers.count(Feature::Modality, text) as f64, words) * MODALITY_SCALE,
            ),
            4,
        ),
        contraction_rate: round_f64(clamp01(per_unit(contractions, words)), 4),
        hedging_frequency: round_f64(
            clamp01(per_unit(markers.count(Feature::Hedging, text) as f64, words) * HEDGING_SCALE),
            4,
        ),
    };

    let calibration = calibrate_formality(score, subdimensions.contraction_rate);
    FormalityAnalysis {
        score,
        percentile: calibration.percentile,
        band: calibration.band.name().to_string(),
        subdimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> FormalityAnalysis {
        let markers = MarkerLibrary::english();
        score_formality(text, &TextStats::of(text), &markers)
    }

    #[test]
    fn neutral_text_sits_at_midpoint() {
        let f = score("The cat sat on the mat.");
        assert_eq!(f.score, 0.5);
        assert_eq!(f.subdimensions.tone_register, 0.5);
    }

    #[test]
    fn empty_text_is_finite() {
        let f = score("");
        assert_eq!(f.score, 0.5);
        assert_eq!(f.subdimensions.contraction_rate, 0.0);
        assert!(f.percentile.is_finite());
    }

    #[test]
    fn contractions_pull_score_down() {
        let casual = score("I don't think it's gonna work, yeah.");
        assert!(casual.score < 0.5);
        assert!(casual.subdimensions.contraction_rate > 0.0);
        assert_eq!(casual.band, "casual");
    }

    #[test]
    fn formal_diction_pushes_score_up() {
        let formal = score(
            "Furthermore, the findings demonstrate a sufficient basis. Consequently, the board will commence review.",
        );
        assert!(formal.score > 0.8);
        assert_eq!(formal.subdimensions.tone_register, 1.0);
        assert_eq!(formal.band, "academic");
    }
}
