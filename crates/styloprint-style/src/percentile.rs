//! Raw score to percentile-band calibration.
//!
//! The percentile is interpolated linearly inside the selected band, so the
//! same inputs always land on the same percentile.

use styloprint_math::{lerp, round_f64};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormalityBand {
    Academic,
    Professional,
    Balanced,
    Casual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityBand {
    Sophisticated,
    Advanced,
    Moderate,
    Accessible,
}

/// A band entered at `threshold`, spanning percentiles `lo..=hi` as the
/// score moves from `threshold` to `ceiling`.
#[derive(Debug, Clone, Copy)]
struct BandRange {
    lo: f64,
    hi: f64,
    threshold: f64,
    ceiling: f64,
}

impl BandRange {
    fn percentile(&self, score: f64) -> f64 {
        let t = (score - self.threshold) / (self.ceiling - self.threshold);
        round_f64(lerp(self.lo, self.hi, t), 0)
    }
}

impl FormalityBand {
    pub fn name(self) -> &'static str {
        match self {
            FormalityBand::Academic => "academic",
            FormalityBand::Professional => "professional",
            FormalityBand::Balanced => "balanced",
            FormalityBand::Casual => "casual",
        }
    }

    fn range(self) -> BandRange {
        match self {
            FormalityBand::Academic => BandRange {
                lo: 85.0,
                hi: 95.0,
                threshold: 0.8,
                ceiling: 1.0,
            },
            FormalityBand::Professional => BandRange {
                lo: 65.0,
                hi: 80.0,
                threshold: 0.6,
                ceiling: 1.0,
            },
            FormalityBand::Balanced => BandRange {
                lo: 45.0,
                hi: 65.0,
                threshold: 0.4,
                ceiling: 1.0,
            },
            FormalityBand::Casual => BandRange {
                lo: 15.0,
                hi: 40.0,
                threshold: 0.0,
                ceiling: 0.4,
            },
        }
    }
}

impl ComplexityBand {
    pub fn name(self) -> &'static str {
        match self {
            ComplexityBand::Sophisticated => "sophisticated",
            ComplexityBand::Advanced => "advanced",
            ComplexityBand::Moderate => "moderate",
            ComplexityBand::Accessible => "accessible",
        }
    }

    fn range(self) -> BandRange {
        match self {
            ComplexityBand::Sophisticated => BandRange {
                lo: 85.0,
                hi: 95.0,
                threshold: 0.7,
                ceiling: 1.0,
            },
            ComplexityBand::Advanced => BandRange {
                lo: 65.0,
                hi: 80.0,
                threshold: 0.5,
                ceiling: 1.0,
            },
            ComplexityBand::Moderate => BandRange {
                lo: 40.0,
                hi: 65.0,
                threshold: 0.3,
                ceiling: 1.0,
            },
            ComplexityBand::Accessible => BandRange {
                lo: 15.0,
                hi: 40.0,
                threshold: 0.0,
                ceiling: 0.3,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration<B> {
    pub band: B,
    pub percentile: f64,
}

/// Contextual signal: contractions per word.
pub fn calibrate_formality(score: f64, contraction_rate: f64) -> Calibration<FormalityBand> {
    let band = if score > 0.8 && contraction_rate < 0.01 {
        FormalityBand::Academic
    } else if score > 0.6 && contraction_rate < 0.03 {
        FormalityBand::Professional
    } else if score > 0.4 {
        FormalityBand::Balanced
    } else {
        FormalityBand::Casual
    };
    Calibration {
        band,
        percentile: band.range().percentile(score),
    }
}

/// Contextual signal: mean words per sentence.
pub fn calibrate_complexity(score: f64, avg_sentence_length: f64) -> Calibration<ComplexityBand> {
    let band = if score > 0.7 && avg_sentence_length > 25.0 {
        ComplexityBand::Sophisticated
    } else if score > 0.5 && avg_sentence_length > 18.0 {
        ComplexityBand::Advanced
    } else if score > 0.3 {
        ComplexityBand::Moderate
    } else {
        ComplexityBand::Accessible
    };
    Calibration {
        band,
        percentile: band.range().percentile(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academic_band_requires_low_contractions() {
        assert_eq!(calibrate_formality(0.9, 0.0).band, FormalityBand::Academic);
        assert_eq!(
            calibrate_formality(0.9, 0.02).band,
            FormalityBand::Professional
        );
        assert_eq!(calibrate_formality(0.9, 0.05).band, FormalityBand::Balanced);
    }

    #[test]
    fn percentile_interpolates_inside_band() {
        assert_eq!(calibrate_formality(0.9, 0.0).percentile, 90.0);
        assert_eq!(calibrate_formality(1.0, 0.0).percentile, 95.0);
        assert_eq!(calibrate_formality(0.2, 0.5).percentile, 28.0);
        assert_eq!(calibrate_formality(0.0, 0.5).percentile, 15.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(calibrate_formality(0.4, 0.0).band, FormalityBand::Casual);
        assert_eq!(calibrate_formality(0.4, 0.0).percentile, 40.0);
        assert_eq!(calibrate_complexity(0.3, 10.0).band, ComplexityBand::Accessible);
    }

    #[test]
    fn complexity_band_uses_sentence_length_context() {
        assert_eq!(
            calibrate_complexity(0.8, 30.0).band,
            ComplexityBand::Sophisticated
        );
        assert_eq!(calibrate_complexity(0.8, 20.0).band, ComplexityBand::Advanced);
        assert_eq!(calibrate_complexity(0.8, 10.0).band, ComplexityBand::Moderate);
    }

    #[test]
    fn calibration_is_repeatable() {
        let a = calibrate_complexity(0.55, 19.0);
        let b = calibrate_complexity(0.55, 19.0);
        assert_eq!(a, b);
    }
}
