//! # styloprint-style
//!
//! **Tier 2 (Writing Style)**
//!
//! Formality and complexity scoring, percentile calibration, and the four
//! cognitive-signature rates, all computed over one corpus text.

mod complexity;
mod formality;
mod percentile;
mod signatures;

use styloprint_markers::MarkerLibrary;
use styloprint_text::TextStats;
use styloprint_types::WritingStyleAnalysis;

pub use complexity::score_complexity;
pub use formality::score_formality;
pub use percentile::{
    Calibration, ComplexityBand, FormalityBand, calibrate_complexity, calibrate_formality,
};
pub use signatures::extract_signatures;

/// Score `text` on every writing-style dimension.
pub fn analyze_writing_style(text: &str, markers: &MarkerLibrary) -> WritingStyleAnalysis {
    let stats = TextStats::of(text);
    WritingStyleAnalysis {
        formality: score_formality(text, &stats, markers),
        complexity: score_complexity(text, &stats, markers),
        cognitive_signatures: extract_signatures(text, &stats, markers),
    }
}
