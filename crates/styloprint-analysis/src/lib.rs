//! # styloprint-analysis
//!
//! **Tier 3 (Orchestration)**
//!
//! Composes the feature extractors into one pure entry point,
//! `(documents, timeframe) -> AnalyticsResult`.
//!
//! ## What belongs here
//! * The [`Engine`] and the [`analyze`] convenience function
//! * The cold-start result for an empty corpus
//! * The corpus signature
//!
//! ## What does NOT belong here
//! * Scoring rules (use the tier 2 crates)
//! * Marker tables (use styloprint-markers)
//! * Reading documents from disk (use the `styloprint` CLI)

mod defaults;
mod engine;
mod signature;

use styloprint_types::{AnalyticsResult, Document, Timeframe};

pub use defaults::cold_start;
pub use engine::Engine;
pub use signature::corpus_signature;

pub use styloprint_markers::{MarkerConfig, MarkerLibrary};
pub use styloprint_types as types;

/// Analyze `documents` with the built-in English markers, measured from now.
pub fn analyze(documents: &[Document], timeframe: Timeframe) -> AnalyticsResult {
    Engine::default().analyze(documents, timeframe)
}
