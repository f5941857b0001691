//! # styloprint-types
//!
//! **Tier 0 (Analytics Contract)**
//!
//! Pure data structures for stylometric analytics results. No I/O or business logic.
//!
//! ## What belongs here
//! * Input records (`Document`) and the `Timeframe` selector
//! * The `AnalyticsResult` output contract and its parts
//! * Closed enumerations used as lookup keys (`ArchetypeKind`, `TopicKind`, `TrajectoryKind`)
//!
//! ## What does NOT belong here
//! * Scoring or classification logic (use the tier 2 crates)
//! * Marker tables (use styloprint-markers)
//! * File I/O operations
//!
//! Field names serialize in camelCase; the JSON shape is a stable contract
//! consumed by presentation layers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version for analytics results.
pub const SCHEMA_VERSION: u32 = 1;

// -----
// Input
// -----

/// A single piece of free text supplied by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            date,
        }
    }
}

/// Recency window applied before analysis.
///
/// Unrecognized labels fall back to [`Timeframe::SevenDays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Timeframe {
    #[default]
    SevenDays,
    ThirtyDays,
    ThreeMonths,
    SixMonths,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::SevenDays,
        Timeframe::ThirtyDays,
        Timeframe::ThreeMonths,
        Timeframe::SixMonths,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::SevenDays => "7days",
            Timeframe::ThirtyDays => "30days",
            Timeframe::ThreeMonths => "3months",
            Timeframe::SixMonths => "6months",
        }
    }

    /// Parse a label, falling back to seven days for anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "30days" => Timeframe::ThirtyDays,
            "3months" => Timeframe::ThreeMonths,
            "6months" => Timeframe::SixMonths,
            _ => Timeframe::SevenDays,
        }
    }
}

impl From<String> for Timeframe {
    fn from(value: String) -> Self {
        Timeframe::from_label(&value)
    }
}

impl From<&str> for Timeframe {
    fn from(value: &str) -> Self {
        Timeframe::from_label(value)
    }
}

impl From<Timeframe> for &'static str {
    fn from(value: Timeframe) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ------------------
// Closed enumerations
// ------------------

/// Behavioral archetypes, in declared (tie-break) order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeKind {
    Deconstructor,
    Synthesist,
    AlgorithmicThinker,
    RhetoricalStrategist,
    Architect,
    Cataloguer,
}

impl ArchetypeKind {
    /// Declared order. Ties in classification resolve to the earliest entry.
    pub const ALL: [ArchetypeKind; 6] = [
        ArchetypeKind::Deconstructor,
        ArchetypeKind::Synthesist,
        ArchetypeKind::AlgorithmicThinker,
        ArchetypeKind::RhetoricalStrategist,
        ArchetypeKind::Architect,
        ArchetypeKind::Cataloguer,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ArchetypeKind::Deconstructor => "deconstructor",
            ArchetypeKind::Synthesist => "synthesist",
            ArchetypeKind::AlgorithmicThinker => "algorithmic_thinker",
            ArchetypeKind::RhetoricalStrategist => "rhetorical_strategist",
            ArchetypeKind::Architect => "architect",
            ArchetypeKind::Cataloguer => "cataloguer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ArchetypeKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Topic taxonomy, in declared order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    Technology,
    Philosophy,
    Science,
    Arts,
    Business,
}

impl TopicKind {
    pub const ALL: [TopicKind; 5] = [
        TopicKind::Technology,
        TopicKind::Philosophy,
        TopicKind::Science,
        TopicKind::Arts,
        TopicKind::Business,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TopicKind::Technology => "technology",
            TopicKind::Philosophy => "philosophy",
            TopicKind::Science => "science",
            TopicKind::Arts => "arts",
            TopicKind::Business => "business",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        TopicKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryKind {
    ExploratoryExpansion,
    CompressionAbstraction,
    Crystallization,
}

// --------------
// Writing style
// --------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStyleAnalysis {
    pub formality: FormalityAnalysis,
    pub complexity: ComplexityAnalysis,
    pub cognitive_signatures: CognitiveSignatures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormalityAnalysis {
    pub score: f64,
    pub percentile: f64,
    pub band: String,
    pub subdimensions: FormalitySubdimensions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormalitySubdimensions {
    pub tone_register: f64,
    pub modality_usage: f64,
    pub contraction_rate: f64,
    pub hedging_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAnalysis {
    pub score: f64,
    pub percentile: f64,
    pub band: String,
    pub subdimensions: ComplexitySubdimensions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexitySubdimensions {
    pub clause_density: f64,
    pub dependency_length: f64,
    pub embedded_structure_rate: f64,
    pub lexical_rarity: f64,
}

/// Secondary reasoning-structure rates, each in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveSignatures {
    pub nested_hypotheticals: f64,
    pub anaphoric_reasoning: f64,
    pub structural_analogies: f64,
    pub dialectical_vs_didactic: f64,
}

// ---------
// Archetype
// ---------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveArchetype {
    #[serde(rename = "type")]
    pub kind: ArchetypeKind,
    pub name: String,
    pub confidence: f64,
    pub description: String,
    pub traits: Vec<String>,
    pub marker_counts: BTreeMap<ArchetypeKind, usize>,
}

// ------
// Topics
// ------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicShare {
    pub topic: TopicKind,
    pub name: String,
    pub percentage: f64,
    pub color_token: String,
    pub psychological_implication: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDistribution {
    /// Entries above 5%, sorted descending by percentage.
    pub dominant: Vec<TopicShare>,
    pub interpretation: String,
    pub cognitive_style: String,
    pub total_matches: usize,
}

// --------
// Temporal
// --------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    /// Mean document length in words.
    pub avg_length: f64,
    /// Mean sentence length in words.
    pub complexity: f64,
    pub document_count: usize,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub label: String,
    pub archetype_label: String,
    pub description: String,
    pub key_metrics: PeriodMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    #[serde(rename = "type")]
    pub kind: TrajectoryKind,
    pub description: String,
    pub prognosis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalEvolution {
    pub early: Period,
    pub middle: Period,
    pub recent: Period,
    pub trajectory: Trajectory,
}

// ------------
// Longitudinal
// ------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongitudinalPoint {
    pub id: String,
    pub date: DateTime<Utc>,
    pub conceptual_density: f64,
    pub formality_index: f64,
    pub cognitive_complexity: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

// ---------
// Aggregate
// ---------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    pub schema_version: u32,
    pub timeframe: Timeframe,
    /// Documents remaining after the timeframe filter.
    pub document_count: usize,
    /// BLAKE3 digest of the filtered corpus; empty for the cold-start result.
    pub corpus_signature: String,
    pub writing_style: WritingStyleAnalysis,
    pub cognitive_archetype: CognitiveArchetype,
    pub topic_distribution: TopicDistribution,
    pub temporal_evolution: TemporalEvolution,
    pub longitudinal_patterns: Vec<LongitudinalPoint>,
}
