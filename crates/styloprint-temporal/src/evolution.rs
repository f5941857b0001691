//! Three-epoch evolution and trajectory classification.

use styloprint_math::{per_unit, round_f64};
use styloprint_text::TextStats;
use styloprint_types::{
    Document, Period, PeriodMetrics, TemporalEvolution, Trajectory, TrajectoryKind,
};
use tracing::debug;

use crate::time_ordered;

/// Fewer documents than this yield [`default_evolution`].
pub const MIN_DOCUMENTS: usize = 3;

const EXPANSION_RATIO: f64 = 1.2;
const COMPRESSION_RATIO: f64 = 0.8;

const PERIOD_LABELS: [&str; 3] = ["Early Period", "Middle Period", "Recent Period"];
const EMERGING_LABEL: &str = "Emerging Voice";

/// Descriptive label for an epoch's mean sentence length.
pub fn archetype_label(complexity: f64) -> &'static str {
    if complexity > 20.0 {
        "Deep Analyst"
    } else if complexity > 15.0 {
        "Balanced Thinker"
    } else {
        "Efficient Communicator"
    }
}

pub fn classify_trajectory(early_complexity: f64, recent_complexity: f64) -> TrajectoryKind {
    if recent_complexity > early_complexity * EXPANSION_RATIO {
        TrajectoryKind::ExploratoryExpansion
    } else if recent_complexity < early_complexity * COMPRESSION_RATIO {
        TrajectoryKind::CompressionAbstraction
    } else {
        TrajectoryKind::Crystallization
    }
}

pub fn trajectory(kind: TrajectoryKind) -> Trajectory {
    let (description, prognosis) = match kind {
        TrajectoryKind::ExploratoryExpansion => (
            "Sentences have grown longer and more elaborate over time, reaching into wider territory.",
            "Expect continued range-building; structure will likely consolidate once the new ground is mapped.",
        ),
        TrajectoryKind::CompressionAbstraction => (
            "Sentences have grown shorter over time as ideas are distilled into tighter forms.",
            "Expect sharper, more economical writing that leans on established concepts.",
        ),
        TrajectoryKind::Crystallization => (
            "Sentence length has held steady across the corpus, pointing to a settled voice.",
            "Expect refinement within the current style rather than large structural shifts.",
        ),
    };
    Trajectory {
        kind,
        description: description.to_string(),
        prognosis: prognosis.to_string(),
    }
}

/// Evolution reported when there are too few documents to split.
pub fn default_evolution() -> TemporalEvolution {
    let period = |label: &str| Period {
        label: label.to_string(),
        archetype_label: EMERGING_LABEL.to_string(),
        description: "Not enough writing yet to characterize this period.".to_string(),
        key_metrics: PeriodMetrics {
            avg_length: 0.0,
            complexity: 0.0,
            document_count: 0,
            start_date: None,
            end_date: None,
        },
    };
    TemporalEvolution {
        early: period(PERIOD_LABELS[0]),
        middle: period(PERIOD_LABELS[1]),
        recent: period(PERIOD_LABELS[2]),
        trajectory: Trajectory {
            kind: TrajectoryKind::Crystallization,
            description: "Insufficient data to establish a trajectory.".to_string(),
            prognosis: format!(
                "Add at least {MIN_DOCUMENTS} dated documents to track change over time."
            ),
        },
    }
}

struct Epoch {
    metrics: PeriodMetrics,
    /// Unrounded pooled sentence length, used for trajectory comparison.
    complexity: f64,
}

fn epoch(docs: &[&Document]) -> Epoch {
    let mut words = 0usize;
    let mut sentences = 0usize;
    for doc in docs {
        let stats = TextStats::of(&doc.content);
        words += stats.word_count;
        sentences += stats.sentence_count;
    }
    let complexity = per_unit(words as f64, sentences);
    Epoch {
        metrics: PeriodMetrics {
            avg_length: round_f64(per_unit(words as f64, docs.len()), 1),
            complexity: round_f64(complexity, 2),
            document_count: docs.len(),
            start_date: docs.first().map(|d| d.date),
            end_date: docs.last().map(|d| d.date),
        },
        complexity,
    }
}

fn period(label: &str, epoch: Epoch) -> Period {
    let m = &epoch.metrics;
    let archetype = archetype_label(epoch.complexity);
    Period {
        label: label.to_string(),
        archetype_label: archetype.to_string(),
        description: format!(
            "{} documents averaging {:.0} words with {:.1} words per sentence.",
            m.document_count, m.avg_length, m.complexity
        ),
        key_metrics: epoch.metrics,
    }
}

/// Split the corpus into early, middle, and recent thirds.
///
/// Each of the first two epochs holds `n / 3` documents; the remainder
/// lands in the recent epoch.
pub fn analyze_evolution<'a, I>(docs: I) -> TemporalEvolution
where
    I: IntoIterator<Item = &'a Document>,
{
    let ordered = time_ordered(docs);
    if ordered.len() < MIN_DOCUMENTS {
        debug!(documents = ordered.len(), "too few documents for evolution");
        return default_evolution();
    }

    let third = ordered.len() / 3;
    let early = epoch(&ordered[..third]);
    let middle = epoch(&ordered[third..2 * third]);
    let recent = epoch(&ordered[2 * third..]);

    let kind = classify_trajectory(early.complexity, recent.complexity);
    debug!(
        early = early.complexity,
        recent = recent.complexity,
        ?kind,
        "trajectory classified"
    );

    TemporalEvolution {
        early: period(PERIOD_LABELS[0], early),
        middle: period(PERIOD_LABELS[1], middle),
        recent: period(PERIOD_LABELS[2], recent),
        trajectory: trajectory(kind),
    }
}
