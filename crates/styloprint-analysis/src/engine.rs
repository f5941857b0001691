use std::sync::Arc;

use chrono::{DateTime, Utc};
use styloprint_archetype::classify_archetype;
use styloprint_markers::MarkerLibrary;
use styloprint_style::analyze_writing_style;
use styloprint_temporal::{analyze_evolution, build_series, filter_by_timeframe, time_ordered};
use styloprint_text::join_corpus;
use styloprint_topics::analyze_topics;
use styloprint_types::{AnalyticsResult, Document, SCHEMA_VERSION, Timeframe};
use tracing::debug;

use crate::defaults::cold_start;
use crate::signature::corpus_signature;

/// A configured analysis engine.
///
/// The marker library is immutable and shared, so an engine is cheap to
/// clone and safe to use from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    markers: Arc<MarkerLibrary>,
    parallel: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(MarkerLibrary::english())
    }
}

impl Engine {
    pub fn new(markers: MarkerLibrary) -> Self {
        Self::with_shared_markers(Arc::new(markers))
    }

    pub fn with_shared_markers(markers: Arc<MarkerLibrary>) -> Self {
        Self {
            markers,
            parallel: true,
        }
    }

    /// Toggle the rayon pool for independent extraction steps.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn analyze(&self, documents: &[Document], timeframe: Timeframe) -> AnalyticsResult {
        self.analyze_at(documents, timeframe, Utc::now())
    }

    /// Analyze with an explicit "now" for the timeframe cutoff.
    pub fn analyze_at(
        &self,
        documents: &[Document],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> AnalyticsResult {
        let filtered = filter_by_timeframe(documents, timeframe, now);
        debug!(
            total = documents.len(),
            kept = filtered.len(),
            %timeframe,
            "timeframe filter applied"
        );
        if filtered.is_empty() {
            return cold_start(timeframe);
        }

        let ordered = time_ordered(filtered);
        let corpus = join_corpus(ordered.iter().map(|d| d.content.as_str()));
        let markers = self.markers.as_ref();
        let count = ordered.len();

        let ((writing_style, cognitive_archetype), (topic_distribution, longitudinal_patterns)) =
            if self.parallel {
                rayon::join(
                    || {
                        rayon::join(
                            || analyze_writing_style(&corpus, markers),
                            || classify_archetype(&corpus, count, markers),
                        )
                    },
                    || {
                        rayon::join(
                            || analyze_topics(&corpus, markers),
                            || build_series(ordered.iter().copied(), markers, true),
                        )
                    },
                )
            } else {
                (
                    (
                        analyze_writing_style(&corpus, markers),
                        classify_archetype(&corpus, count, markers),
                    ),
                    (
                        analyze_topics(&corpus, markers),
                        build_series(ordered.iter().copied(), markers, false),
                    ),
                )
            };

        AnalyticsResult {
            schema_version: SCHEMA_VERSION,
            timeframe,
            document_count: count,
            corpus_signature: corpus_signature(&ordered),
            writing_style,
            cognitive_archetype,
            topic_distribution,
            temporal_evolution: analyze_evolution(ordered.iter().copied()),
            longitudinal_patterns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_send_and_sync() {
        assert_send_sync::<Engine>();
    }

    #[test]
    fn all_documents_outside_window_is_cold_start() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let old = Document::new("old", "Some text.", Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let r = Engine::default().analyze_at(&[old], Timeframe::SixMonths, now);
        assert_eq!(r, cold_start(Timeframe::SixMonths));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let docs: Vec<Document> = (0..6)
            .map(|i| {
                Document::new(
                    format!("d{i}"),
                    "However, the framework suggests a systematic design. Therefore we iterate.",
                    now - chrono::Duration::days(i),
                )
            })
            .collect();
        let engine = Engine::default();
        assert_eq!(
            engine.clone().parallel(true).analyze_at(&docs, Timeframe::SevenDays, now),
            engine.parallel(false).analyze_at(&docs, Timeframe::SevenDays, now)
        );
    }
}
