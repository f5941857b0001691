//! # styloprint-temporal
//!
//! **Tier 2 (Time)**
//!
//! Everything in a styloprint analysis that depends on document dates:
//!
//! * [`filter_by_timeframe`] selects the recency window.
//! * [`analyze_evolution`] splits the time-ordered corpus into three epochs
//!   and classifies the trajectory between them.
//! * [`build_series`] emits one feature vector per document.
//!
//! All orderings are stable ascending by date, so documents sharing a date
//! keep their input order.

mod evolution;
mod filter;
mod longitudinal;

use styloprint_types::Document;

pub use evolution::{
    MIN_DOCUMENTS, analyze_evolution, archetype_label, classify_trajectory, default_evolution,
    trajectory,
};
pub use filter::{cutoff, filter_by_timeframe};
pub use longitudinal::{build_series, longitudinal_point};

/// Borrow `docs` in stable ascending date order.
pub fn time_ordered<'a, I>(docs: I) -> Vec<&'a Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut ordered: Vec<&Document> = docs.into_iter().collect();
    ordered.sort_by_key(|d| d.date);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn time_order_is_stable_for_equal_dates() {
        let day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let docs = vec![
            Document::new("b", "", later),
            Document::new("a1", "", day),
            Document::new("a2", "", day),
        ];
        let ids: Vec<&str> = time_ordered(&docs).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b"]);
    }
}
