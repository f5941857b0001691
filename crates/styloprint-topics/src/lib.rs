//! # styloprint-topics
//!
//! Topic distribution over a fixed five-topic taxonomy.
//!
//! Keyword matches per topic are normalized once into percentages of the
//! total. Topics at or below [`MIN_SHARE`] percent are dropped from the
//! reported distribution.

use std::collections::BTreeMap;

use styloprint_markers::{Feature, MarkerLibrary};
use styloprint_math::round_f64;
use styloprint_types::{TopicDistribution, TopicKind, TopicShare};
use tracing::debug;

/// Survivors must exceed this percentage.
pub const MIN_SHARE: f64 = 5.0;
/// A top topic above this percentage is described on its own.
pub const SINGLE_FOCUS_SHARE: f64 = 60.0;

pub fn display_name(topic: TopicKind) -> &'static str {
    match topic {
        TopicKind::Technology => "Technology",
        TopicKind::Philosophy => "Philosophy",
        TopicKind::Science => "Science",
        TopicKind::Arts => "Arts",
        TopicKind::Business => "Business",
    }
}

/// Presentation color token; the dashboard maps these to its palette.
pub fn color_token(topic: TopicKind) -> &'static str {
    match topic {
        TopicKind::Technology => "blue-500",
        TopicKind::Philosophy => "purple-500",
        TopicKind::Science => "green-500",
        TopicKind::Arts => "pink-500",
        TopicKind::Business => "amber-500",
    }
}

pub fn psychological_implication(topic: TopicKind) -> &'static str {
    match topic {
        TopicKind::Technology => "a drive to understand how systems work and how to improve them",
        TopicKind::Philosophy => "a pull toward first principles and questions of meaning",
        TopicKind::Science => "an evidence-first habit of testing ideas against observation",
        TopicKind::Arts => "sensitivity to expression, form, and emotional resonance",
        TopicKind::Business => "a pragmatic focus on outcomes, value, and execution",
    }
}

pub fn cognitive_style(topic: TopicKind) -> &'static str {
    match topic {
        TopicKind::Technology => "Systems-oriented problem solver",
        TopicKind::Philosophy => "Reflective conceptual thinker",
        TopicKind::Science => "Empirical analytical thinker",
        TopicKind::Arts => "Expressive creative thinker",
        TopicKind::Business => "Strategic pragmatic thinker",
    }
}

fn share(topic: TopicKind, percentage: f64) -> TopicShare {
    TopicShare {
        topic,
        name: display_name(topic).to_string(),
        percentage,
        color_token: color_token(topic).to_string(),
        psychological_implication: psychological_implication(topic).to_string(),
    }
}

/// Percentages per topic in declared order, one decimal each.
///
/// With no matches at all every topic gets an equal 20%.
pub fn topic_percentages(counts: &BTreeMap<TopicKind, usize>) -> Vec<(TopicKind, f64)> {
    let total: usize = counts.values().sum();
    TopicKind::ALL
        .into_iter()
        .map(|topic| {
            let pct = if total == 0 {
                100.0 / TopicKind::ALL.len() as f64
            } else {
                let count = counts.get(&topic).copied().unwrap_or(0);
                count as f64 / total as f64 * 100.0
            };
            (topic, round_f64(pct, 1))
        })
        .collect()
}

pub fn interpret(dominant: &[TopicShare]) -> String {
    match dominant {
        [] => "No clear topical focus yet.".to_string(),
        [top] => single_focus(top),
        [top, _, ..] if top.percentage > SINGLE_FOCUS_SHARE => single_focus(top),
        [top, second, ..] => format!(
            "A blend of {} and {} reflects {}, balanced by {}.",
            top.name.to_lowercase(),
            second.name.to_lowercase(),
            top.psychological_implication,
            second.psychological_implication
        ),
    }
}

fn single_focus(top: &TopicShare) -> String {
    format!(
        "A strong focus on {} ({:.1}%) points to {}.",
        top.name.to_lowercase(),
        top.percentage,
        top.psychological_implication
    )
}

/// Build the distribution from raw per-topic counts.
pub fn distribution_from_counts(counts: &BTreeMap<TopicKind, usize>) -> TopicDistribution {
    let total_matches = counts.values().sum();
    let mut dominant: Vec<TopicShare> = topic_percentages(counts)
        .into_iter()
        .filter(|(_, pct)| *pct > MIN_SHARE)
        .map(|(topic, pct)| share(topic, pct))
        .collect();
    dominant.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.topic.cmp(&b.topic))
    });

    let top = dominant
        .first()
        .map(|s| s.topic)
        .unwrap_or(TopicKind::ALL[0]);
    TopicDistribution {
        interpretation: interpret(&dominant),
        cognitive_style: cognitive_style(top).to_string(),
        dominant,
        total_matches,
    }
}

/// Count topic keywords over the corpus text and build the distribution.
pub fn analyze_topics(text: &str, markers: &MarkerLibrary) -> TopicDistribution {
    let counts: BTreeMap<TopicKind, usize> = TopicKind::ALL
        .into_iter()
        .map(|topic| (topic, markers.count(Feature::Topic(topic), text)))
        .collect();
    let distribution = distribution_from_counts(&counts);
    debug!(
        total_matches = distribution.total_matches,
        survivors = distribution.dominant.len(),
        "topic distribution built"
    );
    distribution
}

/// Every topic at an equal share; used before any text has been seen.
pub fn uniform_distribution() -> TopicDistribution {
    distribution_from_counts(&BTreeMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(TopicKind, usize)]) -> BTreeMap<TopicKind, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn zero_matches_spread_evenly() {
        let pcts = topic_percentages(&BTreeMap::new());
        assert_eq!(pcts.len(), 5);
        assert!(pcts.iter().all(|(_, p)| *p == 20.0));
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        let pcts = topic_percentages(&counts(&[
            (TopicKind::Technology, 1),
            (TopicKind::Science, 2),
        ]));
        assert_eq!(pcts[0], (TopicKind::Technology, 33.3));
        assert_eq!(pcts[2], (TopicKind::Science, 66.7));
        assert_eq!(pcts[1], (TopicKind::Philosophy, 0.0));
    }

    #[test]
    fn filter_is_strictly_above_five_percent() {
        // 1 of 20 is exactly 5%.
        let d = distribution_from_counts(&counts(&[
            (TopicKind::Technology, 19),
            (TopicKind::Arts, 1),
        ]));
        assert_eq!(d.dominant.len(), 1);
        assert_eq!(d.dominant[0].topic, TopicKind::Technology);
        assert_eq!(d.total_matches, 20);
    }

    #[test]
    fn ties_keep_declared_order() {
        let d = distribution_from_counts(&counts(&[
            (TopicKind::Business, 3),
            (TopicKind::Philosophy, 3),
        ]));
        let order: Vec<TopicKind> = d.dominant.iter().map(|s| s.topic).collect();
        assert_eq!(order, vec![TopicKind::Philosophy, TopicKind::Business]);
        assert_eq!(d.cognitive_style, "Reflective conceptual thinker");
    }

    #[test]
    fn interpretation_switches_on_dominance() {
        let single = distribution_from_counts(&counts(&[
            (TopicKind::Science, 7),
            (TopicKind::Arts, 3),
        ]));
        assert!(single.interpretation.starts_with("A strong focus on science"));

        let blend = distribution_from_counts(&counts(&[
            (TopicKind::Science, 5),
            (TopicKind::Arts, 5),
        ]));
        assert!(blend.interpretation.starts_with("A blend of science and arts"));
    }

    #[test]
    fn uniform_distribution_lists_all_topics() {
        let d = uniform_distribution();
        assert_eq!(d.dominant.len(), 5);
        assert_eq!(d.total_matches, 0);
        assert_eq!(d.dominant[0].topic, TopicKind::Technology);
    }
}
