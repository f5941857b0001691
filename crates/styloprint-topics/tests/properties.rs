use std::collections::BTreeMap;

use proptest::prelude::*;
use styloprint_topics::{MIN_SHARE, distribution_from_counts, topic_percentages};
use styloprint_types::TopicKind;

fn counts() -> impl Strategy<Value = BTreeMap<TopicKind, usize>> {
    prop::collection::vec(0usize..500, 5).prop_map(|values| {
        TopicKind::ALL.into_iter().zip(values).collect()
    })
}

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred(counts in counts()) {
        let sum: f64 = topic_percentages(&counts).iter().map(|(_, p)| p).sum();
        prop_assert!((sum - 100.0).abs() <= 1.0, "sum = {}", sum);
    }

    #[test]
    fn survivors_are_above_threshold_and_sorted(counts in counts()) {
        let d = distribution_from_counts(&counts);
        for s in &d.dominant {
            prop_assert!(s.percentage > MIN_SHARE && s.percentage <= 100.0);
        }
        for pair in d.dominant.windows(2) {
            prop_assert!(pair[0].percentage >= pair[1].percentage);
            if pair[0].percentage == pair[1].percentage {
                prop_assert!(pair[0].topic < pair[1].topic);
            }
        }
    }

    #[test]
    fn distribution_is_deterministic(counts in counts()) {
        prop_assert_eq!(distribution_from_counts(&counts), distribution_from_counts(&counts));
    }
}
