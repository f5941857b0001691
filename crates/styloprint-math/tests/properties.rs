use proptest::prelude::*;
use styloprint_math::{clamp01, lerp, per_unit, round_f64};

proptest! {
    #[test]
    fn clamp01_is_always_in_unit_interval(value in proptest::num::f64::ANY) {
        let got = clamp01(value);
        prop_assert!((0.0..=1.0).contains(&got));
    }

    #[test]
    fn clamp01_is_idempotent(value in -10.0f64..10.0) {
        prop_assert_eq!(clamp01(clamp01(value)), clamp01(value));
    }

    #[test]
    fn lerp_stays_between_endpoints(lo in 0.0f64..50.0, span in 0.0f64..50.0, t in -2.0f64..3.0) {
        let hi = lo + span;
        let got = lerp(lo, hi, t);
        prop_assert!(got >= lo && got <= hi);
    }

    #[test]
    fn lerp_is_monotonic_in_t(lo in 0.0f64..50.0, span in 0.0f64..50.0,
                              t1 in 0.0f64..=1.0, t2 in 0.0f64..=1.0) {
        let hi = lo + span;
        if t1 <= t2 {
            prop_assert!(lerp(lo, hi, t1) <= lerp(lo, hi, t2));
        }
    }

    #[test]
    fn per_unit_is_finite(numer in 0.0f64..1e6, denom in 0usize..10_000) {
        prop_assert!(per_unit(numer, denom).is_finite());
    }

    #[test]
    fn round_f64_is_idempotent(value in -1e6f64..1e6, decimals in 0u32..6) {
        let once = round_f64(value, decimals);
        prop_assert_eq!(round_f64(once, decimals), once);
    }
}
