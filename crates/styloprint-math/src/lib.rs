//! Deterministic numeric helpers.
//!
//! Every score in a styloprint result goes through these functions so that
//! degenerate input (no words, no sentences, no matches) resolves to a finite
//! value instead of `NaN` or infinity.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Clamp to `[0, 1]`. Non-finite input maps to `0.0`.
#[must_use]
pub fn clamp01(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Divide with the denominator floored at 1.
#[must_use]
pub fn per_unit(numer: f64, denom: usize) -> f64 {
    numer / denom.max(1) as f64
}

/// Linear interpolation between `lo` and `hi`; `t` is clamped to `[0, 1]`.
#[must_use]
pub fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + (hi - lo) * clamp01(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn clamp01_bounds_and_nan() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 0.0);
    }

    #[test]
    fn per_unit_floors_denominator() {
        assert_eq!(per_unit(3.0, 0), 3.0);
        assert_eq!(per_unit(3.0, 2), 1.5);
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 2.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, -1.0), 10.0);
    }
}
