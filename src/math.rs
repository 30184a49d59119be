//! Rounding, percentage and bounds helpers shared by the transitions and
//! the presentation layer.

use crate::state::Boundary;

/// Round to 2 decimal places (display precision and the precision used for
/// stock-usage arithmetic and restock costs).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `current` as a 0-100 percentage of `max`; 0 when `max` is 0.
pub fn percentage(current: f64, max: f64) -> u32 {
    if max == 0.0 {
        return 0;
    }
    (current / max * 100.0).round() as u32
}

/// Cost to fill stock from `current` up to `max`, rounded to 2 decimals.
pub fn full_restock_cost(current: f64, max: f64, price_per_unit: f64) -> f64 {
    round2((max - current) * price_per_unit)
}

/// Whether `current + to_add` stays within `max` under the given boundary
/// policy.
pub fn within_bounds(current: f64, to_add: f64, max: f64, boundary: Boundary) -> bool {
    match boundary {
        Boundary::Exclusive => current + to_add < max,
        Boundary::Inclusive => current + to_add <= max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_basic() {
        assert!((round2(0.666) - 0.67).abs() < 1e-9);
        assert!((round2(0.664) - 0.66).abs() < 1e-9);
        assert!((round2(99.4) - 99.4).abs() < 1e-9);
    }

    #[test]
    fn round2_negative() {
        assert!((round2(-1.005) - -1.0).abs() < 0.01);
    }

    #[test]
    fn percentage_basic() {
        assert_eq!(percentage(50.0, 100.0), 50);
        assert_eq!(percentage(100.0, 100.0), 100);
        assert_eq!(percentage(99.4, 100.0), 99);
    }

    #[test]
    fn percentage_zero_max() {
        assert_eq!(percentage(50.0, 0.0), 0);
    }

    #[test]
    fn full_restock_cost_rounds() {
        // (100 - 99.4) * 1 = 0.6000000000000028 in floats
        assert!((full_restock_cost(99.4, 100.0, 1.0) - 0.6).abs() < 1e-9);
        assert!((full_restock_cost(0.0, 100.0, 2.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn within_bounds_exclusive_rejects_exact_fill() {
        assert!(within_bounds(90.0, 9.0, 100.0, Boundary::Exclusive));
        assert!(!within_bounds(90.0, 10.0, 100.0, Boundary::Exclusive));
    }

    #[test]
    fn within_bounds_inclusive_accepts_exact_fill() {
        assert!(within_bounds(90.0, 10.0, 100.0, Boundary::Inclusive));
        assert!(!within_bounds(90.0, 10.1, 100.0, Boundary::Inclusive));
    }
}
