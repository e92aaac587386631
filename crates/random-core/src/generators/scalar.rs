//! Natural number and integer generators.

use crate::source::UniformSource;
use tracing::trace;

/// Default lower bound for [`generate_natural`].
pub const NATURAL_MIN: i64 = 0;
/// Default upper bound for [`generate_natural`] (2^53).
pub const NATURAL_MAX: i64 = 9_007_199_254_740_992;
/// Default lower bound for [`generate_integer`] (-2^53).
pub const INTEGER_MIN: i64 = -NATURAL_MAX;
/// Default upper bound for [`generate_integer`] (2^53).
pub const INTEGER_MAX: i64 = NATURAL_MAX;

/// Generate a natural number in `[min, max]`.
///
/// Computed as `round(u * (max - min)) + min`. Rounding leaves each endpoint
/// with half the weight of an interior value; this skew is part of the
/// contract and is kept as-is. Reversed bounds are swapped first.
pub fn generate_natural<S: UniformSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    generate_rounded(source, min, max)
}

/// Generate a signed integer in `[min, max]`.
///
/// Same formula as [`generate_natural`]; only the default bounds differ.
pub fn generate_integer<S: UniformSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    generate_rounded(source, min, max)
}

/// Order a bound pair so that the first element is the smaller one.
pub(crate) fn ordered_bounds(min: i64, max: i64) -> (i64, i64) {
    if min > max {
        trace!(min, max, "swapping reversed bounds");
        (max, min)
    } else {
        (min, max)
    }
}

fn generate_rounded<S: UniformSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    let (min, max) = ordered_bounds(min, max);
    let span = max as f64 - min as f64;
    let offset = (source.next_f64() * span).round() as i128;
    // Spans wider than 2^53 are not exact in f64.
    (i128::from(min) + offset).clamp(i128::from(min), i128::from(max)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, SequenceSource};

    #[test]
    fn test_natural_formula() {
        let mut source = SequenceSource::new(vec![0.0, 0.24, 0.26, 0.999_999]);

        assert_eq!(generate_natural(&mut source, 10, 12), 10);
        assert_eq!(generate_natural(&mut source, 10, 12), 10);
        assert_eq!(generate_natural(&mut source, 10, 12), 11);
        assert_eq!(generate_natural(&mut source, 10, 12), 12);
    }

    #[test]
    fn test_natural_in_range() {
        let mut source = RngSource::seeded(42);

        for _ in 0..1000 {
            let value = generate_natural(&mut source, 10, 20);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn test_integer_allows_negative() {
        let mut source = RngSource::seeded(42);
        let mut saw_negative = false;

        for _ in 0..1000 {
            let value = generate_integer(&mut source, -50, 50);
            assert!((-50..=50).contains(&value));
            saw_negative |= value < 0;
        }

        assert!(saw_negative);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let mut source = SequenceSource::new(vec![0.0, 0.999_999]);

        assert_eq!(generate_natural(&mut source, 9, 3), 3);
        assert_eq!(generate_natural(&mut source, 9, 3), 9);
    }

    #[test]
    fn test_equal_bounds() {
        let mut source = RngSource::seeded(7);
        assert_eq!(generate_integer(&mut source, 5, 5), 5);
    }

    #[test]
    fn test_default_bounds() {
        let mut source = SequenceSource::new(vec![0.0, 0.5, 0.999_999_999_999]);

        assert_eq!(generate_integer(&mut source, INTEGER_MIN, INTEGER_MAX), INTEGER_MIN);
        assert_eq!(generate_integer(&mut source, INTEGER_MIN, INTEGER_MAX), 0);
        assert!(generate_natural(&mut source, NATURAL_MIN, NATURAL_MAX) <= NATURAL_MAX);
    }

    #[test]
    fn test_extreme_bounds_stay_in_range() {
        let mut source = SequenceSource::new(vec![0.0, 0.999_999_999_999_999]);

        assert_eq!(generate_integer(&mut source, i64::MIN, i64::MAX), i64::MIN);
        assert!(generate_integer(&mut source, i64::MIN, i64::MAX) > 0);
    }
}
