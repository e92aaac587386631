//! Bounded-precision float generator.

use crate::generators::pool::{generate_character, Pool, PoolId, NONZERO_DIGITS};
use crate::generators::scalar::{generate_integer, generate_natural};
use crate::source::UniformSource;

/// Upper clamp for the number of fractional digits.
pub const MAX_FRACTION_DIGITS: i64 = 17;

/// Generate the decimal text of a float: an integral part in `[min, max]`
/// followed by `natural(dmin, dmax)` fractional digits.
///
/// Both digit bounds are clamped into `[0, 17]`. The final digit is never
/// `0`, so the digit count survives parsing. With no fractional digits the
/// text is the bare integer.
pub fn generate_float_text<S: UniformSource + ?Sized>(
    source: &mut S,
    min: i64,
    max: i64,
    dmin: i64,
    dmax: i64,
) -> String {
    let integral = generate_integer(source, min, max);
    let dmin = dmin.clamp(0, MAX_FRACTION_DIGITS);
    let dmax = dmax.clamp(0, MAX_FRACTION_DIGITS);
    let digit_count = generate_natural(source, dmin, dmax) as usize;

    let mut text = integral.to_string();
    if digit_count == 0 {
        return text;
    }

    let digits = Pool::named(PoolId::Number);
    text.push('.');
    for position in 0..digit_count {
        let pool = if position + 1 < digit_count {
            &digits
        } else {
            &*NONZERO_DIGITS
        };
        text.push(generate_character(source, pool));
    }

    text
}

/// Generate a float with a bounded number of fractional digits.
///
/// See [`generate_float_text`] for the construction; this parses its output.
pub fn generate_float<S: UniformSource + ?Sized>(
    source: &mut S,
    min: i64,
    max: i64,
    dmin: i64,
    dmax: i64,
) -> f64 {
    let text = generate_float_text(source, min, max, dmin, dmax);
    text.parse().unwrap_or(f64::NAN)
}
