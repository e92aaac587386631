//! Arithmetic integer sequences.

/// Generate `start, start + step, ...` stopping before `stop`.
///
/// The length is `max(ceil((stop - start) / step), 0)`, so a sequence that
/// cannot reach `stop` is empty. A `step` of `0` is treated as `1`.
pub fn generate_range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let step = if step == 0 { 1 } else { step };
    let length = usize::try_from(range_length(start, stop, step)).unwrap_or(usize::MAX);

    std::iter::successors(Some(start), |value| value.checked_add(step))
        .take(length)
        .collect()
}

/// Exact `max(ceil((stop - start) / step), 0)` for a non-zero `step`.
fn range_length(start: i64, stop: i64, step: i64) -> i128 {
    let span = i128::from(stop) - i128::from(start);
    let step = i128::from(step);
    if span == 0 || (span > 0) != (step > 0) {
        return 0;
    }
    (span + step - step.signum()) / step
}

/// Resolve a positional argument list the way loosely typed callers do.
///
/// No arguments yields an empty sequence, one is `stop`, two are
/// `(start, stop)` and three are `(start, stop, step)`. Extra arguments are
/// ignored.
pub fn generate_range_from_args(args: &[i64]) -> Vec<i64> {
    match *args {
        [] => Vec::new(),
        [stop] => generate_range(0, stop, 1),
        [start, stop] => generate_range(start, stop, 1),
        [start, stop, step, ..] => generate_range(start, stop, step),
    }
}
