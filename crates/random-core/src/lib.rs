//! Random scalar and sequence generators.
//!
//! This crate produces pseudo-random natural numbers, integers, floats with a
//! controlled number of fractional digits, characters drawn from named or
//! literal pools, strings, integer ranges and IPv4-shaped addresses.
//!
//! # Architecture
//!
//! ```text
//!  UniformSource (ThreadSource | RngSource | SequenceSource)
//!        │  one f64 in [0, 1) per draw
//!        ▼
//!  scalar ──► pool ──► string
//!    │  │       │
//!    │  └──► float ◄┘
//!    └──► address          range (no randomness)
//!        │
//!        ▼
//!  Random<S> facade / crate-level functions
//! ```
//!
//! # Example
//!
//! ```rust
//! use random_core::Pool;
//!
//! let n = random_core::natural(1, 6);
//! assert!((1..=6).contains(&n));
//!
//! let pin = random_core::string_from_args(&["number".into(), 4.into()]).unwrap();
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//!
//! assert_eq!(random_core::range(0, 10, 3), vec![0, 3, 6, 9]);
//! let _ = random_core::character(&Pool::default());
//! let _ = random_core::ip();
//! ```
//!
//! Reversed bounds are swapped rather than rejected. The only error is an
//! empty pool alphabet, reported when the [`Pool`] is built.

pub mod error;
pub mod generators;
pub mod random;
pub mod source;

// Re-exports for convenience
pub use error::RandomError;
pub use generators::float::MAX_FRACTION_DIGITS;
pub use generators::pool::{Pool, PoolId};
pub use generators::range::{generate_range, generate_range_from_args};
pub use generators::scalar::{INTEGER_MAX, INTEGER_MIN, NATURAL_MAX, NATURAL_MIN};
pub use generators::string::{Arg, StringArgs, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use random::Random;
pub use source::{RngSource, SequenceSource, ThreadSource, UniformSource};

/// Natural number in `[min, max]` from the thread-local source.
pub fn natural(min: i64, max: i64) -> i64 {
    Random::new().natural(min, max)
}

/// Integer in `[min, max]` from the thread-local source.
pub fn integer(min: i64, max: i64) -> i64 {
    Random::new().integer(min, max)
}

/// Float with `natural(dmin, dmax)` fractional digits from the thread-local source.
pub fn float(min: i64, max: i64, dmin: i64, dmax: i64) -> f64 {
    Random::new().float(min, max, dmin, dmax)
}

pub fn character(pool: &Pool) -> char {
    Random::new().character(pool)
}

pub fn string(args: &StringArgs) -> String {
    Random::new().string(args)
}

pub fn string_from_args(args: &[Arg]) -> Result<String, RandomError> {
    Random::new().string_from_args(args)
}

pub fn range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    generate_range(start, stop, step)
}

pub fn ip() -> String {
    Random::new().ip()
}
