//! Random string generator and its call-pattern resolution.
//!
//! Loosely typed callers pass up to three arguments whose count (and, for
//! two arguments, the type of the first) selects the interpretation:
//!
//! | Args | Meaning             | Length                 |
//! |------|---------------------|------------------------|
//! | 0    | default pool        | `natural(3, 7)`        |
//! | 1    | `(length)`          | the argument           |
//! | 2    | `(pool, length)` when the first is text | the second argument |
//! | 2    | `(min, max)` when the first is numeric  | `natural(min, max)` |
//! | 3    | `(pool, min, max)`  | `natural(min, max)`    |
//! | 4+   | default pool        | `natural(3, 7)`        |
//!
//! [`StringArgs::from_args`] implements that table; typed callers build a
//! [`StringArgs`] variant directly.

use crate::error::RandomError;
use crate::generators::pool::{generate_character, Pool};
use crate::generators::scalar::generate_natural;
use crate::source::UniformSource;

/// Default lower bound for random string lengths.
pub const DEFAULT_MIN_LENGTH: i64 = 3;
/// Default upper bound for random string lengths.
pub const DEFAULT_MAX_LENGTH: i64 = 7;

/// A loosely typed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Number(i64),
    Text(String),
}

impl Arg {
    /// Interpret as a length.
    ///
    /// Numeric text is rounded up, since a loop bounded by `i < 4.5` runs five
    /// times. Text that is not a finite number counts as `0`.
    pub fn as_length(&self) -> i64 {
        match self {
            Arg::Number(n) => *n,
            Arg::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map_or(0, |value| value.ceil() as i64),
        }
    }

    /// Interpret as a pool identifier. Numbers are stringified first.
    pub fn as_pool(&self) -> Result<Pool, RandomError> {
        match self {
            Arg::Number(n) => Pool::resolve(&n.to_string()),
            Arg::Text(s) => Pool::resolve(s),
        }
    }

    /// Parse a token, preferring a number when it looks like one.
    pub fn parse_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => Arg::Number(n),
            Err(_) => Arg::Text(token.to_string()),
        }
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Number(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Number(i64::from(value))
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

/// Resolved call pattern for the string generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StringArgs {
    /// Default pool, length `natural(3, 7)`.
    #[default]
    Default,
    /// Default pool, exact length.
    Length(i64),
    /// Given pool, exact length.
    PoolLength(Pool, i64),
    /// Default pool, length `natural(min, max)`.
    Between { min: i64, max: i64 },
    /// Given pool, length `natural(min, max)`.
    PoolBetween { pool: Pool, min: i64, max: i64 },
}

impl StringArgs {
    /// Resolve a loosely typed argument list.
    ///
    /// Fails only when a pool argument resolves to an empty alphabet.
    pub fn from_args(args: &[Arg]) -> Result<Self, RandomError> {
        let resolved = match args {
            [] => StringArgs::Default,
            [length] => StringArgs::Length(length.as_length()),
            [pool @ Arg::Text(_), length] => {
                StringArgs::PoolLength(pool.as_pool()?, length.as_length())
            }
            [min @ Arg::Number(_), max] => StringArgs::Between {
                min: min.as_length(),
                max: max.as_length(),
            },
            [pool, min, max] => StringArgs::PoolBetween {
                pool: pool.as_pool()?,
                min: min.as_length(),
                max: max.as_length(),
            },
            _ => StringArgs::Default,
        };
        Ok(resolved)
    }

    /// Pick the pool and draw the length.
    pub fn resolve<S: UniformSource + ?Sized>(&self, source: &mut S) -> (Pool, usize) {
        let (pool, length) = match self {
            StringArgs::Default => (
                Pool::default(),
                generate_natural(source, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH),
            ),
            StringArgs::Length(length) => (Pool::default(), *length),
            StringArgs::PoolLength(pool, length) => (pool.clone(), *length),
            StringArgs::Between { min, max } => {
                (Pool::default(), generate_natural(source, *min, *max))
            }
            StringArgs::PoolBetween { pool, min, max } => {
                (pool.clone(), generate_natural(source, *min, *max))
            }
        };
        (pool, usize::try_from(length).unwrap_or(0))
    }
}

/// Sample `length` characters from `pool`.
pub fn generate_string<S: UniformSource + ?Sized>(
    source: &mut S,
    pool: &Pool,
    length: usize,
) -> String {
    (0..length).map(|_| generate_character(source, pool)).collect()
}

/// Resolve `args` and generate the string.
pub fn generate_string_with<S: UniformSource + ?Sized>(source: &mut S, args: &StringArgs) -> String {
    let (pool, length) = args.resolve(source);
    generate_string(source, &pool, length)
}
