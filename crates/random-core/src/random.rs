//! The [`Random`] facade: every generator bound to one source.

use crate::error::RandomError;
use crate::generators::address::generate_ip;
use crate::generators::float::{generate_float, generate_float_text};
use crate::generators::pool::{generate_character, Pool};
use crate::generators::scalar::{
    generate_integer, generate_natural, INTEGER_MAX, INTEGER_MIN, NATURAL_MAX, NATURAL_MIN,
};
use crate::generators::string::{generate_string_with, Arg, StringArgs};
use crate::source::{RngSource, ThreadSource, UniformSource};
use rand::rngs::StdRng;
use std::net::Ipv4Addr;

/// Random value generator over a [`UniformSource`].
///
/// ```rust
/// use random_core::{Pool, PoolId, Random};
///
/// let mut random = Random::seeded(42);
/// let code = random.string_from_pool(&Pool::named(PoolId::Number), 4);
/// assert_eq!(code.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Random<S = ThreadSource> {
    source: S,
}

impl Random<ThreadSource> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Random<RngSource<StdRng>> {
    /// A repeatable generator. Mainly useful in tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl<S: UniformSource> Random<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn natural(&mut self, min: i64, max: i64) -> i64 {
        generate_natural(&mut self.source, min, max)
    }

    /// `natural(0, 2^53)`
    pub fn any_natural(&mut self) -> i64 {
        self.natural(NATURAL_MIN, NATURAL_MAX)
    }

    pub fn integer(&mut self, min: i64, max: i64) -> i64 {
        generate_integer(&mut self.source, min, max)
    }

    /// `integer(-2^53, 2^53)`
    pub fn any_integer(&mut self) -> i64 {
        self.integer(INTEGER_MIN, INTEGER_MAX)
    }

    pub fn float(&mut self, min: i64, max: i64, dmin: i64, dmax: i64) -> f64 {
        generate_float(&mut self.source, min, max, dmin, dmax)
    }

    /// Same draws as [`Random::float`], returned before parsing.
    pub fn float_text(&mut self, min: i64, max: i64, dmin: i64, dmax: i64) -> String {
        generate_float_text(&mut self.source, min, max, dmin, dmax)
    }

    pub fn character(&mut self, pool: &Pool) -> char {
        generate_character(&mut self.source, pool)
    }

    pub fn string(&mut self, args: &StringArgs) -> String {
        generate_string_with(&mut self.source, args)
    }

    /// Default pool, length in `[3, 7]`.
    pub fn any_string(&mut self) -> String {
        self.string(&StringArgs::Default)
    }

    pub fn string_of_length(&mut self, length: i64) -> String {
        self.string(&StringArgs::Length(length))
    }

    pub fn string_from_pool(&mut self, pool: &Pool, length: i64) -> String {
        self.string(&StringArgs::PoolLength(pool.clone(), length))
    }

    pub fn string_in_range(&mut self, min: i64, max: i64) -> String {
        self.string(&StringArgs::Between { min, max })
    }

    pub fn string_from_pool_in_range(&mut self, pool: &Pool, min: i64, max: i64) -> String {
        self.string(&StringArgs::PoolBetween {
            pool: pool.clone(),
            min,
            max,
        })
    }

    /// Resolve a loosely typed argument list, then generate.
    pub fn string_from_args(&mut self, args: &[Arg]) -> Result<String, RandomError> {
        let args = StringArgs::from_args(args)?;
        Ok(self.string(&args))
    }

    pub fn ip_addr(&mut self) -> Ipv4Addr {
        generate_ip(&mut self.source)
    }

    /// Dotted-quad text of [`Random::ip_addr`].
    pub fn ip(&mut self) -> String {
        self.ip_addr().to_string()
    }
}
