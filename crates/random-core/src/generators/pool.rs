//! Character pools and single-character sampling.
//!
//! A pool is an ordered alphabet. Named pools (`lower`, `upper`, `number`,
//! `symbol`, `alpha` and the default full pool) live in a process-wide table
//! built on first use. Any identifier that does not name a pool is taken as a
//! literal alphabet.

use crate::error::RandomError;
use crate::generators::scalar::generate_natural;
use crate::source::UniformSource;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBER: &str = "0123456789";
const SYMBOL: &str = "!@#$%^&*()[]";

/// Identifier of a named pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolId {
    Lower,
    Upper,
    Number,
    Symbol,
    /// `lower` + `upper`
    Alpha,
    /// `lower` + `upper` + `number` + `symbol`; used when no pool is given.
    All,
}

impl PoolId {
    pub const ALL_IDS: [PoolId; 6] = [
        PoolId::Lower,
        PoolId::Upper,
        PoolId::Number,
        PoolId::Symbol,
        PoolId::Alpha,
        PoolId::All,
    ];

    /// Look up a named pool, ignoring ASCII case.
    ///
    /// The default pool has no name and is never returned here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lower" => Some(PoolId::Lower),
            "upper" => Some(PoolId::Upper),
            "number" => Some(PoolId::Number),
            "symbol" => Some(PoolId::Symbol),
            "alpha" => Some(PoolId::Alpha),
            _ => None,
        }
    }

    fn alphabet(self) -> String {
        match self {
            PoolId::Lower => LOWER.to_string(),
            PoolId::Upper => UPPER.to_string(),
            PoolId::Number => NUMBER.to_string(),
            PoolId::Symbol => SYMBOL.to_string(),
            PoolId::Alpha => [LOWER, UPPER].concat(),
            PoolId::All => [LOWER, UPPER, NUMBER, SYMBOL].concat(),
        }
    }
}

// Indexed by `PoolId as usize`; `ALL_IDS` follows declaration order.
static NAMED_POOLS: LazyLock<[Pool; 6]> = LazyLock::new(|| {
    PoolId::ALL_IDS.map(|id| Pool::from_chars(id.alphabet().chars().collect()))
});

pub(crate) static NONZERO_DIGITS: LazyLock<Pool> =
    LazyLock::new(|| Pool::from_chars("123456789".chars().collect()));

/// A non-empty alphabet to sample characters from.
///
/// Cloning is cheap; the characters are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    alphabet: Arc<[char]>,
}

impl Pool {
    fn from_chars(chars: Vec<char>) -> Self {
        Self {
            alphabet: chars.into(),
        }
    }

    /// A named pool from the shared table.
    pub fn named(id: PoolId) -> Self {
        NAMED_POOLS[id as usize].clone()
    }

    /// Resolve an identifier: a named pool if it matches one, otherwise the
    /// identifier itself as a literal alphabet.
    pub fn resolve(identifier: &str) -> Result<Self, RandomError> {
        if let Some(id) = PoolId::from_name(identifier) {
            return Ok(Self::named(id));
        }
        Self::literal(identifier)
    }

    /// Use `alphabet` verbatim, without named-pool lookup.
    pub fn literal(alphabet: &str) -> Result<Self, RandomError> {
        if alphabet.is_empty() {
            return Err(RandomError::InvalidPool(alphabet.to_string()));
        }
        Ok(Self::from_chars(alphabet.chars().collect()))
    }

    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Whether the alphabet has no characters. Pools built through
    /// [`Pool::resolve`] or [`Pool::literal`] never do.
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::named(PoolId::All)
    }
}

impl From<PoolId> for Pool {
    fn from(id: PoolId) -> Self {
        Self::named(id)
    }
}

impl FromStr for Pool {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.alphabet.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Pick one character from `pool` at index `natural(0, len - 1)`.
pub fn generate_character<S: UniformSource + ?Sized>(source: &mut S, pool: &Pool) -> char {
    let last = pool.len().saturating_sub(1) as i64;
    let index = generate_natural(source, 0, last) as usize;
    pool.alphabet[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, SequenceSource};

    #[test]
    fn test_named_pools() {
        assert_eq!(Pool::named(PoolId::Number).to_string(), "0123456789");
        assert_eq!(Pool::named(PoolId::Symbol).to_string(), "!@#$%^&*()[]");
        assert_eq!(Pool::named(PoolId::Alpha).len(), 52);
        assert_eq!(Pool::named(PoolId::All).len(), 26 + 26 + 10 + 12);
        assert_eq!(Pool::default(), Pool::named(PoolId::All));
    }

    #[test]
    fn test_named_table_matches_ids() {
        for id in PoolId::ALL_IDS {
            assert_eq!(Pool::named(id).to_string(), id.alphabet());
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Pool::resolve("UPPER").unwrap(), Pool::named(PoolId::Upper));
        assert_eq!(Pool::resolve("Lower").unwrap(), Pool::named(PoolId::Lower));
    }

    #[test]
    fn test_unknown_identifier_is_literal() {
        let pool = Pool::resolve("unknownpool").unwrap();
        assert_eq!(pool.to_string(), "unknownpool");
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert_eq!(
            Pool::resolve(""),
            Err(RandomError::InvalidPool(String::new()))
        );
        assert!("".parse::<Pool>().is_err());
    }

    #[test]
    fn test_literal_skips_named_lookup() {
        let pool = Pool::literal("number").unwrap();
        assert_eq!(pool.len(), 6);
        assert!(pool.contains('u'));
    }

    #[test]
    fn test_character_index_formula() {
        let pool = Pool::literal("abc").unwrap();
        let mut source = SequenceSource::new(vec![0.0, 0.5, 0.999]);

        assert_eq!(generate_character(&mut source, &pool), 'a');
        assert_eq!(generate_character(&mut source, &pool), 'b');
        assert_eq!(generate_character(&mut source, &pool), 'c');
    }

    #[test]
    fn test_character_from_named_pool() {
        let pool = Pool::named(PoolId::Number);
        let mut source = RngSource::seeded(42);

        for _ in 0..500 {
            assert!(generate_character(&mut source, &pool).is_ascii_digit());
        }
    }

    #[test]
    fn test_single_char_pool() {
        let pool = Pool::literal("z").unwrap();
        let mut source = RngSource::seeded(1);
        assert_eq!(generate_character(&mut source, &pool), 'z');
    }

    #[test]
    fn test_multibyte_literal() {
        let pool = Pool::literal("αβγ").unwrap();
        let mut source = RngSource::seeded(3);

        for _ in 0..50 {
            assert!("αβγ".contains(generate_character(&mut source, &pool)));
        }
    }
}
