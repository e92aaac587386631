//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use random_core::{INTEGER_MAX, INTEGER_MIN, MAX_FRACTION_DIGITS, NATURAL_MAX, NATURAL_MIN};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mock-random")]
#[command(about = "Generate random numbers, strings, ranges, addresses and mock records")]
#[command(long_about = None)]
pub struct Cli {
    /// Seed for repeatable output (fresh randomness when omitted)
    #[arg(long, global = true, env = "MOCK_RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Number of samples or records to print
    #[arg(long, short = 'n', global = true, default_value_t = 1)]
    pub count: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Natural number in [min, max]
    Natural {
        #[arg(long, default_value_t = NATURAL_MIN, allow_negative_numbers = true)]
        min: i64,

        #[arg(long, default_value_t = NATURAL_MAX, allow_negative_numbers = true)]
        max: i64,
    },

    /// Signed integer in [min, max]
    Integer {
        #[arg(long, default_value_t = INTEGER_MIN, allow_negative_numbers = true)]
        min: i64,

        #[arg(long, default_value_t = INTEGER_MAX, allow_negative_numbers = true)]
        max: i64,
    },

    /// Float whose fractional digit count is drawn from [dmin, dmax]
    Float {
        #[arg(long, allow_negative_numbers = true)]
        min: i64,

        #[arg(long, allow_negative_numbers = true)]
        max: i64,

        /// Minimum number of fractional digits (clamped to 0..=17)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        dmin: i64,

        /// Maximum number of fractional digits (clamped to 0..=17)
        #[arg(long, default_value_t = MAX_FRACTION_DIGITS, allow_negative_numbers = true)]
        dmax: i64,
    },

    /// Single character from a named pool (lower, upper, number, symbol,
    /// alpha) or a literal alphabet
    Character {
        /// Pool name or literal alphabet; all pools combined when omitted
        pool: Option<String>,
    },

    /// Random string, resolved by argument count:
    /// (), (length), (pool length), (min max), (pool min max)
    String {
        /// Integer-looking tokens are numbers, everything else is text
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Integer sequence: (stop), (start stop) or (start stop step)
    Range {
        #[arg(allow_negative_numbers = true)]
        args: Vec<i64>,
    },

    /// Dotted-quad IPv4 address
    Ip,

    /// Records from a YAML template schema, one JSON object per line
    Template {
        /// Path to the template schema
        #[arg(long)]
        schema: PathBuf,

        /// Template name within the schema
        #[arg(long)]
        name: String,
    },
}
