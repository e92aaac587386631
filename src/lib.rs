//! mock-random: command-line front end for the `random-core` generators and
//! `random-template` record templates.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::run;
