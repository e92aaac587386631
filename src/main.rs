//! Command-line interface for mock-random
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten dice rolls
//! mock-random natural --min 1 --max 6 -n 10
//!
//! # A float with exactly three fractional digits
//! mock-random float --min 0 --max 100 --dmin 3 --dmax 3
//!
//! # A 4-digit PIN, then a string of 2 to 5 characters
//! mock-random string number 4
//! mock-random string 2 5
//!
//! # Integer sequence as JSON
//! mock-random range 0 10 3
//!
//! # Repeatable records from a template schema
//! mock-random --seed 42 template --schema users.yaml --name users -n 100
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::Parser;
use mock_random::{run, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
