//! Command execution.

use crate::cli::{Cli, Commands};
use anyhow::Context;
use random_core::{generate_range_from_args, Arg, Pool, Random, RngSource, ThreadSource, UniformSource};
use random_template::{RecordGenerator, TemplateSchema};
use std::io::Write;
use tracing::{debug, info};

type BoxedSource = Box<dyn UniformSource + Send>;

fn random_for(seed: Option<u64>) -> Random<BoxedSource> {
    let source: BoxedSource = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(ThreadSource),
    };
    Random::with_source(source)
}

/// Execute the parsed command, writing samples to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let mut random = random_for(cli.seed);
    let count = cli.count;
    debug!(seed = ?cli.seed, count, command = ?cli.command, "running command");

    match cli.command {
        Commands::Natural { min, max } => {
            for _ in 0..count {
                writeln!(out, "{}", random.natural(min, max))?;
            }
        }
        Commands::Integer { min, max } => {
            for _ in 0..count {
                writeln!(out, "{}", random.integer(min, max))?;
            }
        }
        Commands::Float {
            min,
            max,
            dmin,
            dmax,
        } => {
            for _ in 0..count {
                writeln!(out, "{}", random.float_text(min, max, dmin, dmax))?;
            }
        }
        Commands::Character { pool } => {
            let pool = match pool {
                Some(id) => Pool::resolve(&id).with_context(|| format!("Invalid pool '{id}'"))?,
                None => Pool::default(),
            };
            for _ in 0..count {
                writeln!(out, "{}", random.character(&pool))?;
            }
        }
        Commands::String { args } => {
            let args: Vec<Arg> = args.iter().map(|token| Arg::parse_token(token)).collect();
            for _ in 0..count {
                let value = random
                    .string_from_args(&args)
                    .context("Failed to resolve string arguments")?;
                writeln!(out, "{value}")?;
            }
        }
        Commands::Range { args } => {
            let sequence = generate_range_from_args(&args);
            let line = serde_json::to_string(&sequence)?;
            for _ in 0..count {
                writeln!(out, "{line}")?;
            }
        }
        Commands::Ip => {
            for _ in 0..count {
                writeln!(out, "{}", random.ip())?;
            }
        }
        Commands::Template { schema, name } => {
            let template_schema = TemplateSchema::from_file(&schema)
                .with_context(|| format!("Failed to load template schema {}", schema.display()))?;

            let mut generator = RecordGenerator::new(template_schema);
            if let Some(seed) = cli.seed {
                generator = generator.with_seed(seed);
            }

            info!(template = %name, count, "generating records");
            for record in generator.records(&name, count)? {
                let record = record.with_context(|| format!("Failed to generate '{name}'"))?;
                writeln!(out, "{}", record.to_json())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> anyhow::Result<Vec<String>> {
        let cli = Cli::try_parse_from(std::iter::once("mock-random").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?.lines().map(str::to_string).collect())
    }

    #[test]
    fn test_natural_count() {
        let lines = run_args(&["natural", "--min", "1", "--max", "6", "-n", "20"]).unwrap();
        assert_eq!(lines.len(), 20);
        for line in lines {
            let value: i64 = line.parse().unwrap();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_negative_integer_bounds() {
        let lines = run_args(&["integer", "--min", "-9", "--max", "-3"]).unwrap();
        let value: i64 = lines[0].parse().unwrap();
        assert!((-9..=-3).contains(&value));
    }

    #[test]
    fn test_seed_repeats_output() {
        let a = run_args(&["--seed", "42", "string", "-n", "5"]).unwrap();
        let b = run_args(&["--seed", "42", "string", "-n", "5"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_float_digits() {
        let lines = run_args(&["float", "--min", "0", "--max", "0", "--dmin", "5", "--dmax", "5"])
            .unwrap();
        let (_, fraction) = lines[0].split_once('.').unwrap();
        assert_eq!(fraction.len(), 5);
        assert!(!fraction.ends_with('0'));
    }

    #[test]
    fn test_string_overloads() {
        let lines = run_args(&["string", "number", "4"]).unwrap();
        assert_eq!(lines[0].len(), 4);
        assert!(lines[0].chars().all(|c| c.is_ascii_digit()));

        let lines = run_args(&["string", "2", "5", "-n", "50"]).unwrap();
        for line in lines {
            assert!((2..=5).contains(&line.chars().count()));
        }
    }

    #[test]
    fn test_character_pool() {
        let lines = run_args(&["character", "symbol", "-n", "10"]).unwrap();
        for line in lines {
            assert!("!@#$%^&*()[]".contains(line.as_str()));
        }
    }

    #[test]
    fn test_empty_pool_fails() {
        assert!(run_args(&["character", ""]).is_err());
    }

    #[test]
    fn test_range() {
        assert_eq!(run_args(&["range", "0", "10", "3"]).unwrap(), vec!["[0,3,6,9]"]);
        assert_eq!(run_args(&["range", "5", "2"]).unwrap(), vec!["[]"]);
    }

    #[test]
    fn test_ip() {
        let lines = run_args(&["ip"]).unwrap();
        assert!(lines[0].parse::<std::net::Ipv4Addr>().is_ok());
    }

    #[test]
    fn test_template_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yaml");
        std::fs::write(
            &path,
            r#"
templates:
  - name: points
    fields:
      - name: x
        generator:
          type: integer
          min: -5
          max: 5
"#,
        )
        .unwrap();

        let path = path.to_string_lossy().to_string();
        let lines = run_args(&["template", "--schema", &path, "--name", "points", "-n", "3"])
            .unwrap();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(&line).unwrap();
            let x = value["x"].as_i64().unwrap();
            assert!((-5..=5).contains(&x));
        }

        assert!(run_args(&["template", "--schema", &path, "--name", "missing"]).is_err());
    }
}
