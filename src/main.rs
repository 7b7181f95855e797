use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use newton_cotes::NewtonCotesRule;
use newton_cotes::comparison::{
    ComparisonConfig, ComparisonRow, Integrand, RunConfig, run_comparison,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Step used for `--rule` entries when no `--step` is given.
const DEFAULT_STEP: f64 = 0.25;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare closed Newton-Cotes quadrature rules on one integral",
    long_about = None
)]
struct Cli {
    /// TOML file with the comparison setup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rule to run (repeatable): trapezoid, simpson_13, simpson_38, boole, weddle
    #[arg(short, long = "rule")]
    rules: Vec<NewtonCotesRule>,

    /// Nominal step size h applied to every run
    #[arg(short, long)]
    step: Option<f64>,

    /// Lower bound of integration
    #[arg(long, allow_negative_numbers = true)]
    lower: Option<f64>,

    /// Upper bound of integration
    #[arg(long, allow_negative_numbers = true)]
    upper: Option<f64>,

    /// Integrand: arctangent, sine, exponential, quintic or constant=<value>
    #[arg(short, long)]
    integrand: Option<Integrand>,

    /// Factor applied to every result when printing
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// File settings, then command-line overrides.
    fn resolve(&self) -> Result<ComparisonConfig> {
        let mut cfg = match &self.config {
            Some(path) => ComparisonConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => ComparisonConfig::default(),
        };

        if let Some(lower) = self.lower {
            cfg.lower = lower;
        }
        if let Some(upper) = self.upper {
            cfg.upper = upper;
        }
        if let Some(integrand) = self.integrand {
            cfg.integrand = integrand;
        }
        if let Some(scale) = self.scale {
            cfg.scale = scale;
        }

        if !self.rules.is_empty() {
            let step = self.step.unwrap_or(DEFAULT_STEP);
            cfg.runs = self.rules.iter().map(|&rule| RunConfig { rule, step }).collect();
        } else if let Some(step) = self.step {
            for run in &mut cfg.runs {
                run.step = step;
            }
        }

        cfg.validate().context("invalid comparison setup")?;
        Ok(cfg)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn separator() -> String {
    "=".repeat(50)
}

fn print_report(cfg: &ComparisonConfig, rows: &[ComparisonRow]) {
    println!(
        "Integrating {} over [{}, {}]",
        cfg.integrand.describe(),
        cfg.lower,
        cfg.upper
    );
    println!("{}", separator());

    for row in rows {
        println!(
            "{} (h = {}, n = {}): {}",
            row.rule, row.step, row.subintervals, row.value
        );
        println!("    |error| = {:.3e}", row.abs_error);
        println!("{}", separator());
    }

    for row in rows {
        println!("Scaled by {} ({}): {}", cfg.scale, row.rule, row.scaled);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    let cfg = cli.resolve()?;
    let rows = run_comparison(&cfg).context("comparison failed")?;
    print_report(&cfg, &rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["newton-cotes"]);
        let cfg = cli.resolve().unwrap();
        assert_eq!(cfg, ComparisonConfig::default());
    }

    #[test]
    fn test_cli_rule_overrides() {
        let cli = Cli::parse_from([
            "newton-cotes",
            "--rule",
            "boole",
            "--rule",
            "weddle",
            "--step",
            "0.1",
            "--integrand",
            "sine",
            "--lower",
            "-1",
        ]);
        let cfg = cli.resolve().unwrap();
        assert_eq!(
            cfg.runs,
            vec![
                RunConfig {
                    rule: NewtonCotesRule::Boole,
                    step: 0.1
                },
                RunConfig {
                    rule: NewtonCotesRule::Weddle,
                    step: 0.1
                },
            ]
        );
        assert_eq!(cfg.integrand, Integrand::Sine);
        assert_eq!(cfg.lower, -1.0);
    }

    #[test]
    fn test_cli_step_applies_to_every_run() {
        let cli = Cli::parse_from(["newton-cotes", "--step", "0.05"]);
        let cfg = cli.resolve().unwrap();
        assert!(cfg.runs.iter().all(|run| run.step == 0.05));
        assert_eq!(cfg.runs.len(), 5);
    }

    #[test]
    fn test_cli_rejects_unknown_rule() {
        assert!(Cli::try_parse_from(["newton-cotes", "--rule", "milne"]).is_err());
    }
}
