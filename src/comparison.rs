//! Side-by-side comparison of the Newton-Cotes rules on one test integral.
//!
//! A [`ComparisonConfig`] names the interval, the [`Integrand`], a scale
//! factor for presenting results and one [`RunConfig`] per rule. Each run
//! picks its subinterval count from a nominal step size, rounded up to a
//! count the rule accepts.
//!
//! The default configuration integrates 1/(1+x²) over [0, 1] and scales
//! every result by 4, turning each rule into an estimate of π.
//!
//! ```
//! use newton_cotes::comparison::{ComparisonConfig, run_comparison};
//!
//! let rows = run_comparison(&ComparisonConfig::default()).unwrap();
//! assert_eq!(rows.len(), 5);
//! for row in &rows {
//!     assert!((row.scaled - std::f64::consts::PI).abs() < 2e-2);
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::integrate::{IntegrateError, IntegrateResult, NewtonCotesRule};

/// Test functions with a closed-form integral.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Integrand {
    /// 1/(1+x²), whose antiderivative is atan(x).
    #[default]
    Arctangent,
    /// sin(x)
    Sine,
    /// exp(x)
    Exponential,
    /// x⁵
    Quintic,
    /// A constant function.
    Constant { value: f64 },
}

impl Integrand {
    /// Evaluate the integrand at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Arctangent => 1.0 / (1.0 + x * x),
            Self::Sine => x.sin(),
            Self::Exponential => x.exp(),
            Self::Quintic => x.powi(5),
            Self::Constant { value } => *value,
        }
    }

    /// Closed-form value of the integral over [a, b].
    pub fn exact(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Arctangent => b.atan() - a.atan(),
            Self::Sine => a.cos() - b.cos(),
            Self::Exponential => b.exp() - a.exp(),
            Self::Quintic => (b.powi(6) - a.powi(6)) / 6.0,
            Self::Constant { value } => value * (b - a),
        }
    }

    /// Formula shown in reports.
    pub fn describe(&self) -> String {
        match self {
            Self::Arctangent => "1/(1+x^2)".to_string(),
            Self::Sine => "sin(x)".to_string(),
            Self::Exponential => "exp(x)".to_string(),
            Self::Quintic => "x^5".to_string(),
            Self::Constant { value } => value.to_string(),
        }
    }
}

impl FromStr for Integrand {
    type Err = IntegrateError;

    /// Parses `arctangent`, `sine`, `exponential`, `quintic` or `constant=<value>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(value) = key.strip_prefix("constant=") {
            let value = value.parse::<f64>().map_err(|e| {
                IntegrateError::Config(format!("constant integrand '{}': {}", value, e))
            })?;
            return Ok(Self::Constant { value });
        }
        match key.as_str() {
            "arctangent" | "atan" => Ok(Self::Arctangent),
            "sine" | "sin" => Ok(Self::Sine),
            "exponential" | "exp" => Ok(Self::Exponential),
            "quintic" => Ok(Self::Quintic),
            _ => Err(IntegrateError::Config(format!("unknown integrand '{}'", s))),
        }
    }
}

/// One rule applied with a nominal step size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Rule to apply.
    pub rule: NewtonCotesRule,
    /// Nominal step size h; the subinterval count is round((b - a) / h),
    /// rounded up to a count the rule accepts.
    pub step: f64,
}

/// Comparison setup, usually read from a TOML file.
///
/// Every field is optional in the file; missing fields take the defaults.
///
/// ```toml
/// lower = 0.0
/// upper = 3.141592653589793
/// scale = 1.0
///
/// [integrand]
/// kind = "sine"
///
/// [[runs]]
/// rule = "simpson_13"
/// step = 0.1
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Lower bound a.
    pub lower: f64,
    /// Upper bound b.
    pub upper: f64,
    /// Function to integrate.
    pub integrand: Integrand,
    /// Factor applied to each result for presentation.
    pub scale: f64,
    /// Rules to run, in report order.
    pub runs: Vec<RunConfig>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        let quarter = 1.0 / 4.0;
        let sixth = 1.0 / 6.0;
        Self {
            lower: 0.0,
            upper: 1.0,
            integrand: Integrand::Arctangent,
            scale: 4.0,
            runs: vec![
                RunConfig {
                    rule: NewtonCotesRule::Trapezoid,
                    step: quarter,
                },
                RunConfig {
                    rule: NewtonCotesRule::Simpson13,
                    step: quarter,
                },
                RunConfig {
                    rule: NewtonCotesRule::Simpson38,
                    step: sixth,
                },
                RunConfig {
                    rule: NewtonCotesRule::Weddle,
                    step: sixth,
                },
                RunConfig {
                    rule: NewtonCotesRule::Boole,
                    step: quarter,
                },
            ],
        }
    }
}

impl ComparisonConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(raw: &str) -> IntegrateResult<Self> {
        let cfg: Self = toml::from_str(raw).map_err(|e| IntegrateError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> IntegrateResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| IntegrateError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded comparison config");
        Self::from_toml_str(&raw)
    }

    /// Check that the bounds and scale are finite and there is something to run.
    pub fn validate(&self) -> IntegrateResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(IntegrateError::Config(format!(
                "bounds must be finite (got [{}, {}])",
                self.lower, self.upper
            )));
        }
        if !self.scale.is_finite() {
            return Err(IntegrateError::Config(format!(
                "scale must be finite (got {})",
                self.scale
            )));
        }
        if self.runs.is_empty() {
            return Err(IntegrateError::Config("no runs configured".to_string()));
        }
        Ok(())
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// Rule that produced the value.
    pub rule: NewtonCotesRule,
    /// Nominal step size requested.
    pub step: f64,
    /// Subinterval count actually used.
    pub subintervals: usize,
    /// Approximation of the integral.
    pub value: f64,
    /// `value * scale`.
    pub scaled: f64,
    /// |value - exact integral|.
    pub abs_error: f64,
}

/// Apply every configured rule to the configured integral.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a step size cannot be
/// turned into a subinterval count.
pub fn run_comparison(config: &ComparisonConfig) -> IntegrateResult<Vec<ComparisonRow>> {
    config.validate()?;

    let (a, b) = (config.lower, config.upper);
    let integrand = config.integrand;
    let exact = integrand.exact(a, b);
    info!(
        integrand = %integrand.describe(),
        a,
        b,
        runs = config.runs.len(),
        "running comparison"
    );

    let mut rows = Vec::with_capacity(config.runs.len());
    for run in &config.runs {
        let n = run.rule.subintervals_for_step(a, b, run.step)?;
        let value = run.rule.integrate(|x| integrand.eval(x), a, b, n)?;
        let row = ComparisonRow {
            rule: run.rule,
            step: run.step,
            subintervals: n,
            value,
            scaled: config.scale * value,
            abs_error: (value - exact).abs(),
        };
        debug!(rule = %row.rule, n, value, abs_error = row.abs_error, "run finished");
        rows.push(row);
    }

    Ok(rows)
}
