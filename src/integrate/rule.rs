//! Catalogue of the composite Newton-Cotes rules.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature;

/// Composite closed Newton-Cotes rule.
///
/// # Available Rules
///
/// | Rule | Panels per block | Degree of exactness |
/// |------|------------------|---------------------|
/// | Trapezoid | 1 | 1 |
/// | Simpson13 | 2 | 3 |
/// | Simpson38 | 3 | 3 |
/// | Boole | 4 | 5 |
/// | Weddle | 6 | 5 |
///
/// The number of subintervals handed to a rule must be a positive multiple
/// of its panel width so that [a, b] splits into whole blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewtonCotesRule {
    /// Trapezoidal rule, linear interpolation on every panel.
    Trapezoid,

    /// Simpson's 1/3 rule, quadratic interpolation on pairs of panels.
    #[serde(rename = "simpson_13")]
    Simpson13,

    /// Simpson's 3/8 rule, cubic interpolation on triples of panels.
    #[serde(rename = "simpson_38")]
    Simpson38,

    /// Boole's rule, quartic interpolation on blocks of four panels.
    Boole,

    /// Weddle's rule on blocks of six panels.
    Weddle,
}

impl NewtonCotesRule {
    /// Every rule, ordered by panel width.
    pub const ALL: [NewtonCotesRule; 5] = [
        Self::Trapezoid,
        Self::Simpson13,
        Self::Simpson38,
        Self::Boole,
        Self::Weddle,
    ];

    /// Number of subintervals spanned by one block of the composite rule.
    pub fn panel_width(&self) -> usize {
        match self {
            Self::Trapezoid => 1,
            Self::Simpson13 => 2,
            Self::Simpson38 => 3,
            Self::Boole => 4,
            Self::Weddle => 6,
        }
    }

    /// Highest polynomial degree the rule integrates exactly.
    pub fn degree_of_exactness(&self) -> usize {
        match self {
            Self::Trapezoid => 1,
            Self::Simpson13 | Self::Simpson38 => 3,
            Self::Boole | Self::Weddle => 5,
        }
    }

    /// Short machine name, as used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trapezoid => "trapezoid",
            Self::Simpson13 => "simpson_13",
            Self::Simpson38 => "simpson_38",
            Self::Boole => "boole",
            Self::Weddle => "weddle",
        }
    }

    /// Whether `n` subintervals split into whole blocks of this rule.
    pub fn accepts(&self, n: usize) -> bool {
        n > 0 && n.is_multiple_of(self.panel_width())
    }

    /// Round `n` up to the nearest positive multiple of the panel width.
    ///
    /// Returns `None` if the rounded count does not fit in a `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::NewtonCotesRule;
    ///
    /// assert_eq!(NewtonCotesRule::Simpson38.adjust_subintervals(5), Some(6));
    /// assert_eq!(NewtonCotesRule::Boole.adjust_subintervals(8), Some(8));
    /// assert_eq!(NewtonCotesRule::Weddle.adjust_subintervals(0), Some(6));
    /// assert_eq!(NewtonCotesRule::Weddle.adjust_subintervals(usize::MAX), None);
    /// ```
    pub fn adjust_subintervals(&self, n: usize) -> Option<usize> {
        let width = self.panel_width();
        if n == 0 {
            return Some(width);
        }
        n.div_ceil(width).checked_mul(width)
    }

    /// Subinterval count for a nominal step size `h` over [a, b].
    ///
    /// Takes `round((b - a) / h)` and rounds it up to a count the rule
    /// accepts, so the step actually used may be slightly smaller than `h`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::InvalidParameter`] if `h` is not a finite
    /// positive number or the resulting count does not fit in a `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::NewtonCotesRule;
    ///
    /// let n = NewtonCotesRule::Simpson13.subintervals_for_step(0.0, 1.0, 0.3).unwrap();
    /// assert_eq!(n, 4);
    /// ```
    pub fn subintervals_for_step(&self, a: f64, b: f64, h: f64) -> IntegrateResult<usize> {
        if !h.is_finite() || h <= 0.0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "step".to_string(),
                message: format!("must be a finite positive number (got {})", h),
            });
        }

        let too_many = || IntegrateError::InvalidParameter {
            parameter: "step".to_string(),
            message: format!("step {} splits [{}, {}] into too many subintervals", h, a, b),
        };

        // usize::MAX as f64 rounds up to 2^64, so the bound must be exclusive
        let panels = ((b - a) / h).abs().round();
        if !panels.is_finite() || panels >= usize::MAX as f64 {
            return Err(too_many());
        }

        let nominal = panels as usize;
        let n = self.adjust_subintervals(nominal).ok_or_else(too_many)?;
        if n != nominal {
            debug!(rule = %self, nominal, adjusted = n, "rounded subinterval count up");
        }
        Ok(n)
    }

    /// Reject `n` unless it is a positive multiple of the panel width.
    pub fn check_subintervals(&self, n: usize) -> IntegrateResult<()> {
        quadrature::check_subintervals(*self, n)
    }

    /// Integrate `f` over [a, b] with `n` subintervals using this rule.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::NewtonCotesRule;
    ///
    /// for rule in NewtonCotesRule::ALL {
    ///     let n = rule.adjust_subintervals(12).unwrap();
    ///     let result = rule.integrate(|x| 3.0 * x * x, 0.0, 1.0, n).unwrap();
    ///     assert!((result - 1.0).abs() < 1e-2);
    /// }
    /// ```
    pub fn integrate<F>(&self, f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        trace!(rule = %self, a, b, n, "integrating");
        match self {
            Self::Trapezoid => quadrature::trapezoid(f, a, b, n),
            Self::Simpson13 => quadrature::simpson_13(f, a, b, n),
            Self::Simpson38 => quadrature::simpson_38(f, a, b, n),
            Self::Boole => quadrature::boole(f, a, b, n),
            Self::Weddle => quadrature::weddle(f, a, b, n),
        }
    }
}

impl fmt::Display for NewtonCotesRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trapezoid => "Trapezoidal rule",
            Self::Simpson13 => "Simpson's 1/3 rule",
            Self::Simpson38 => "Simpson's 3/8 rule",
            Self::Boole => "Boole's rule",
            Self::Weddle => "Weddle's rule",
        };
        f.write_str(label)
    }
}

impl FromStr for NewtonCotesRule {
    type Err = IntegrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '/'], "_");
        match key.as_str() {
            "trapezoid" | "trapezoidal" => Ok(Self::Trapezoid),
            "simpson_13" | "simpson13" | "simpson_1_3" => Ok(Self::Simpson13),
            "simpson_38" | "simpson38" | "simpson_3_8" => Ok(Self::Simpson38),
            "boole" => Ok(Self::Boole),
            "weddle" => Ok(Self::Weddle),
            _ => Err(IntegrateError::UnknownRule(s.to_string())),
        }
    }
}
