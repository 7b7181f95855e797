//! Weddle's rule for numerical integration.
//!
//! Weddle's rule perturbs the seven-point Newton-Cotes weights into the
//! simple pattern 1, 5, 1, 6, 1, 5, 1. Applied over successive blocks of six
//! panels it integrates polynomials through degree 5 exactly.

use super::{SampleGrid, check_subintervals};
use crate::integrate::error::IntegrateResult;
use crate::integrate::rule::NewtonCotesRule;

/// Weights of one six-panel block, scaled by `3h/10`.
const WEDDLE_WEIGHTS: [f64; 7] = [1.0, 5.0, 1.0, 6.0, 1.0, 5.0, 1.0];

/// Integrate a function using the composite Weddle's rule.
///
/// Sums `(3h/10) * (y_i + 5*y_{i+1} + y_{i+2} + 6*y_{i+3} + y_{i+4} + 5*y_{i+5} + y_{i+6})`
/// over the blocks starting at `i = 0, 6, 12, ..., n - 6`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be a multiple of 6)
///
/// # Errors
///
/// Returns [`InvalidSubintervalCount`] if `n` is not a positive multiple of 6.
///
/// [`InvalidSubintervalCount`]: crate::integrate::IntegrateError::InvalidSubintervalCount
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::weddle;
///
/// // 4 * ∫₀¹ 1/(1+x²) dx with h = 1/6
/// let pi = 4.0 * weddle(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 6).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-5);
/// ```
pub fn weddle<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_subintervals(NewtonCotesRule::Weddle, n)?;

    let grid = SampleGrid::new(a, b, n);
    let h = grid.step();
    let y = grid.evaluate(f);

    let mut integral = 0.0;
    for start in (0..n).step_by(6) {
        let block = &y[start..=start + 6];
        let weighted: f64 = WEDDLE_WEIGHTS.iter().zip(block).map(|(w, yi)| w * yi).sum();
        integral += 3.0 * h / 10.0 * weighted;
    }

    Ok(integral)
}
