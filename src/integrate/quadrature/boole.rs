//! Boole's rule for numerical integration.
//!
//! Boole's rule is the five-point closed Newton-Cotes formula. Applied over
//! successive blocks of four panels it achieves O(h⁶) accuracy and integrates
//! polynomials through degree 5 exactly.

use super::{SampleGrid, check_subintervals};
use crate::integrate::error::IntegrateResult;
use crate::integrate::rule::NewtonCotesRule;

/// Weights of one four-panel block, scaled by `2h/45`.
const BOOLE_WEIGHTS: [f64; 5] = [7.0, 32.0, 12.0, 32.0, 7.0];

/// Integrate a function using the composite Boole's rule.
///
/// Sums `(2h/45) * (7*y_i + 32*y_{i+1} + 12*y_{i+2} + 32*y_{i+3} + 7*y_{i+4})`
/// over the blocks starting at `i = 0, 4, 8, ..., n - 4`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be a multiple of 4)
///
/// # Errors
///
/// Returns [`InvalidSubintervalCount`] if `n` is not a positive multiple of 4.
///
/// [`InvalidSubintervalCount`]: crate::integrate::IntegrateError::InvalidSubintervalCount
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::boole;
///
/// let result = boole(|x| x * x * x * x, 0.0, 2.0, 4).unwrap();
/// assert!((result - 6.4).abs() < 1e-12);
/// ```
pub fn boole<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_subintervals(NewtonCotesRule::Boole, n)?;

    let grid = SampleGrid::new(a, b, n);
    let h = grid.step();
    let y = grid.evaluate(f);

    let mut integral = 0.0;
    for start in (0..n).step_by(4) {
        let block = &y[start..=start + 4];
        let weighted: f64 = BOOLE_WEIGHTS.iter().zip(block).map(|(w, yi)| w * yi).sum();
        integral += 2.0 * h / 45.0 * weighted;
    }

    Ok(integral)
}
