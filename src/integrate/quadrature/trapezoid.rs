//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions.

use super::{SampleGrid, check_subintervals};
use crate::integrate::error::IntegrateResult;
use crate::integrate::rule::NewtonCotesRule;

/// Integrate a function using the composite trapezoidal rule.
///
/// Computes `h * (y_0/2 + y_1 + ... + y_{n-1} + y_n/2)` with `h = (b - a) / n`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (any n >= 1)
///
/// # Errors
///
/// Returns [`InvalidSubintervalCount`] if `n` is zero.
///
/// [`InvalidSubintervalCount`]: crate::integrate::IntegrateError::InvalidSubintervalCount
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::trapezoid;
///
/// // Integrate 1/(1+x^2) from 0 to 1 with h = 1/4
/// let result = trapezoid(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 4).unwrap();
/// assert!((result - 0.782794).abs() < 1e-6);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_subintervals(NewtonCotesRule::Trapezoid, n)?;

    let grid = SampleGrid::new(a, b, n);
    let h = grid.step();
    let y = grid.evaluate(f);

    let mut sum = 0.5 * (y[0] + y[n]);
    for yi in &y[1..n] {
        sum += *yi;
    }

    Ok(h * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::error::IntegrateError;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoid_constant() {
        // Integral of constant = constant * width
        let result = trapezoid(|_| 5.0, 0.0, 4.0, 4).unwrap();
        assert_relative_eq!(result, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_linear() {
        // Exact for linear functions, even with a single panel
        for n in [1, 2, 7, 10] {
            let result = trapezoid(|x| x, 0.0, 1.0, n).unwrap();
            assert_relative_eq!(result, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_trapezoid_single_panel() {
        // One panel is just the trapezoid through the endpoints
        let result = trapezoid(|x| x * x, 0.0, 2.0, 1).unwrap();
        assert_relative_eq!(result, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_arctan() {
        let result = trapezoid(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(result, 0.782794, epsilon = 1e-6);
    }

    #[test]
    fn test_trapezoid_sin() {
        // Integral of sin(x) from 0 to pi = 2
        let result = trapezoid(|x| x.sin(), 0.0, PI, 1000).unwrap();
        assert!((result - 2.0).abs() < 1e-5, "result = {}", result);
    }

    #[test]
    fn test_trapezoid_reversed_bounds() {
        let forward = trapezoid(|x| x.exp(), 0.0, 1.0, 8).unwrap();
        let backward = trapezoid(|x| x.exp(), 1.0, 0.0, 8).unwrap();
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_zero_subintervals() {
        let err = trapezoid(|x| x, 0.0, 1.0, 0).unwrap_err();
        assert_eq!(
            err,
            IntegrateError::InvalidSubintervalCount {
                rule: NewtonCotesRule::Trapezoid,
                n: 0,
                multiple_of: 1,
            }
        );
    }

    #[test]
    fn test_trapezoid_evaluation_count() {
        let calls = Cell::new(0);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            x * x
        };

        assert!(trapezoid(counted, 0.0, 1.0, 0).is_err());
        assert_eq!(calls.get(), 0);

        for n in [1, 5] {
            calls.set(0);
            trapezoid(counted, 0.0, 1.0, n).unwrap();
            assert_eq!(calls.get(), n + 1);
        }
    }
}
