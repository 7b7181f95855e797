//! Simpson's rules for numerical integration.
//!
//! Simpson's 1/3 rule fits a parabola through each pair of panels and
//! Simpson's 3/8 rule a cubic through each triple. Both achieve O(h⁴)
//! accuracy for smooth functions and are exact for cubics.

use super::{SampleGrid, check_subintervals};
use crate::integrate::error::IntegrateResult;
use crate::integrate::rule::NewtonCotesRule;

/// Integrate a function using the composite Simpson's 1/3 rule.
///
/// Computes `(h/3) * (y_0 + 4*y_1 + 2*y_2 + 4*y_3 + ... + 4*y_{n-1} + y_n)`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be even)
///
/// # Errors
///
/// Returns [`InvalidSubintervalCount`] if `n` is odd or zero. `f` is not
/// evaluated in that case.
///
/// [`InvalidSubintervalCount`]: crate::integrate::IntegrateError::InvalidSubintervalCount
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::simpson_13;
///
/// // Exact for cubics, even with a single pair of panels
/// let result = simpson_13(|x| x * x * x, 0.0, 1.0, 2).unwrap();
/// assert!((result - 0.25).abs() < 1e-15);
///
/// // 4 * ∫₀¹ 1/(1+x²) dx ≈ π
/// let pi = 4.0 * simpson_13(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 4).unwrap();
/// assert!((pi - 3.141568).abs() < 1e-6);
/// ```
pub fn simpson_13<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_subintervals(NewtonCotesRule::Simpson13, n)?;

    let grid = SampleGrid::new(a, b, n);
    let h = grid.step();
    let y = grid.evaluate(f);

    let mut sum = y[0] + y[n];

    // Add 4 * odd terms
    for i in (1..n).step_by(2) {
        sum += 4.0 * y[i];
    }

    // Add 2 * even terms (excluding endpoints)
    for i in (2..n).step_by(2) {
        sum += 2.0 * y[i];
    }

    Ok(h * sum / 3.0)
}

/// Integrate a function using the composite Simpson's 3/8 rule.
///
/// Computes `(3h/8) * (y_0 + 3*y_1 + 3*y_2 + 2*y_3 + 3*y_4 + ... + 3*y_{n-1} + y_n)`:
/// interior points on a block boundary (index divisible by 3) get weight 2,
/// every other interior point weight 3.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be a multiple of 3)
///
/// # Errors
///
/// Returns [`InvalidSubintervalCount`] if `n` is not a positive multiple of 3.
///
/// [`InvalidSubintervalCount`]: crate::integrate::IntegrateError::InvalidSubintervalCount
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::simpson_38;
///
/// // Integrate exp(x) from 0 to 1
/// let result = simpson_38(|x: f64| x.exp(), 0.0, 1.0, 30).unwrap();
/// assert!((result - (std::f64::consts::E - 1.0)).abs() < 1e-6);
/// ```
pub fn simpson_38<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_subintervals(NewtonCotesRule::Simpson38, n)?;

    let grid = SampleGrid::new(a, b, n);
    let h = grid.step();
    let y = grid.evaluate(f);

    let mut inner = 0.0;
    let mut boundary = 0.0;
    for (i, yi) in y.iter().enumerate().take(n).skip(1) {
        if i.is_multiple_of(3) {
            boundary += *yi;
        } else {
            inner += *yi;
        }
    }

    Ok(3.0 * h / 8.0 * (y[0] + y[n] + 3.0 * inner + 2.0 * boundary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::error::IntegrateError;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::f64::consts::{E, PI};

    #[test]
    fn test_simpson_13_constant() {
        let result = simpson_13(|_| 3.0, 0.0, 4.0, 4).unwrap();
        assert_relative_eq!(result, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_13_cubic() {
        // Integral of x^3 from 0 to 1 = 1/4 (exact for polynomials up to degree 3)
        for n in [2, 4, 10] {
            let result = simpson_13(|x| x * x * x, 0.0, 1.0, n).unwrap();
            assert_relative_eq!(result, 0.25, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_simpson_13_arctan() {
        let result = simpson_13(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(result, 0.785392, epsilon = 1e-6);
        assert_relative_eq!(4.0 * result, 3.141568, epsilon = 1e-6);
    }

    #[test]
    fn test_simpson_13_sin() {
        // Integral of sin(x) from 0 to pi = 2
        let result = simpson_13(|x| x.sin(), 0.0, PI, 100).unwrap();
        assert!(
            (result - 2.0).abs() < 1e-6,
            "result = {}, expected 2.0",
            result
        );
    }

    #[test]
    fn test_simpson_13_odd_subintervals() {
        let calls = Cell::new(0);
        let err = simpson_13(
            |x| {
                calls.set(calls.get() + 1);
                x
            },
            0.0,
            1.0,
            3,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            IntegrateError::InvalidSubintervalCount {
                rule: NewtonCotesRule::Simpson13,
                n: 3,
                multiple_of: 2,
            }
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_simpson_38_cubic() {
        // Integral of x^3 - 2x from -1 to 2 = 15/4 - 3 = 0.75
        for n in [3, 6, 12] {
            let result = simpson_38(|x| x * x * x - 2.0 * x, -1.0, 2.0, n).unwrap();
            assert_relative_eq!(result, 0.75, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_simpson_38_weights() {
        // With y = 1 only at index 3 the result isolates the shared-boundary weight
        let result = simpson_38(|x| if (x - 3.0).abs() < 1e-9 { 1.0 } else { 0.0 }, 0.0, 6.0, 6)
            .unwrap();
        assert_relative_eq!(result, 3.0 / 8.0 * 2.0, epsilon = 1e-12);

        let result = simpson_38(|x| if (x - 4.0).abs() < 1e-9 { 1.0 } else { 0.0 }, 0.0, 6.0, 6)
            .unwrap();
        assert_relative_eq!(result, 3.0 / 8.0 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_38_exp() {
        let result = simpson_38(|x| x.exp(), 0.0, 1.0, 60).unwrap();
        assert_relative_eq!(result, E - 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_simpson_38_errors() {
        assert!(simpson_38(|x| x, 0.0, 1.0, 4).is_err());
        assert!(simpson_38(|x| x, 0.0, 1.0, 0).is_err());
        assert!(simpson_38(|x| x, 0.0, 1.0, 9).is_ok());
    }

    #[test]
    fn test_simpson_38_evaluation_count() {
        let calls = Cell::new(0);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            x * x
        };

        for n in [0, 2, 4, 5] {
            assert!(simpson_38(counted, 0.0, 1.0, n).is_err());
        }
        assert_eq!(calls.get(), 0);

        for n in [3, 9] {
            calls.set(0);
            simpson_38(counted, 0.0, 1.0, n).unwrap();
            assert_eq!(calls.get(), n + 1);
        }
    }

    #[test]
    fn test_simpson_13_evaluation_count() {
        let calls = Cell::new(0);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            x * x
        };

        for n in [2, 10] {
            calls.set(0);
            simpson_13(counted, 0.0, 1.0, n).unwrap();
            assert_eq!(calls.get(), n + 1);
        }
    }
}
