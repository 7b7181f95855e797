//! Numerical integration with closed Newton-Cotes rules.
//!
//! # Quadrature Methods
//!
//! - [`trapezoid`] - Composite trapezoidal rule (any n >= 1)
//! - [`simpson_13`] - Composite Simpson's 1/3 rule (n even)
//! - [`simpson_38`] - Composite Simpson's 3/8 rule (n multiple of 3)
//! - [`boole`] - Composite Boole's rule (n multiple of 4)
//! - [`weddle`] - Composite Weddle's rule (n multiple of 6)
//!
//! Every rule samples `f` on the same kind of [`SampleGrid`] and rejects a
//! subinterval count it cannot split into whole blocks with
//! [`IntegrateError::InvalidSubintervalCount`] before evaluating `f`.
//!
//! [`NewtonCotesRule`] names the five rules, dispatches to them and derives
//! a valid subinterval count from a step size.
//!
//! # Example
//!
//! ```
//! use newton_cotes::integrate::NewtonCotesRule;
//!
//! let rule = NewtonCotesRule::Weddle;
//! let n = rule.subintervals_for_step(0.0, 1.0, 0.25).unwrap();
//! assert_eq!(n, 6);
//!
//! let result = rule.integrate(|x| x.powi(5), 0.0, 1.0, n).unwrap();
//! assert!((result - 1.0 / 6.0).abs() < 1e-14);
//! ```

pub mod error;
pub mod quadrature;
pub mod rule;

pub use error::{IntegrateError, IntegrateResult};
pub use quadrature::{SampleGrid, boole, simpson_13, simpson_38, trapezoid, weddle};
pub use rule::NewtonCotesRule;
