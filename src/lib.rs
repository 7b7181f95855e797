//! Closed Newton-Cotes quadrature for smooth functions on a finite interval.
//!
//! The [`integrate`] module holds the five composite rules and the
//! [`NewtonCotesRule`] catalogue that dispatches to them. The [`comparison`]
//! module runs several rules against one test integral and reports how far
//! each lands from the closed form.
//!
//! # Example
//!
//! ```
//! use newton_cotes::integrate::{simpson_13, trapezoid};
//!
//! let f = |x: f64| 1.0 / (1.0 + x * x);
//! let trap = trapezoid(f, 0.0, 1.0, 4).unwrap();
//! let simp = simpson_13(f, 0.0, 1.0, 4).unwrap();
//!
//! let quarter_pi = std::f64::consts::FRAC_PI_4;
//! assert!((simp - quarter_pi).abs() < (trap - quarter_pi).abs());
//! ```

pub mod comparison;
pub mod integrate;

pub use integrate::{IntegrateError, IntegrateResult, NewtonCotesRule};
