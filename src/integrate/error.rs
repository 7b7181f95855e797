//! Error types for numerical integration operations.

use thiserror::Error;

use crate::integrate::rule::NewtonCotesRule;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// The subinterval count does not split [a, b] into whole blocks of the rule.
    #[error("{rule}: subinterval count {n} must be a positive multiple of {multiple_of}")]
    InvalidSubintervalCount {
        rule: NewtonCotesRule,
        n: usize,
        multiple_of: usize,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// A rule name that matches none of the known rules.
    #[error(
        "unknown quadrature rule '{0}' \
         (expected trapezoid, simpson_13, simpson_38, boole or weddle)"
    )]
    UnknownRule(String),

    /// A comparison configuration that could not be read or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}
