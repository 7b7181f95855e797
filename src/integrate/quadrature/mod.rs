//! Composite closed Newton-Cotes quadrature.
//!
//! # Available Methods
//!
//! | Method | Subintervals | Degree of exactness | Accuracy |
//! |--------|--------------|---------------------|----------|
//! | [`trapezoid`] | n >= 1 | 1 | O(h²) |
//! | [`simpson_13`] | n even | 3 | O(h⁴) |
//! | [`simpson_38`] | n multiple of 3 | 3 | O(h⁴) |
//! | [`boole`] | n multiple of 4 | 5 | O(h⁶) |
//! | [`weddle`] | n multiple of 6 | 5 | O(h⁶) |

mod boole;
mod grid;
mod simpson;
mod trapezoid;
mod weddle;

pub use boole::boole;
pub use grid::SampleGrid;
pub use simpson::{simpson_13, simpson_38};
pub use trapezoid::trapezoid;
pub use weddle::weddle;

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::rule::NewtonCotesRule;

/// Fail fast when `n` is not a positive multiple of the rule's panel width.
pub(crate) fn check_subintervals(rule: NewtonCotesRule, n: usize) -> IntegrateResult<()> {
    let width = rule.panel_width();
    if n == 0 || !n.is_multiple_of(width) {
        return Err(IntegrateError::InvalidSubintervalCount {
            rule,
            n,
            multiple_of: width,
        });
    }
    Ok(())
}
