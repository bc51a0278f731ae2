//! Quadratic-term ranges and univariate quadratic expression solving.
//!
//! Covers the range of `a*x^2 + b*x` for scalar `a`, interval `b` and an
//! interval domain `x` (tight bounds, including the concave vertex
//! candidate), and enclosures of the solution set of `a*x^2 + b*x >= c`
//! over the nonnegative ray and the full real line.
//!
//! # References
//!
//! Domes & Neumaier (2010), "Constraint propagation on quadratic
//! constraints", Algorithm 2.2 for the tight upper bound.

mod range;
mod solve;

pub use range::{quad_range, quad_upper_bound};
pub use solve::{solve_quad, solve_quad_positive, solve_quad_positive_scalar};
