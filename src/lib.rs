//! Outward-rounded interval arithmetic with provable enclosures.
//!
//! Provides a `[inf, sup]` interval value type whose every operation returns
//! a conservative enclosure: for any `x1 ∈ I1` and `x2 ∈ I2`, the true
//! real-number result of `op(x1, x2)` lies inside `op(I1, I2)` despite
//! floating-point rounding error.
//!
//! - **Interval**: construction, predicates, intersection/hull, and the
//!   arithmetic operators (add, sub, mul, div and scalar variants) with
//!   careful signed-infinity case analysis.
//! - **Elementary functions**: square, square root, reciprocal, powers
//!   (including signed power), exp, log, min/max/abs/sign.
//! - **Quadratics**: tight upper bound and full range of `a*x^2 + b*x`
//!   over an interval, and enclosures of `{x : a*x^2 + b*x >= c}` with
//!   interval coefficients.
//! - **Directed rounding** ([`round`]): software-simulated round-down /
//!   round-up primitives built on error-free transformations, so exact
//!   results stay exact and inexact ones are nudged one ULP outward.
//! - **Diagnostics** ([`diag`]): injectable sink for the one-time
//!   "not rounding-safe" warnings emitted by the libm-backed operations.
//!
//! # Unbounded intervals
//!
//! Callers supply a finite `infinity` sentinel (e.g. `1e30`); any magnitude
//! at or beyond it is treated as unbounded in that direction. The canonical
//! empty interval is the inverted pair `[infinity, -infinity]`; algebraic
//! impossibility (division by `[0,0]`, square root of a negative-only
//! interval, ...) is signaled by returning it, never by panicking.
//!
//! # Concurrency
//!
//! All operations are pure computations over `Copy` value types. There is
//! no ambient rounding-mode register to save and restore; the only shared
//! state is the warn-once flags inside whatever [`diag::DiagSink`] the
//! caller injects.

pub mod diag;
pub mod interval;
pub mod quad;
pub mod round;

pub use diag::{CollectSink, DiagSink, UnsafeFn, WarnOnce};
pub use interval::Interval;
pub use quad::{
    quad_range, quad_upper_bound, solve_quad, solve_quad_positive, solve_quad_positive_scalar,
};
