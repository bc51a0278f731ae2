//! Software-simulated directed rounding.
//!
//! Stable Rust exposes no portable control over the hardware floating-point
//! rounding mode, so the round-down/round-up primitives here are simulated:
//! each operation is evaluated in the default round-to-nearest mode, an
//! error-free transformation (two-sum for addition, an FMA residual for
//! multiplication, division and square root) recovers the sign of the
//! rounding error, and the result is nudged one ULP outward only when it
//! was inexact in the unwanted direction.
//!
//! Exact results therefore stay exact, and every returned bound is the
//! correctly rounded directed result. Operations with no error-free
//! transformation (libm `pow`, `exp`, `ln`) go through [`pad_down`] /
//! [`pad_up`] instead, which pad unconditionally and are only as reliable
//! as the underlying libm; see [`crate::diag`].

mod directed;

pub use directed::{
    add_down, add_up, div_down, div_up, mul_down, mul_up, pad_down, pad_up, sqrt_down, sqrt_up,
    sub_down, sub_up,
};
