//! Provable-bounds interval type and operations.
//!
//! All operations are outward-rounded: lower bounds round down, upper
//! bounds round up, so enclosures only ever widen under floating-point
//! error. Operations taking an `infinity` argument expect the caller's
//! finite sentinel; mixing different sentinels across one computation is
//! a caller error.
//!
//! Emptiness propagates: any operation consuming an empty operand returns
//! the empty interval, and algebraically impossible configurations
//! (`[1,1] / [0,0]`, `sqrt([-4,-1])`, `log([-2,-1])`) return it as well.

mod arith;
mod functions;
mod types;

pub(crate) use arith::{ep_mul_down, ep_mul_up};
pub use types::Interval;
