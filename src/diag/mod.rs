//! Advisory diagnostics for numerically unsafe operations.
//!
//! The libm-backed operations (`pow`, `exp`, `ln`) have no error-free
//! transformation, so their interval bounds are only padded, not certified.
//! Each such operation reports itself once through an injected [`DiagSink`]
//! instead of a hidden static flag, keeping the library free of global
//! state and letting every test observe warnings in isolation.
//!
//! [`WarnOnce`] is the production sink (one `log::warn!` per operation
//! class); [`CollectSink`] records every report for assertions.

mod sink;

pub use sink::{CollectSink, DiagSink, UnsafeFn, WarnOnce};
