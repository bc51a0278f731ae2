//! Diagnostics sink trait and the two provided implementations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Operation classes whose interval bounds rely on platform libm and are
/// therefore not guaranteed rounding-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsafeFn {
    /// `powf`-based bounds (generic `power` / `power_scalar` /
    /// `sign_power_scalar` fallbacks).
    Pow,
    /// `exp`-based bounds.
    Exp,
    /// `ln`-based bounds.
    Log,
}

impl UnsafeFn {
    fn name(self) -> &'static str {
        match self {
            UnsafeFn::Pow => "pow",
            UnsafeFn::Exp => "exp",
            UnsafeFn::Log => "log",
        }
    }
}

/// Receiver for advisory "not rounding-safe" reports.
///
/// Implementations decide whether and how often to surface them; the
/// reports never affect control flow or results.
pub trait DiagSink {
    /// Called each time a numerically unsafe operation computes a bound.
    fn warn_unsafe(&self, op: UnsafeFn);
}

/// Default sink: logs one warning per operation class over its lifetime.
#[derive(Debug, Default)]
pub struct WarnOnce {
    pow: AtomicBool,
    exp: AtomicBool,
    log: AtomicBool,
}

impl WarnOnce {
    /// Creates a sink with all three flags unfired.
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self, op: UnsafeFn) -> &AtomicBool {
        match op {
            UnsafeFn::Pow => &self.pow,
            UnsafeFn::Exp => &self.exp,
            UnsafeFn::Log => &self.log,
        }
    }
}

impl DiagSink for WarnOnce {
    fn warn_unsafe(&self, op: UnsafeFn) {
        if !self.flag(op).swap(true, Ordering::Relaxed) {
            log::warn!(
                "interval {} relies on platform libm and is not rounding-safe; \
                 bounds are padded one ULP outward, not certified",
                op.name()
            );
        }
    }
}

/// Test sink: records every report in order.
#[derive(Debug, Default)]
pub struct CollectSink {
    seen: Mutex<Vec<UnsafeFn>>,
}

impl CollectSink {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far.
    pub fn reports(&self) -> Vec<UnsafeFn> {
        self.seen.lock().expect("diag sink poisoned").clone()
    }

    /// Whether `op` was reported at least once.
    pub fn saw(&self, op: UnsafeFn) -> bool {
        self.reports().contains(&op)
    }
}

impl DiagSink for CollectSink {
    fn warn_unsafe(&self, op: UnsafeFn) {
        self.seen.lock().expect("diag sink poisoned").push(op);
    }
}
