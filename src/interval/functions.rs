//! Elementary functions over intervals: squares, roots, reciprocals,
//! powers, exp/log and pointwise min/max/abs/sign.
//!
//! Monotone functions map endpoints with directed rounding; the remaining
//! ones split on which side of zero the operand lies. `exp`, `log` and the
//! generic power paths rely on platform libm, are padded one ULP outward
//! and report themselves once through the injected [`DiagSink`] as not
//! rounding-safe.

use super::arith::{ep_div_down, ep_div_up, ep_mul_down, ep_mul_up};
use super::Interval;
use crate::diag::{DiagSink, UnsafeFn};
use crate::round::{mul_down, mul_up, pad_down, pad_up, sqrt_down, sqrt_up};

impl Interval {
    /// `x^2` for all `x` in the interval.
    ///
    /// One-sided operands square monotonically; a straddling operand has
    /// lower bound zero and upper bound the larger endpoint square.
    pub fn square(self, infinity: f64) -> Interval {
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        let (inf, sup) = if self.inf >= 0.0 {
            (
                ep_mul_down(infinity, self.inf, self.inf),
                ep_mul_up(infinity, self.sup, self.sup),
            )
        } else if self.sup <= 0.0 {
            (
                ep_mul_down(infinity, self.sup, self.sup),
                ep_mul_up(infinity, self.inf, self.inf),
            )
        } else {
            (
                0.0,
                ep_mul_up(infinity, self.inf, self.inf)
                    .max(ep_mul_up(infinity, self.sup, self.sup)),
            )
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// `sqrt(x)`; empty when the operand is entirely negative. The
    /// negative part of a straddling operand is outside the domain and
    /// clamps to zero.
    pub fn sqrt(self, infinity: f64) -> Interval {
        if self.is_empty() || self.sup < 0.0 {
            return Interval::empty(infinity);
        }
        let inf = if self.inf <= 0.0 {
            0.0
        } else if self.inf >= infinity {
            infinity
        } else {
            sqrt_down(self.inf)
        };
        let sup = if self.sup >= infinity {
            infinity
        } else {
            sqrt_up(self.sup)
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// `1/x`. Empty for `[0,0]`; entire when zero is interior; one-sided
    /// unbounded when zero sits at an endpoint.
    pub fn recip(self, infinity: f64) -> Interval {
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if self.inf == 0.0 && self.sup == 0.0 {
            return Interval::empty(infinity);
        }
        if self.inf > 0.0 || self.sup < 0.0 {
            // 1/x is decreasing on either sign domain.
            return Interval::saturated(
                infinity,
                ep_div_down(infinity, 1.0, self.sup),
                ep_div_up(infinity, 1.0, self.inf),
            );
        }
        if self.inf == 0.0 {
            return Interval::saturated(infinity, ep_div_down(infinity, 1.0, self.sup), infinity);
        }
        if self.sup == 0.0 {
            return Interval::saturated(infinity, -infinity, ep_div_up(infinity, 1.0, self.inf));
        }
        Interval::entire(infinity)
    }

    /// `e^x`. Monotone; relies on libm, hence advisory-only soundness.
    pub fn exp(self, infinity: f64, diag: &impl DiagSink) -> Interval {
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        diag.warn_unsafe(UnsafeFn::Exp);
        let inf = if self.inf <= -infinity {
            0.0
        } else {
            pad_down(self.inf.exp()).max(0.0)
        };
        let sup = if self.sup >= infinity {
            infinity
        } else {
            pad_up(self.sup.exp())
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// `ln(x)`. Empty when the operand has no positive part; the negative
    /// part of a straddling operand leaves the lower bound unbounded.
    /// Relies on libm, hence advisory-only soundness.
    pub fn log(self, infinity: f64, diag: &impl DiagSink) -> Interval {
        if self.is_empty() || self.sup <= 0.0 {
            return Interval::empty(infinity);
        }
        diag.warn_unsafe(UnsafeFn::Log);
        let inf = if self.inf <= 0.0 {
            -infinity
        } else if self.inf >= infinity {
            infinity
        } else {
            pad_down(self.inf.ln())
        };
        let sup = if self.sup >= infinity {
            infinity
        } else {
            pad_up(self.sup.ln())
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// `x^y` with an interval exponent. A degenerate exponent delegates to
    /// [`Interval::power_scalar`]; otherwise computed as
    /// `exp(y * log(x))`, which is an approximation, not a certified
    /// enclosure.
    pub fn power(self, infinity: f64, exponent: Interval, diag: &impl DiagSink) -> Interval {
        if self.is_empty() || exponent.is_empty() {
            return Interval::empty(infinity);
        }
        if exponent.inf == exponent.sup {
            return self.power_scalar(infinity, exponent.inf, diag);
        }
        let l = self.log(infinity, diag);
        if l.is_empty() {
            return Interval::empty(infinity);
        }
        l.mul(infinity, exponent).exp(infinity, diag)
    }

    /// `x^n` for a scalar exponent.
    ///
    /// Non-integer exponents clamp the base to its nonnegative part (empty
    /// if nothing remains). Integer exponents split on the base's side of
    /// zero and the exponent's parity; negative exponents go through the
    /// reciprocal of the positive power. The `n ∈ {0, 1, 2}` cases are
    /// exact; everything else goes through libm `pow` and is advisory-only.
    pub fn power_scalar(self, infinity: f64, n: f64, diag: &impl DiagSink) -> Interval {
        debug_assert!(!n.is_nan());
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if n == 0.0 {
            return Interval::point(1.0);
        }
        if n == 1.0 {
            return self;
        }
        if n == 2.0 {
            return self.square(infinity);
        }

        if n.fract() != 0.0 {
            // Non-integer exponent: the negative base domain is invalid.
            if self.sup < 0.0 {
                return Interval::empty(infinity);
            }
            let lo_base = self.inf.max(0.0);
            if n > 0.0 {
                return Interval::saturated(
                    infinity,
                    pow_bound_down(infinity, lo_base, n, diag),
                    pow_bound_up(infinity, self.sup, n, diag),
                );
            }
            // Decreasing for n < 0; x -> 0 blows up and x -> infinity
            // decays toward zero, so an unbounded endpoint takes the limit
            // value zero rather than pow_bound_*'s saturation.
            if self.sup == 0.0 {
                return Interval::empty(infinity);
            }
            let inf = if self.sup >= infinity {
                0.0
            } else {
                pow_bound_down(infinity, self.sup, n, diag)
            };
            let sup = if lo_base == 0.0 {
                infinity
            } else if lo_base >= infinity {
                0.0
            } else {
                pow_bound_up(infinity, lo_base, n, diag)
            };
            return Interval::saturated(infinity, inf, sup);
        }

        if n < 0.0 {
            return self.power_scalar(infinity, -n, diag).recip(infinity);
        }

        // Positive integer exponent (n >= 3 here).
        let even = (n / 2.0).fract() == 0.0;
        if even {
            if self.inf >= 0.0 {
                return Interval::saturated(
                    infinity,
                    pow_bound_down(infinity, self.inf, n, diag),
                    pow_bound_up(infinity, self.sup, n, diag),
                );
            }
            if self.sup <= 0.0 {
                // Decreasing on the negatives: (-t)^even = t^even.
                return Interval::saturated(
                    infinity,
                    pow_bound_down(infinity, -self.sup, n, diag),
                    pow_bound_up(infinity, -self.inf, n, diag),
                );
            }
            // Straddling: compare |inf| against sup for the extremal endpoint.
            let m = (-self.inf).max(self.sup);
            return Interval::saturated(infinity, 0.0, pow_bound_up(infinity, m, n, diag));
        }
        // Odd exponent: increasing on the whole line.
        let inf = if self.inf >= 0.0 {
            pow_bound_down(infinity, self.inf, n, diag)
        } else {
            -pow_bound_up(infinity, -self.inf, n, diag)
        };
        let sup = if self.sup >= 0.0 {
            pow_bound_up(infinity, self.sup, n, diag)
        } else {
            -pow_bound_down(infinity, -self.sup, n, diag)
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// Signed power `sign(x) * |x|^n` for `n >= 0`; monotone increasing
    /// for every such `n`.
    ///
    /// Closed-form fast paths for `n ∈ {0, 1, 2, 0.5}`; note the signed
    /// convention `0^0 = 0`, which drives the six-way case split at
    /// `n = 0`. The generic fallback shares libm `pow`'s advisory caveat.
    pub fn sign_power_scalar(self, infinity: f64, n: f64, diag: &impl DiagSink) -> Interval {
        debug_assert!(n >= 0.0);
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if n == 1.0 {
            return self;
        }
        if n == 0.0 {
            return if self.sup < 0.0 {
                Interval::point(-1.0)
            } else if self.inf > 0.0 {
                Interval::point(1.0)
            } else if self.inf == 0.0 && self.sup == 0.0 {
                Interval::point(0.0)
            } else if self.sup == 0.0 {
                Interval::with_bounds(-1.0, 0.0)
            } else if self.inf == 0.0 {
                Interval::with_bounds(0.0, 1.0)
            } else {
                Interval::with_bounds(-1.0, 1.0)
            };
        }
        let inf = sign_power_bound(infinity, self.inf, n, false, diag);
        let sup = sign_power_bound(infinity, self.sup, n, true, diag);
        Interval::saturated(infinity, inf, sup)
    }

    /// Pointwise minimum of both operands.
    pub fn min(self, infinity: f64, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty(infinity);
        }
        Interval {
            inf: self.inf.min(rhs.inf),
            sup: self.sup.min(rhs.sup),
        }
    }

    /// Pointwise maximum of both operands.
    pub fn max(self, infinity: f64, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty(infinity);
        }
        Interval {
            inf: self.inf.max(rhs.inf),
            sup: self.sup.max(rhs.sup),
        }
    }

    /// `|x|`; a straddling operand yields `[0, max(-inf, sup)]`.
    pub fn abs(self, infinity: f64) -> Interval {
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if self.inf >= 0.0 {
            self
        } else if self.sup <= 0.0 {
            self.neg()
        } else {
            Interval {
                inf: 0.0,
                sup: (-self.inf).max(self.sup),
            }
        }
    }

    /// `sign(x)`: `[-1,-1]`, `[1,1]`, or `[-1,1]` depending on which sides
    /// of zero the interval touches.
    pub fn sign(self, infinity: f64) -> Interval {
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if self.sup < 0.0 {
            Interval::point(-1.0)
        } else if self.inf > 0.0 {
            Interval::point(1.0)
        } else {
            Interval::with_bounds(-1.0, 1.0)
        }
    }
}

/// `base^n` rounded down, for `base >= 0`. Exact for the trivial bases,
/// libm-padded otherwise.
fn pow_bound_down(infinity: f64, base: f64, n: f64, diag: &impl DiagSink) -> f64 {
    debug_assert!(base >= 0.0);
    if base >= infinity {
        return infinity;
    }
    if base == 0.0 {
        return 0.0;
    }
    if base == 1.0 {
        return 1.0;
    }
    diag.warn_unsafe(UnsafeFn::Pow);
    pad_down(base.powf(n)).max(0.0)
}

/// Upper counterpart of [`pow_bound_down`].
fn pow_bound_up(infinity: f64, base: f64, n: f64, diag: &impl DiagSink) -> f64 {
    debug_assert!(base >= 0.0);
    if base >= infinity {
        return infinity;
    }
    if base == 0.0 {
        return 0.0;
    }
    if base == 1.0 {
        return 1.0;
    }
    diag.warn_unsafe(UnsafeFn::Pow);
    pad_up(base.powf(n))
}

/// One endpoint of `sign(x) * |x|^n`, rounded outward. For a negative
/// endpoint the result is `-(|x|^n)`, so the inner magnitude rounds in the
/// opposite direction.
fn sign_power_bound(infinity: f64, v: f64, n: f64, up: bool, diag: &impl DiagSink) -> f64 {
    if v.abs() >= infinity {
        return if v > 0.0 { infinity } else { -infinity };
    }
    let mag = v.abs();
    let outward_up = if v >= 0.0 { up } else { !up };
    let m = if n == 2.0 {
        if outward_up {
            mul_up(mag, mag)
        } else {
            mul_down(mag, mag)
        }
    } else if n == 0.5 {
        if outward_up {
            sqrt_up(mag)
        } else {
            sqrt_down(mag)
        }
    } else if mag == 0.0 {
        0.0
    } else if mag == 1.0 {
        1.0
    } else {
        diag.warn_unsafe(UnsafeFn::Pow);
        if outward_up {
            pad_up(mag.powf(n))
        } else {
            pad_down(mag.powf(n)).max(0.0)
        }
    };
    if v >= 0.0 {
        m
    } else {
        -m
    }
}
