//! Interval addition, subtraction, multiplication and division.

use super::Interval;
use crate::round::{add_down, add_up, div_down, div_up, mul_down, mul_up};

/// Product of two endpoint values, rounded down, with the interval
/// endpoint conventions: a zero factor absorbs (`0 * unbounded = 0`) and a
/// factor at or beyond the sentinel yields a signed unbounded result
/// without evaluating `inf * finite` in IEEE arithmetic.
pub(crate) fn ep_mul_down(infinity: f64, a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else if a.abs() >= infinity || b.abs() >= infinity {
        if (a > 0.0) == (b > 0.0) {
            infinity
        } else {
            -infinity
        }
    } else {
        mul_down(a, b)
    }
}

/// Upper counterpart of [`ep_mul_down`].
pub(crate) fn ep_mul_up(infinity: f64, a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else if a.abs() >= infinity || b.abs() >= infinity {
        if (a > 0.0) == (b > 0.0) {
            infinity
        } else {
            -infinity
        }
    } else {
        mul_up(a, b)
    }
}

/// Quotient of endpoint values, rounded down. An unbounded numerator keeps
/// its sign; an unbounded denominator pushes the quotient to zero (the
/// limit value, which is the valid directed bound at every call site).
pub(crate) fn ep_div_down(infinity: f64, a: f64, b: f64) -> f64 {
    debug_assert!(b != 0.0);
    if a == 0.0 {
        0.0
    } else if a.abs() >= infinity {
        if (a > 0.0) == (b > 0.0) {
            infinity
        } else {
            -infinity
        }
    } else if b.abs() >= infinity {
        0.0
    } else {
        div_down(a, b)
    }
}

/// Upper counterpart of [`ep_div_down`].
pub(crate) fn ep_div_up(infinity: f64, a: f64, b: f64) -> f64 {
    debug_assert!(b != 0.0);
    if a == 0.0 {
        0.0
    } else if a.abs() >= infinity {
        if (a > 0.0) == (b > 0.0) {
            infinity
        } else {
            -infinity
        }
    } else if b.abs() >= infinity {
        0.0
    } else {
        div_up(a, b)
    }
}

impl Interval {
    /// `[-sup, -inf]`; exact, no rounding involved.
    pub fn neg(self) -> Interval {
        Interval {
            inf: -self.sup,
            sup: -self.inf,
        }
    }

    /// Interval sum. A bound saturates to the sentinel as soon as either
    /// operand is unbounded on that side.
    pub fn add(self, infinity: f64, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty(infinity);
        }
        let inf = if self.inf <= -infinity || rhs.inf <= -infinity {
            -infinity
        } else if self.inf >= infinity || rhs.inf >= infinity {
            infinity
        } else {
            add_down(self.inf, rhs.inf)
        };
        let sup = if self.sup >= infinity || rhs.sup >= infinity {
            infinity
        } else if self.sup <= -infinity || rhs.sup <= -infinity {
            -infinity
        } else {
            add_up(self.sup, rhs.sup)
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// `self + [scalar, scalar]`.
    pub fn add_scalar(self, infinity: f64, scalar: f64) -> Interval {
        self.add(infinity, Interval::point(scalar))
    }

    /// Interval difference `self - rhs`.
    pub fn sub(self, infinity: f64, rhs: Interval) -> Interval {
        self.add(infinity, rhs.neg())
    }

    /// `self - [scalar, scalar]`.
    pub fn sub_scalar(self, infinity: f64, scalar: f64) -> Interval {
        self.add(infinity, Interval::point(-scalar))
    }

    /// Backs a previously subtracted `rhs` out of `self`, i.e. recovers an
    /// enclosure of `a` from `self = a - rhs`.
    ///
    /// Best effort: the result is a superset of the original minuend, not
    /// an exact inverse. A bound that saturated at the sentinel during the
    /// subtraction cannot be recovered and stays unbounded.
    pub fn undo_sub(self, infinity: f64, rhs: Interval) -> Interval {
        self.add(infinity, rhs)
    }

    /// Interval product.
    ///
    /// In the interior case the four pairwise endpoint products bound the
    /// result; a bound saturates to the sentinel exactly when one operand
    /// is unbounded in a direction the other operand's sign range can
    /// amplify (the sign condition tables below).
    pub fn mul(self, infinity: f64, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty(infinity);
        }
        let (x, y) = (self, rhs);
        if (x.inf == 0.0 && x.sup == 0.0) || (y.inf == 0.0 && y.sup == 0.0) {
            return Interval::point(0.0);
        }

        let inf_unbounded = (x.inf <= -infinity && y.sup > 0.0)
            || (y.inf <= -infinity && x.sup > 0.0)
            || (x.sup >= infinity && y.inf < 0.0)
            || (y.sup >= infinity && x.inf < 0.0);
        let sup_unbounded = (x.inf <= -infinity && y.inf < 0.0)
            || (y.inf <= -infinity && x.inf < 0.0)
            || (x.sup >= infinity && y.sup > 0.0)
            || (y.sup >= infinity && x.sup > 0.0);

        let inf = if inf_unbounded {
            -infinity
        } else {
            ep_mul_down(infinity, x.inf, y.inf)
                .min(ep_mul_down(infinity, x.inf, y.sup))
                .min(ep_mul_down(infinity, x.sup, y.inf))
                .min(ep_mul_down(infinity, x.sup, y.sup))
        };
        let sup = if sup_unbounded {
            infinity
        } else {
            ep_mul_up(infinity, x.inf, y.inf)
                .max(ep_mul_up(infinity, x.inf, y.sup))
                .max(ep_mul_up(infinity, x.sup, y.inf))
                .max(ep_mul_up(infinity, x.sup, y.sup))
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// Scales by a scalar. The scalar's sign alone decides which endpoint
    /// maps to which bound, so no four-candidate comparison is needed.
    pub fn mul_scalar(self, infinity: f64, scalar: f64) -> Interval {
        debug_assert!(!scalar.is_nan());
        if self.is_empty() {
            return Interval::empty(infinity);
        }
        if scalar == 0.0 {
            return Interval::point(0.0);
        }
        let (inf, sup) = if scalar > 0.0 {
            (
                ep_mul_down(infinity, self.inf, scalar),
                ep_mul_up(infinity, self.sup, scalar),
            )
        } else {
            (
                ep_mul_down(infinity, self.sup, scalar),
                ep_mul_up(infinity, self.inf, scalar),
            )
        };
        Interval::saturated(infinity, inf, sup)
    }

    /// Interval quotient.
    ///
    /// Division by `[0,0]` is empty; `[0,0]` divided by anything nonempty
    /// is `[0,0]`; a denominator with zero strictly inside yields the
    /// entire interval; a denominator touching zero at one endpoint yields
    /// a one-sided unbounded result when the numerator has a definite
    /// sign. A zero-free denominator reduces to `self * recip(rhs)`.
    pub fn div(self, infinity: f64, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty(infinity);
        }
        let (x, y) = (self, rhs);
        if y.inf == 0.0 && y.sup == 0.0 {
            return Interval::empty(infinity);
        }
        if x.inf == 0.0 && x.sup == 0.0 {
            return Interval::point(0.0);
        }
        if y.inf > 0.0 || y.sup < 0.0 {
            return x.mul(infinity, y.recip(infinity));
        }
        if y.inf < 0.0 && y.sup > 0.0 {
            // Zero interior to the denominator: any value is possible.
            return Interval::entire(infinity);
        }
        if y.inf == 0.0 {
            // y = [0, b] with b > 0.
            if x.inf >= 0.0 {
                return Interval::saturated(infinity, ep_div_down(infinity, x.inf, y.sup), infinity);
            }
            if x.sup <= 0.0 {
                return Interval::saturated(infinity, -infinity, ep_div_up(infinity, x.sup, y.sup));
            }
            return Interval::entire(infinity);
        }
        // y = [a, 0] with a < 0.
        if x.inf >= 0.0 {
            return Interval::saturated(infinity, -infinity, ep_div_up(infinity, x.inf, y.inf));
        }
        if x.sup <= 0.0 {
            return Interval::saturated(infinity, ep_div_down(infinity, x.sup, y.inf), infinity);
        }
        Interval::entire(infinity)
    }

    /// Divides both endpoints by a scalar, swapping endpoints and rounding
    /// directions when it is negative. A zero scalar yields empty.
    pub fn div_scalar(self, infinity: f64, scalar: f64) -> Interval {
        debug_assert!(!scalar.is_nan());
        if self.is_empty() || scalar == 0.0 {
            return Interval::empty(infinity);
        }
        let (inf, sup) = if scalar > 0.0 {
            (
                ep_div_down(infinity, self.inf, scalar),
                ep_div_up(infinity, self.sup, scalar),
            )
        } else {
            (
                ep_div_down(infinity, self.sup, scalar),
                ep_div_up(infinity, self.inf, scalar),
            )
        };
        Interval::saturated(infinity, inf, sup)
    }
}
