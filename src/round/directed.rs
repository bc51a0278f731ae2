//! Correctly rounded directed primitives for the four basic operations
//! and square root.

/// Largest `f64` strictly below `s`, saturating overflow to `f64::MAX`.
fn step_down(s: f64) -> f64 {
    if s == f64::INFINITY {
        f64::MAX
    } else {
        s.next_down()
    }
}

/// Smallest `f64` strictly above `s`, saturating overflow to `f64::MIN`.
fn step_up(s: f64) -> f64 {
    if s == f64::NEG_INFINITY {
        f64::MIN
    } else {
        s.next_up()
    }
}

/// Exact rounding error of `s = a + b` (Knuth two-sum).
///
/// The true sum is `s + err` exactly; no intermediate overflows as long as
/// `s` itself did not overflow.
fn two_sum_err(a: f64, b: f64, s: f64) -> f64 {
    let bb = s - a;
    (a - (s - bb)) + (b - bb)
}

/// `a + b` rounded toward negative infinity.
pub fn add_down(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan());
    let s = a + b;
    if s.is_infinite() {
        // Overflow in round-to-nearest implies the true sum lies beyond
        // f64::MAX, so the saturated value is still a valid lower bound.
        return if s > 0.0 { f64::MAX } else { s };
    }
    if two_sum_err(a, b, s) < 0.0 {
        s.next_down()
    } else {
        s
    }
}

/// `a + b` rounded toward positive infinity.
pub fn add_up(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan());
    let s = a + b;
    if s.is_infinite() {
        return if s < 0.0 { f64::MIN } else { s };
    }
    if two_sum_err(a, b, s) > 0.0 {
        s.next_up()
    } else {
        s
    }
}

/// `a - b` rounded toward negative infinity.
pub fn sub_down(a: f64, b: f64) -> f64 {
    add_down(a, -b)
}

/// `a - b` rounded toward positive infinity.
pub fn sub_up(a: f64, b: f64) -> f64 {
    add_up(a, -b)
}

/// `a * b` rounded toward negative infinity.
pub fn mul_down(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan());
    let p = a * b;
    if p.is_infinite() {
        return if p > 0.0 { f64::MAX } else { p };
    }
    if p == 0.0 {
        // Either an exact zero factor or total underflow. A nonzero product
        // that underflowed is bounded below by zero when positive and by
        // the largest negative subnormal when negative.
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        return if (a > 0.0) == (b > 0.0) {
            0.0
        } else {
            (0.0f64).next_down()
        };
    }
    let e = a.mul_add(b, -p);
    if e < 0.0 || (e == 0.0 && p.is_subnormal()) {
        step_down(p)
    } else {
        p
    }
}

/// `a * b` rounded toward positive infinity.
pub fn mul_up(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan());
    let p = a * b;
    if p.is_infinite() {
        return if p < 0.0 { f64::MIN } else { p };
    }
    if p == 0.0 {
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        return if (a > 0.0) == (b > 0.0) {
            (0.0f64).next_up()
        } else {
            0.0
        };
    }
    let e = a.mul_add(b, -p);
    if e > 0.0 || (e == 0.0 && p.is_subnormal()) {
        step_up(p)
    } else {
        p
    }
}

/// `a / b` rounded toward negative infinity. `b` must be nonzero.
pub fn div_down(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan() && b != 0.0);
    let q = a / b;
    if q.is_infinite() {
        return if q > 0.0 { f64::MAX } else { q };
    }
    // r = q*b - a with a single rounding; the true quotient is below q
    // exactly when r and b share a sign.
    let r = q.mul_add(b, -a);
    if (r != 0.0 && (r > 0.0) == (b > 0.0)) || (r == 0.0 && q.is_subnormal()) {
        step_down(q)
    } else {
        q
    }
}

/// `a / b` rounded toward positive infinity. `b` must be nonzero.
pub fn div_up(a: f64, b: f64) -> f64 {
    debug_assert!(!a.is_nan() && !b.is_nan() && b != 0.0);
    let q = a / b;
    if q.is_infinite() {
        return if q < 0.0 { f64::MIN } else { q };
    }
    let r = q.mul_add(b, -a);
    if (r != 0.0 && (r > 0.0) != (b > 0.0)) || (r == 0.0 && q.is_subnormal()) {
        step_up(q)
    } else {
        q
    }
}

/// `sqrt(x)` rounded toward negative infinity. `x` must be nonnegative.
pub fn sqrt_down(x: f64) -> f64 {
    debug_assert!(x >= 0.0);
    let r = x.sqrt();
    if r.is_infinite() {
        return f64::MAX;
    }
    // r^2 > x exactly when r overshot the true root.
    if r.mul_add(r, -x) > 0.0 {
        r.next_down()
    } else {
        r
    }
}

/// `sqrt(x)` rounded toward positive infinity. `x` must be nonnegative.
pub fn sqrt_up(x: f64) -> f64 {
    debug_assert!(x >= 0.0);
    let r = x.sqrt();
    if r.is_infinite() {
        return r;
    }
    if r.mul_add(r, -x) < 0.0 {
        r.next_up()
    } else {
        r
    }
}

/// One-ULP downward padding for results with no error-free transformation
/// (libm transcendentals). Sound only up to libm's own accuracy.
pub fn pad_down(v: f64) -> f64 {
    debug_assert!(!v.is_nan());
    step_down(v)
}

/// One-ULP upward padding, counterpart of [`pad_down`].
pub fn pad_up(v: f64) -> f64 {
    debug_assert!(!v.is_nan());
    step_up(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sums_are_unchanged() {
        assert_eq!(add_down(2.0, 3.0), 5.0);
        assert_eq!(add_up(2.0, 3.0), 5.0);
        assert_eq!(sub_down(1.5, 0.25), 1.25);
        assert_eq!(sub_up(1.5, 0.25), 1.25);
    }

    #[test]
    fn test_inexact_sum_brackets_true_value() {
        // 0.1 + 0.2 is inexact in binary64.
        let lo = add_down(0.1, 0.2);
        let hi = add_up(0.1, 0.2);
        assert!(lo < hi);
        assert_eq!(hi, lo.next_up());
        assert!(lo <= 0.1 + 0.2 && 0.1 + 0.2 <= hi);
    }

    #[test]
    fn test_mul_exact_and_inexact() {
        assert_eq!(mul_down(3.0, 4.0), 12.0);
        assert_eq!(mul_up(3.0, 4.0), 12.0);
        assert_eq!(mul_down(-3.0, 4.0), -12.0);

        // The true product of the rounded operands fl(0.1)^2 lies strictly
        // above the literal 0.01, so bracket the product, not the literal.
        let lo = mul_down(0.1, 0.1);
        let hi = mul_up(0.1, 0.1);
        assert!(lo < hi);
        assert_eq!(hi, lo.next_up());
        assert!(lo <= 0.1 * 0.1 && 0.1 * 0.1 <= hi);
    }

    #[test]
    fn test_mul_zero_and_sign() {
        assert_eq!(mul_down(0.0, 1e300), 0.0);
        assert_eq!(mul_up(0.0, -1e300), 0.0);
        // Underflowing nonzero products stay bracketed around zero.
        assert!(mul_down(1e-200, -1e-200) < 0.0);
        assert_eq!(mul_up(1e-200, -1e-200), 0.0);
        assert_eq!(mul_down(1e-200, 1e-200), 0.0);
        assert!(mul_up(1e-200, 1e-200) > 0.0);
    }

    #[test]
    fn test_mul_overflow_saturates() {
        assert_eq!(mul_down(1e300, 1e300), f64::MAX);
        assert_eq!(mul_up(1e300, 1e300), f64::INFINITY);
        assert_eq!(mul_up(-1e300, 1e300), f64::MIN);
        assert_eq!(mul_down(-1e300, 1e300), f64::NEG_INFINITY);
    }

    #[test]
    fn test_div_brackets_quotient() {
        // 1/3 is inexact.
        let lo = div_down(1.0, 3.0);
        let hi = div_up(1.0, 3.0);
        assert_eq!(hi, lo.next_up());
        assert!(lo * 3.0 <= 1.0 && hi * 3.0 >= 1.0);

        assert_eq!(div_down(6.0, 3.0), 2.0);
        assert_eq!(div_up(6.0, 3.0), 2.0);
        assert_eq!(div_down(-6.0, 3.0), -2.0);
    }

    #[test]
    fn test_div_negative_denominator() {
        let lo = div_down(1.0, -3.0);
        let hi = div_up(1.0, -3.0);
        assert!(lo < hi);
        assert!(lo <= -1.0 / 3.0 && -1.0 / 3.0 <= hi);
    }

    #[test]
    fn test_sqrt_bounds() {
        assert_eq!(sqrt_down(4.0), 2.0);
        assert_eq!(sqrt_up(4.0), 2.0);
        assert_eq!(sqrt_down(0.0), 0.0);

        let lo = sqrt_down(2.0);
        let hi = sqrt_up(2.0);
        assert_eq!(hi, lo.next_up());
        assert!(lo * lo <= 2.0 && hi * hi >= 2.0);
    }

    #[test]
    fn test_pad_is_one_ulp() {
        let v = 1.0f64;
        assert_eq!(pad_down(v), v.next_down());
        assert_eq!(pad_up(v), v.next_up());
    }
}
