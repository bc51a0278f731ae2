//! Tight range of `a*x^2 + b*x` over an interval domain.

use crate::interval::{ep_mul_down, ep_mul_up};
use crate::round::{add_up, div_up, mul_up};
use crate::Interval;

/// Upper bound of `a*x^2 + b*x` rounded up, for `x >= 0` and a finite
/// `x_val` endpoint. Intermediate overflow collapses onto the sentinel.
fn eval_up(infinity: f64, a: f64, b_up: f64, x_val: f64) -> f64 {
    debug_assert!(x_val >= 0.0);
    if x_val == 0.0 {
        return 0.0;
    }
    let sq = mul_up(x_val, x_val);
    let quad_term = if a == 0.0 {
        0.0
    } else {
        mul_up(a, sq).clamp(-infinity, infinity)
    };
    let lin_term = ep_mul_up(infinity, b_up, x_val).clamp(-infinity, infinity);
    add_up(quad_term, lin_term).clamp(-infinity, infinity)
}

/// Exact (tight, not merely sound) upper bound of `a*x^2 + b*x` for
/// `x ∈ x_rng` and `b ∈ b_rng`.
///
/// Reflecting `x` through zero reduces an entirely nonpositive domain to
/// a nonnegative one; a straddling domain recurses on its two halves. In
/// the nonnegative case the maximum is attained at an endpoint or, when
/// `a < 0`, at the parabola's vertex `b/(-2a)` if it lies inside the
/// domain. Empty operands yield `-infinity` (the maximum over nothing).
pub fn quad_upper_bound(infinity: f64, a: f64, b_rng: Interval, x_rng: Interval) -> f64 {
    debug_assert!(!a.is_nan());
    if x_rng.is_empty() || b_rng.is_empty() {
        return -infinity;
    }
    if x_rng.inf == 0.0 && x_rng.sup == 0.0 {
        return 0.0;
    }
    if x_rng.sup <= 0.0 {
        return quad_upper_bound(infinity, a, b_rng.neg(), x_rng.neg());
    }
    if x_rng.inf < 0.0 {
        let pos = quad_upper_bound(infinity, a, b_rng, Interval::with_bounds(0.0, x_rng.sup));
        let neg = quad_upper_bound(
            infinity,
            a,
            b_rng.neg(),
            Interval::with_bounds(0.0, -x_rng.inf),
        );
        return pos.max(neg);
    }

    // x_rng.inf >= 0: for nonnegative x, only b's upper end matters.
    let b_up = b_rng.sup;
    if x_rng.sup >= infinity && (a > 0.0 || (a == 0.0 && b_up > 0.0)) {
        return infinity;
    }
    if b_up >= infinity {
        return infinity;
    }

    let mut best = eval_up(infinity, a, b_up, x_rng.inf.min(infinity));
    if x_rng.sup < infinity {
        best = best.max(eval_up(infinity, a, b_up, x_rng.sup));
    }

    if a < 0.0 && b_up > 0.0 {
        // Concave: vertex at x* = b_up / (-2a); admit it with outward
        // comparisons so a vertex on the boundary is never missed.
        let neg2a = -2.0 * a;
        let at_or_above_lo = b_up >= ep_mul_down(infinity, neg2a, x_rng.inf);
        let at_or_below_hi = x_rng.sup >= infinity || b_up <= ep_mul_up(infinity, neg2a, x_rng.sup);
        if at_or_above_lo && at_or_below_hi {
            let half_b = 0.5 * b_up;
            let vertex = mul_up(half_b, div_up(half_b, -a));
            best = best.max(vertex);
        }
    }
    best.clamp(-infinity, infinity)
}

/// Full range of `a*x^2 + b*x`: the upper bound from
/// [`quad_upper_bound`], the lower bound from the negated problem
/// `-(max((-a)*x^2 + (-b)*x))`.
pub fn quad_range(infinity: f64, a: f64, b_rng: Interval, x_rng: Interval) -> Interval {
    if x_rng.is_empty() || b_rng.is_empty() {
        return Interval::empty(infinity);
    }
    let sup = quad_upper_bound(infinity, a, b_rng, x_rng);
    let inf = -quad_upper_bound(infinity, -a, b_rng.neg(), x_rng);
    Interval::saturated(infinity, inf, sup)
}
