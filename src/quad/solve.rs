//! Enclosures of the solution set of `a*x^2 + b*x >= c`.

use crate::round::{
    add_down, add_up, div_down, div_up, mul_down, mul_up, sqrt_down, sqrt_up, sub_up,
};
use crate::Interval;

/// Discriminant `b^2 + 4ac` rounded up.
fn disc_up(a: f64, b: f64, c: f64) -> f64 {
    add_up(mul_up(b, b), mul_up(4.0 * a, c))
}

/// Discriminant `b^2 + 4ac` rounded down, clamped into sqrt's domain.
fn disc_down(a: f64, b: f64, c: f64) -> f64 {
    add_down(mul_down(b, b), mul_down(4.0 * a, c)).max(0.0)
}

/// Enclosure of `{x >= 0 : a*x^2 + b*x >= c}` for scalar coefficients.
///
/// Roots come from the quadratic formula with a four-way split on the
/// signs of `b` and `c`: each emitted bound uses whichever equivalent
/// root expression adds `b` and `sqrt(disc)` with matching signs, so no
/// catastrophic cancellation occurs, and every intermediate is computed
/// with directed rounding. Infeasible configurations return the empty
/// interval; an unsatisfiable-but-roundoff-ambiguous discriminant errs
/// toward a thin nonempty result, never toward losing solutions.
pub fn solve_quad_positive_scalar(infinity: f64, a: f64, b: f64, c: f64) -> Interval {
    debug_assert!(!a.is_nan() && !b.is_nan() && !c.is_nan());

    // Unbounded coefficients first: beyond the sentinel the formulas
    // below would manufacture finite roots out of sentinel magnitudes.
    if c <= -infinity || b >= infinity {
        return Interval::with_bounds(0.0, infinity);
    }
    if b <= -infinity {
        // The linear term drags every positive x to -infinity; only x = 0
        // can survive.
        return if c <= 0.0 {
            Interval::point(0.0)
        } else {
            Interval::empty(infinity)
        };
    }
    if c >= infinity {
        return if a > 0.0 || (a == 0.0 && b > 0.0) {
            Interval::with_bounds(0.0, infinity)
        } else {
            Interval::empty(infinity)
        };
    }

    if a == 0.0 {
        // Linear: b*x >= c on x >= 0.
        if b > 0.0 {
            let lo = if c <= 0.0 { 0.0 } else { div_down(c, b).max(0.0) };
            return Interval::saturated(infinity, lo, infinity);
        }
        if b < 0.0 {
            if c > 0.0 {
                return Interval::empty(infinity);
            }
            return Interval::saturated(infinity, 0.0, div_up(c, b));
        }
        return if c <= 0.0 {
            Interval::with_bounds(0.0, infinity)
        } else {
            Interval::empty(infinity)
        };
    }

    if a > 0.0 {
        if c <= 0.0 {
            // x = 0 satisfies and the convex branch escapes upward; the
            // interval hull of the (possibly split) solution set is the
            // whole ray.
            return Interval::with_bounds(0.0, infinity);
        }
        // Strictly positive right-hand side: solutions start at the larger
        // root, rounded down.
        let lo = if b >= 0.0 {
            // x2 = 2c / (b + sqrt(disc)), additions all same-signed.
            let den = add_up(b, sqrt_up(disc_up(a, b, c)));
            div_down(2.0 * c, den).max(0.0)
        } else {
            // x2 = (-b + sqrt(disc)) / (2a), both summands positive.
            let num = add_down(-b, sqrt_down(disc_down(a, b, c)));
            div_down(num, 2.0 * a).max(0.0)
        };
        return Interval::saturated(infinity, lo, infinity);
    }

    // a < 0.
    if c > 0.0 {
        // Concave and the requirement excludes x = 0: feasible only
        // between the two positive roots, and only when the parabola
        // reaches c at all.
        if b <= 0.0 {
            return Interval::empty(infinity);
        }
        let d_up = disc_up(a, b, c);
        if d_up < 0.0 {
            return Interval::empty(infinity);
        }
        let sqrt_d = sqrt_up(d_up.max(0.0));
        let lo = div_down(2.0 * c, add_up(b, sqrt_d)).max(0.0);
        let hi = div_up(add_up(b, sqrt_d), 2.0 * -a);
        return Interval::saturated(infinity, lo, hi.max(lo));
    }
    // c <= 0: x = 0 qualifies; the set is [0, larger root].
    let hi = if b >= 0.0 {
        div_up(add_up(b, sqrt_up(disc_up(a, b, c))), 2.0 * -a)
    } else {
        // x2 = 2c / (b - sqrt(disc)): numerator and denominator are both
        // nonpositive with no cancellation in the denominator.
        div_up(2.0 * c, sub_up(b, sqrt_down(disc_down(a, b, c))))
    };
    Interval::saturated(infinity, 0.0, hi.max(0.0))
}

/// Lifts [`solve_quad_positive_scalar`] to interval-valued `b` and `c`:
/// `x >= 0` belongs to the solution set when the value interval
/// `a*x^2 + b_rng*x` can meet `[c_rng.inf, c_rng.sup]`, i.e. when its top
/// reaches `c_rng.inf` and its bottom stays below `c_rng.sup`. The two
/// extremal scalar sub-problems are solved and intersected.
pub fn solve_quad_positive(infinity: f64, a: f64, b_rng: Interval, c_rng: Interval) -> Interval {
    if b_rng.is_empty() || c_rng.is_empty() {
        return Interval::empty(infinity);
    }
    let reaches_floor = solve_quad_positive_scalar(infinity, a, b_rng.sup, c_rng.inf);
    let stays_below_cap = solve_quad_positive_scalar(infinity, -a, -b_rng.inf, -c_rng.sup);
    let r = reaches_floor.intersect(stays_below_cap);
    if r.is_empty() {
        Interval::empty(infinity)
    } else {
        r
    }
}

/// Enclosure of `{x ∈ R : a*x^2 + b*x >= c-range}` over the whole real
/// line: the nonnegative solution unified with the mirrored solution of
/// the reflected problem (`x = -y`, which negates the linear
/// coefficient).
pub fn solve_quad(infinity: f64, a: f64, b_rng: Interval, c_rng: Interval) -> Interval {
    let pos = solve_quad_positive(infinity, a, b_rng, c_rng);
    let neg = solve_quad_positive(infinity, a, b_rng.neg(), c_rng).neg();
    let r = pos.hull(neg);
    if r.is_empty() {
        Interval::empty(infinity)
    } else {
        r
    }
}
