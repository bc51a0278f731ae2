//! The interval value type, constructors, predicates and set operations.

use std::fmt;

/// A closed real interval `[inf, sup]` of `f64` bounds.
///
/// Plain value type: two scalar fields, `Copy`, no identity. Operations
/// never mutate their operands; every result is a fresh interval.
///
/// The canonical empty interval stores the inverted pair
/// `[infinity, -infinity]` (see [`Interval::empty`]); any interval with
/// `sup < inf` is treated as empty. Bounds at or beyond the caller's
/// finite `infinity` sentinel are unbounded in that direction.
///
/// # Examples
///
/// ```
/// use encl::Interval;
///
/// const INF: f64 = 1e30;
/// let x = Interval::with_bounds(1.0, 2.0);
/// let y = Interval::with_bounds(3.0, 4.0);
/// let sum = x.add(INF, y);
/// assert_eq!(sum, Interval::with_bounds(4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound.
    pub inf: f64,
    /// Upper bound.
    pub sup: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::point(0.0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "[{}, {}]", self.inf, self.sup)
        }
    }
}

impl Interval {
    /// The degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Self {
        debug_assert!(!value.is_nan());
        Self {
            inf: value,
            sup: value,
        }
    }

    /// The interval `[inf, sup]`. Requires `inf <= sup`.
    pub fn with_bounds(inf: f64, sup: f64) -> Self {
        debug_assert!(!inf.is_nan() && !sup.is_nan());
        debug_assert!(inf <= sup, "inverted bounds: [{inf}, {sup}]");
        Self { inf, sup }
    }

    /// The canonical empty interval `[infinity, -infinity]`.
    pub fn empty(infinity: f64) -> Self {
        debug_assert!(infinity > 0.0);
        Self {
            inf: infinity,
            sup: -infinity,
        }
    }

    /// The entire interval `[-infinity, infinity]` ("no information").
    pub fn entire(infinity: f64) -> Self {
        debug_assert!(infinity > 0.0);
        Self {
            inf: -infinity,
            sup: infinity,
        }
    }

    /// Builds `[inf, sup]` with both bounds saturated to the sentinel.
    ///
    /// IEEE infinities produced by overflow collapse onto the sentinel as
    /// well, so stored bounds are always finite.
    pub(crate) fn saturated(infinity: f64, inf: f64, sup: f64) -> Self {
        Self {
            inf: clamp_bound(infinity, inf),
            sup: clamp_bound(infinity, sup),
        }
    }

    /// True iff the interval contains no value (`sup < inf`).
    pub fn is_empty(&self) -> bool {
        self.sup < self.inf
    }

    /// True iff the interval is unbounded on both sides.
    pub fn is_entire(&self, infinity: f64) -> bool {
        self.inf <= -infinity && self.sup >= infinity
    }

    /// True iff `self`, clamped to `[-infinity, infinity]`, lies within
    /// `other`. The empty interval is a subset of everything; no nonempty
    /// interval is a subset of the empty one.
    pub fn is_subset_of(&self, infinity: f64, other: Interval) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }
        other.inf <= self.inf.max(-infinity) && self.sup.min(infinity) <= other.sup
    }

    /// True iff the nonempty interval contains the point `value`.
    pub fn contains(&self, infinity: f64, value: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        (self.inf <= value || self.inf <= -infinity)
            && (value <= self.sup || self.sup >= infinity)
    }

    /// `[max(inf1, inf2), min(sup1, sup2)]`.
    ///
    /// Disjoint operands yield an inverted pair; callers must check
    /// [`Interval::is_empty`] on the result.
    pub fn intersect(&self, other: Interval) -> Interval {
        Interval {
            inf: self.inf.max(other.inf),
            sup: self.sup.min(other.sup),
        }
    }

    /// Smallest interval enclosing the union of both operands.
    /// An empty side contributes nothing.
    pub fn hull(&self, other: Interval) -> Interval {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        Interval {
            inf: self.inf.min(other.inf),
            sup: self.sup.max(other.sup),
        }
    }

    /// Width `sup - inf`, rounded up; `infinity` when a side is unbounded,
    /// `0.0` when empty.
    pub fn width(&self, infinity: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if self.inf <= -infinity || self.sup >= infinity {
            return infinity;
        }
        crate::round::sub_up(self.sup, self.inf).min(infinity)
    }

    /// Midpoint. Falls back to the finite bound when one side is unbounded
    /// and to `0.0` for the entire interval.
    pub fn mid(&self, infinity: f64) -> f64 {
        debug_assert!(!self.is_empty());
        match (self.inf <= -infinity, self.sup >= infinity) {
            (true, true) => 0.0,
            (true, false) => self.sup,
            (false, true) => self.inf,
            (false, false) => 0.5 * (self.inf + self.sup),
        }
    }
}

fn clamp_bound(infinity: f64, b: f64) -> f64 {
    debug_assert!(!b.is_nan());
    if b <= -infinity {
        -infinity
    } else if b >= infinity {
        infinity
    } else {
        b
    }
}
