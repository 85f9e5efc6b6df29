use crate::math::Real;

/// A closed interval `[min, max]` of the real line.
///
/// Produced by projecting a shape onto an axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// The lower bound of the interval.
    pub min: Real,
    /// The upper bound of the interval.
    pub max: Real,
}

impl Interval {
    /// Creates a new interval. The bounds are swapped if `min > max`.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        if min > max {
            Interval { min: max, max: min }
        } else {
            Interval { min, max }
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    #[inline]
    pub fn point(value: Real) -> Self {
        Interval {
            min: value,
            max: value,
        }
    }

    /// Grows this interval so that it contains `value`.
    #[inline]
    pub fn take_point(&mut self, value: Real) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// The width `max - min` of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.max - self.min
    }

    /// The midpoint of this interval.
    #[inline]
    pub fn midpoint(&self) -> Real {
        (self.min + self.max) * 0.5
    }

    /// The signed penetration between `self` and `other`.
    ///
    /// Returns the smallest of `self.max - other.min` (how far `self` must move toward the
    /// negative side to clear `other`) and `other.max - self.min` (how far it must move toward
    /// the positive side), negated when moving toward the negative side is the cheapest.
    /// This accounts for containment, where the plain intersection length would
    /// under-estimate the required translation.
    ///
    /// Only meaningful when [`Interval::overlap`] is positive.
    #[inline]
    pub fn signed_penetration(&self, other: &Interval) -> Real {
        let toward_neg = self.max - other.min;
        let toward_pos = other.max - self.min;

        if toward_neg < toward_pos {
            -toward_neg
        } else {
            toward_pos
        }
    }

    /// The length of the translation needed to separate `self` from `other`.
    ///
    /// This is positive if and only if the two intervals overlap with a non-zero length.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> Real {
        (self.max - other.min).min(other.max - self.min)
    }
}
