/*
    Ordering capabilities
*/

use std::cmp::Ordering;

/// A total order declared by the type itself.
///
/// Unlike `Ord`, this is never inferred: every conforming type states how
/// its values compare, which lets floats (IEEE total order) and `bool`
/// (explicit `false < true`) take part.
pub trait TotalOrder {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns true if `self` is strictly less than `other`.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns true if `self` is strictly greater than `other`.
    #[inline]
    fn succeeds(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

/// A total order with statically known extreme values.
///
/// For every value `x`: `MIN_VALUE <= x <= MAX_VALUE` under [`TotalOrder`].
pub trait BoundedTotalOrder: TotalOrder + Sized {
    /// The smallest representable value.
    const MIN_VALUE: Self;

    /// The largest representable value.
    const MAX_VALUE: Self;

    /// Returns true if `self` lies within `[MIN_VALUE, MAX_VALUE]`.
    #[inline]
    fn is_within_bounds(&self) -> bool {
        !self.precedes(&Self::MIN_VALUE) && !self.succeeds(&Self::MAX_VALUE)
    }
}
