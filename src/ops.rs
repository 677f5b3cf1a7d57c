/*
    Atomic capabilities
*/

/// Types closed under addition.
///
/// Non-wrapping: for fixed-width integers an out-of-range sum traps.
pub trait Addable: Sized {
    /// Returns `self + rhs`.
    fn plus(self, rhs: Self) -> Self;
}

/// Types closed under subtraction.
///
/// Non-wrapping: for fixed-width integers an out-of-range difference traps.
pub trait Subtractable: Sized {
    /// Returns `self - rhs`.
    fn minus(self, rhs: Self) -> Self;
}

/// Types closed under negation.
pub trait Negatable: Sized {
    /// Returns `-self`.
    fn negated(self) -> Self;
}

/// Types closed under multiplication.
///
/// Non-wrapping: for fixed-width integers an out-of-range product traps.
pub trait Multiplicable: Sized {
    /// Returns `self * rhs`.
    fn times(self, rhs: Self) -> Self;
}

/// Types closed under division.
///
/// Division by zero traps for integer-like types. Floating-point types
/// return infinity or NaN instead.
pub trait Dividable: Sized {
    /// Returns `self / rhs`.
    fn divided_by(self, rhs: Self) -> Self;
}

/// Types closed under the remainder operation.
///
/// Same failure policy as [`Dividable`].
pub trait Modulable: Sized {
    /// Returns `self % rhs`.
    fn remainder(self, rhs: Self) -> Self;
}

/// Addition that wraps around at the type's bounds and never fails.
pub trait AddableWithOverflow: Sized {
    /// Returns `self + rhs` reduced modulo `2^bits`.
    fn wrapping_plus(self, rhs: Self) -> Self;
}

/// Subtraction that wraps around at the type's bounds and never fails.
pub trait SubtractableWithOverflow: Sized {
    /// Returns `self - rhs` reduced modulo `2^bits`.
    fn wrapping_minus(self, rhs: Self) -> Self;
}

/// Multiplication that wraps around at the type's bounds and never fails.
pub trait MultiplicableWithOverflow: Sized {
    /// Returns `self * rhs` reduced modulo `2^bits`.
    fn wrapping_times(self, rhs: Self) -> Self;
}

/// Addition that reports overflow instead of trapping.
pub trait AddableChecked: Sized {
    /// Returns `self + rhs`, or `None` if it does not fit.
    fn checked_plus(self, rhs: Self) -> Option<Self>;
}

/// Subtraction that reports overflow instead of trapping.
pub trait SubtractableChecked: Sized {
    /// Returns `self - rhs`, or `None` if it does not fit.
    fn checked_minus(self, rhs: Self) -> Option<Self>;
}

/// Multiplication that reports overflow instead of trapping.
pub trait MultiplicableChecked: Sized {
    /// Returns `self * rhs`, or `None` if it does not fit.
    fn checked_times(self, rhs: Self) -> Option<Self>;
}
