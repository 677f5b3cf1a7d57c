/*
    Derived in-place operators
*/

use crate::ops::*;

/// A closed binary operation on `T`, named by a zero-sized marker.
///
/// Each marker forwards to exactly one atomic capability, which lets a
/// single generic [`accumulate`] serve every compound-assignment operator.
pub trait BinaryOperator<T> {
    /// Applies the operation to `lhs` and `rhs`.
    fn apply(lhs: T, rhs: T) -> T;
}

macro_rules! binary_operator {
    ($(#[$doc:meta])* $marker:ident, $cap:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug)]
        pub enum $marker {}

        impl<T: $cap> BinaryOperator<T> for $marker {
            #[inline(always)]
            fn apply(lhs: T, rhs: T) -> T {
                lhs.$method(rhs)
            }
        }
    };
}

binary_operator!(
    /// Marker for [`Addable::plus`].
    Plus, Addable, plus
);
binary_operator!(
    /// Marker for [`Subtractable::minus`].
    Minus, Subtractable, minus
);
binary_operator!(
    /// Marker for [`Multiplicable::times`].
    Times, Multiplicable, times
);
binary_operator!(
    /// Marker for [`Dividable::divided_by`].
    DividedBy, Dividable, divided_by
);
binary_operator!(
    /// Marker for [`Modulable::remainder`].
    Remainder, Modulable, remainder
);
binary_operator!(
    /// Marker for [`AddableWithOverflow::wrapping_plus`].
    WrappingPlus, AddableWithOverflow, wrapping_plus
);
binary_operator!(
    /// Marker for [`SubtractableWithOverflow::wrapping_minus`].
    WrappingMinus, SubtractableWithOverflow, wrapping_minus
);
binary_operator!(
    /// Marker for [`MultiplicableWithOverflow::wrapping_times`].
    WrappingTimes, MultiplicableWithOverflow, wrapping_times
);

/// Replaces `target` with `Op::apply(target, rhs)`.
///
/// This is the only definition of in-place arithmetic in the crate.
#[inline]
pub fn accumulate<Op, T>(target: &mut T, rhs: T)
where
    Op: BinaryOperator<T>,
    T: Clone,
{
    *target = Op::apply(target.clone(), rhs);
}

/// In-place forms of the binary capabilities.
///
/// Requires `Clone`: a type that is not `Clone` gets no in-place forms,
/// even when it has the matching capability. Each method is available
/// once the type also has that capability (`plus_assign` needs
/// [`Addable`], `wrapping_times_assign` needs [`MultiplicableWithOverflow`]).
///
/// The trait is implemented for every `Clone` type, so no type supplies
/// its own version: `x.plus_assign(y)` is always `x = x.plus(y)`.
pub trait CompoundAssign: Clone {
    /// `self = self.plus(rhs)`
    #[inline]
    fn plus_assign(&mut self, rhs: Self)
    where
        Self: Addable,
    {
        accumulate::<Plus, _>(self, rhs)
    }

    /// `self = self.minus(rhs)`
    #[inline]
    fn minus_assign(&mut self, rhs: Self)
    where
        Self: Subtractable,
    {
        accumulate::<Minus, _>(self, rhs)
    }

    /// `self = self.times(rhs)`
    #[inline]
    fn times_assign(&mut self, rhs: Self)
    where
        Self: Multiplicable,
    {
        accumulate::<Times, _>(self, rhs)
    }

    /// `self = self.divided_by(rhs)`
    #[inline]
    fn divided_by_assign(&mut self, rhs: Self)
    where
        Self: Dividable,
    {
        accumulate::<DividedBy, _>(self, rhs)
    }

    /// `self = self.remainder(rhs)`
    #[inline]
    fn remainder_assign(&mut self, rhs: Self)
    where
        Self: Modulable,
    {
        accumulate::<Remainder, _>(self, rhs)
    }

    /// `self = self.wrapping_plus(rhs)`
    #[inline]
    fn wrapping_plus_assign(&mut self, rhs: Self)
    where
        Self: AddableWithOverflow,
    {
        accumulate::<WrappingPlus, _>(self, rhs)
    }

    /// `self = self.wrapping_minus(rhs)`
    #[inline]
    fn wrapping_minus_assign(&mut self, rhs: Self)
    where
        Self: SubtractableWithOverflow,
    {
        accumulate::<WrappingMinus, _>(self, rhs)
    }

    /// `self = self.wrapping_times(rhs)`
    #[inline]
    fn wrapping_times_assign(&mut self, rhs: Self)
    where
        Self: MultiplicableWithOverflow,
    {
        accumulate::<WrappingTimes, _>(self, rhs)
    }
}

impl<T: Clone> CompoundAssign for T {}
