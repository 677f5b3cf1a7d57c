/*
    Composite capabilities

    Each composite is the union of its members and nothing else.
    The blanket impls make satisfaction structural: a type never
    declares a composite, it only declares the members.
*/

use crate::identity::ZeroConstructible;
use crate::ops::*;
use crate::order::BoundedTotalOrder;

/// `Addable + Subtractable`
pub trait Additive: Addable + Subtractable {}

impl<T> Additive for T where T: Addable + Subtractable {}

/// `Multiplicable + Dividable + Modulable`
pub trait Multiplicative: Multiplicable + Dividable + Modulable {}

impl<T> Multiplicative for T where T: Multiplicable + Dividable + Modulable {}

/// `Additive` together with its wrapping counterparts.
pub trait AdditiveWithOverflow:
    Additive + AddableWithOverflow + SubtractableWithOverflow
{
}

impl<T> AdditiveWithOverflow for T where
    T: Additive + AddableWithOverflow + SubtractableWithOverflow
{
}

/// All wrapping binary operations.
pub trait OverflowOperable:
    AddableWithOverflow + SubtractableWithOverflow + MultiplicableWithOverflow
{
}

impl<T> OverflowOperable for T where
    T: AddableWithOverflow + SubtractableWithOverflow + MultiplicableWithOverflow
{
}

/// All checked binary operations.
pub trait CheckedOperable: AddableChecked + SubtractableChecked + MultiplicableChecked {}

impl<T> CheckedOperable for T where T: AddableChecked + SubtractableChecked + MultiplicableChecked {}

/// Arithmetic without negation, e.g. unsigned integers.
pub trait UnsignedArithmeticType:
    ZeroConstructible + Additive + Multiplicative + BoundedTotalOrder
{
}

impl<T> UnsignedArithmeticType for T where
    T: ZeroConstructible + Additive + Multiplicative + BoundedTotalOrder
{
}

/// Full arithmetic: [`UnsignedArithmeticType`] plus negation.
pub trait ArithmeticType: UnsignedArithmeticType + Negatable {}

impl<T> ArithmeticType for T where T: UnsignedArithmeticType + Negatable {}
