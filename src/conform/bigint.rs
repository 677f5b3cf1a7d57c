/*
    Arbitrary-precision integers

    Unbounded, so neither type satisfies `UnsignedArithmeticType`,
    but both can be summed and multiplied. Only subtraction below
    zero on `BigUint` and division by zero can fail.
*/

use num_bigint::{BigInt, BigUint};
use num_traits::{CheckedSub, One, Zero};

use super::*;

macro_rules! big_conformance {
    ($($t:ty),*) => {
        $(
            impl Addable for $t {
                #[inline]
                fn plus(self, rhs: $t) -> $t {
                    self + rhs
                }
            }

            impl Multiplicable for $t {
                #[inline]
                fn times(self, rhs: $t) -> $t {
                    self * rhs
                }
            }

            impl Dividable for $t {
                #[inline]
                #[track_caller]
                fn divided_by(self, rhs: $t) -> $t {
                    if Zero::is_zero(&rhs) {
                        trap(ArithmeticError::division_by_zero::<$t>(Operation::Div))
                    }
                    self / rhs
                }
            }

            impl Modulable for $t {
                #[inline]
                #[track_caller]
                fn remainder(self, rhs: $t) -> $t {
                    if Zero::is_zero(&rhs) {
                        trap(ArithmeticError::division_by_zero::<$t>(Operation::Rem))
                    }
                    self % rhs
                }
            }

            impl AddableChecked for $t {
                #[inline]
                fn checked_plus(self, rhs: $t) -> Option<$t> {
                    Some(self + rhs)
                }
            }

            impl MultiplicableChecked for $t {
                #[inline]
                fn checked_times(self, rhs: $t) -> Option<$t> {
                    Some(self * rhs)
                }
            }

            impl ZeroConstructible for $t {
                #[inline]
                fn zero() -> $t {
                    <$t as Zero>::zero()
                }
            }

            impl OneConstructible for $t {
                #[inline]
                fn one() -> $t {
                    <$t as One>::one()
                }
            }

            impl TotalOrder for $t {
                #[inline]
                fn compare(&self, other: &$t) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

big_conformance!(BigInt, BigUint);

impl Subtractable for BigInt {
    #[inline]
    fn minus(self, rhs: BigInt) -> BigInt {
        self - rhs
    }
}

impl SubtractableChecked for BigInt {
    #[inline]
    fn checked_minus(self, rhs: BigInt) -> Option<BigInt> {
        Some(self - rhs)
    }
}

impl Negatable for BigInt {
    #[inline]
    fn negated(self) -> BigInt {
        -self
    }
}

impl Subtractable for BigUint {
    #[inline]
    #[track_caller]
    fn minus(self, rhs: BigUint) -> BigUint {
        or_overflow!(CheckedSub::checked_sub(&self, &rhs), BigUint, Operation::Sub)
    }
}

impl SubtractableChecked for BigUint {
    #[inline]
    fn checked_minus(self, rhs: BigUint) -> Option<BigUint> {
        CheckedSub::checked_sub(&self, &rhs)
    }
}
