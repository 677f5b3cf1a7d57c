/*
    Fixed-width integers

    Non-wrapping operations trap on overflow regardless of the build
    profile; `overflow-checks` plays no part.
*/

use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, WrappingAdd,
    WrappingMul, WrappingSub,
};

use super::*;

// Division and remainder: zero divisor first, then `MIN / -1`.
macro_rules! checked_quotient {
    ($lhs:expr, $rhs:expr, $t:ty, $op:expr, $checked:path) => {
        if $rhs == 0 {
            trap(ArithmeticError::division_by_zero::<$t>($op))
        } else {
            or_overflow!($checked(&$lhs, &$rhs), $t, $op)
        }
    };
}

macro_rules! int_conformance {
    ($($t:ty),*) => {
        $(
            impl Addable for $t {
                #[inline]
                #[track_caller]
                fn plus(self, rhs: $t) -> $t {
                    or_overflow!(CheckedAdd::checked_add(&self, &rhs), $t, Operation::Add)
                }
            }

            impl Subtractable for $t {
                #[inline]
                #[track_caller]
                fn minus(self, rhs: $t) -> $t {
                    or_overflow!(CheckedSub::checked_sub(&self, &rhs), $t, Operation::Sub)
                }
            }

            impl Multiplicable for $t {
                #[inline]
                #[track_caller]
                fn times(self, rhs: $t) -> $t {
                    or_overflow!(CheckedMul::checked_mul(&self, &rhs), $t, Operation::Mul)
                }
            }

            impl Dividable for $t {
                #[inline]
                #[track_caller]
                fn divided_by(self, rhs: $t) -> $t {
                    checked_quotient!(self, rhs, $t, Operation::Div, CheckedDiv::checked_div)
                }
            }

            impl Modulable for $t {
                #[inline]
                #[track_caller]
                fn remainder(self, rhs: $t) -> $t {
                    checked_quotient!(self, rhs, $t, Operation::Rem, CheckedRem::checked_rem)
                }
            }

            impl AddableWithOverflow for $t {
                #[inline(always)]
                fn wrapping_plus(self, rhs: $t) -> $t {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }
            }

            impl SubtractableWithOverflow for $t {
                #[inline(always)]
                fn wrapping_minus(self, rhs: $t) -> $t {
                    WrappingSub::wrapping_sub(&self, &rhs)
                }
            }

            impl MultiplicableWithOverflow for $t {
                #[inline(always)]
                fn wrapping_times(self, rhs: $t) -> $t {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }

            impl AddableChecked for $t {
                #[inline(always)]
                fn checked_plus(self, rhs: $t) -> Option<$t> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }

            impl SubtractableChecked for $t {
                #[inline(always)]
                fn checked_minus(self, rhs: $t) -> Option<$t> {
                    CheckedSub::checked_sub(&self, &rhs)
                }
            }

            impl MultiplicableChecked for $t {
                #[inline(always)]
                fn checked_times(self, rhs: $t) -> Option<$t> {
                    CheckedMul::checked_mul(&self, &rhs)
                }
            }

            impl TotalOrder for $t {
                #[inline(always)]
                fn compare(&self, other: &$t) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            impl BoundedTotalOrder for $t {
                const MIN_VALUE: $t = <$t>::MIN;
                const MAX_VALUE: $t = <$t>::MAX;
            }

            identities!(0, 1; $t);
        )*
    };
}

macro_rules! signed_conformance {
    ($($t:ty),*) => {
        $(
            impl Negatable for $t {
                #[inline]
                #[track_caller]
                fn negated(self) -> $t {
                    or_overflow!(CheckedNeg::checked_neg(&self), $t, Operation::Neg)
                }
            }
        )*
    };
}

int_conformance!(u8, u16, u32, u64, u128, usize);
int_conformance!(i8, i16, i32, i64, i128, isize);

signed_conformance!(i8, i16, i32, i64, i128, isize);
