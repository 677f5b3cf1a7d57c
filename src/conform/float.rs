/*
    Floating-point types

    IEEE-754 semantics throughout: nothing here traps. Division or
    remainder by zero produce an infinity or a NaN. `f32::from_bits`
    in const position needs Rust 1.83.
*/

use super::*;

macro_rules! float_conformance {
    ($($t:ty: $bits:ty),*) => {
        $(
            impl Addable for $t {
                #[inline(always)]
                fn plus(self, rhs: $t) -> $t {
                    self + rhs
                }
            }

            impl Subtractable for $t {
                #[inline(always)]
                fn minus(self, rhs: $t) -> $t {
                    self - rhs
                }
            }

            impl Negatable for $t {
                #[inline(always)]
                fn negated(self) -> $t {
                    -self
                }
            }

            impl Multiplicable for $t {
                #[inline(always)]
                fn times(self, rhs: $t) -> $t {
                    self * rhs
                }
            }

            impl Dividable for $t {
                #[inline(always)]
                fn divided_by(self, rhs: $t) -> $t {
                    self / rhs
                }
            }

            impl Modulable for $t {
                #[inline(always)]
                fn remainder(self, rhs: $t) -> $t {
                    self % rhs
                }
            }

            /// IEEE-754 total order:
            /// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`.
            ///
            /// Finer than `==`: `-0.0` precedes `+0.0` although the two
            /// compare equal, and NaNs are ordered by sign and payload.
            impl TotalOrder for $t {
                #[inline(always)]
                fn compare(&self, other: &$t) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }

            // The extremes of the total order are NaNs: the negative one
            // with every bit set, and the positive one with every bit but
            // the sign set.
            impl BoundedTotalOrder for $t {
                const MIN_VALUE: $t = <$t>::from_bits(<$bits>::MAX);
                const MAX_VALUE: $t = <$t>::from_bits(<$bits>::MAX >> 1);
            }

            identities!(0.0, 1.0; $t);
        )*
    };
}

float_conformance!(f32: u32, f64: u64);
