/*
    Conformance of existing value types

    Types enter the capability model only through the impls in these
    submodules. Composite capabilities follow automatically.
*/

use std::cmp::Ordering;

use crate::error::{trap, ArithmeticError, Operation};
use crate::identity::*;
use crate::ops::*;
use crate::order::*;

// Unwraps the result of a checked operation or traps with an overflow.
macro_rules! or_overflow {
    ($result:expr, $t:ty, $op:expr) => {
        match $result {
            Some(v) => v,
            None => trap(ArithmeticError::overflow::<$t>($op)),
        }
    };
}

// `ZeroConstructible` and `OneConstructible` from literal values.
macro_rules! identities {
    ($zero:expr, $one:expr; $($t:ty),*) => {
        $(
            impl ZeroConstructible for $t {
                #[inline(always)]
                fn zero() -> $t {
                    $zero
                }
            }

            impl OneConstructible for $t {
                #[inline(always)]
                fn one() -> $t {
                    $one
                }
            }
        )*
    };
}

mod boolean;
mod duration;
mod float;
mod int;

#[cfg(feature = "bigint")]
mod bigint;
