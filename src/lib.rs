/*
    Top-level
*/

//! Fine-grained arithmetic capabilities and generic reductions.
//!
//! Each operation is its own trait ([`Addable`], [`Dividable`], ...), so a
//! generic algorithm can ask for exactly the arithmetic it uses. Composite
//! capabilities such as [`Additive`] or [`ArithmeticType`] are unions of
//! those traits with blanket impls; a type that implements the members
//! satisfies the composite without further declaration.
//!
//! ```rust
//! use numeric_caps::*;
//!
//! fn mean<T: ArithmeticType + Copy>(xs: &[T], n: T) -> T {
//!     xs.sum().divided_by(n)
//! }
//!
//! assert_eq!(mean(&[2, 4, 6], 3), 4);
//! assert_eq!(mean(&[1.0, 2.0], 2.0), 1.5);
//! ```
//!
//! Non-wrapping integer arithmetic traps on overflow in every build
//! profile. Use the wrapping capabilities ([`AddableWithOverflow`], ...)
//! or the checked reductions ([`try_sum_of`], ...) where overflow is
//! expected.

mod assign;
mod composite;
mod conform;
mod error;
mod identity;
mod ops;
mod order;
mod reduce;

pub use assign::*;
pub use composite::*;
pub use error::*;
pub use identity::*;
pub use ops::*;
pub use order::*;
pub use reduce::*;
