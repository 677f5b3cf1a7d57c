/*
    Reductions

    Every reduction is a left-to-right fold over an `IntoIterator`.
    The element type's capabilities alone decide the identity
    element and the failure behavior.
*/

use crate::error::{ArithmeticError, Operation};
use crate::identity::{OneConstructible, ZeroConstructible};
use crate::ops::*;

/// Folds `values` with [`Addable::plus`], starting from `seed`.
///
/// Returns `seed` unchanged when `values` is empty.
#[inline]
pub fn sum_of_seeded<I, T>(values: I, seed: T) -> T
where
    I: IntoIterator<Item = T>,
    T: Addable,
{
    values.into_iter().fold(seed, Addable::plus)
}

/// Folds `values` with [`Addable::plus`], starting from zero.
///
/// ```rust
/// # use numeric_caps::sum_of;
/// assert_eq!(sum_of([1, 2, 3]), 6);
/// assert_eq!(sum_of(Vec::<i64>::new()), 0);
/// ```
#[inline]
pub fn sum_of<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Addable + ZeroConstructible,
{
    sum_of_seeded(values, T::zero())
}

/// Folds `values` with [`Multiplicable::times`], starting from `seed`.
///
/// Returns `seed` unchanged when `values` is empty.
#[inline]
pub fn product_of_seeded<I, T>(values: I, seed: T) -> T
where
    I: IntoIterator<Item = T>,
    T: Multiplicable,
{
    values.into_iter().fold(seed, Multiplicable::times)
}

/// Folds `values` with [`Multiplicable::times`], starting from one.
///
/// ```rust
/// # use numeric_caps::product_of;
/// assert_eq!(product_of([1, 2, 3, 4]), 24);
/// assert_eq!(product_of(Vec::<u8>::new()), 1);
/// ```
#[inline]
pub fn product_of<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Multiplicable + OneConstructible,
{
    product_of_seeded(values, T::one())
}

/// Like [`sum_of_seeded`], but wraps around instead of trapping.
#[inline]
pub fn wrapping_sum_of_seeded<I, T>(values: I, seed: T) -> T
where
    I: IntoIterator<Item = T>,
    T: AddableWithOverflow,
{
    values.into_iter().fold(seed, AddableWithOverflow::wrapping_plus)
}

/// Like [`sum_of`], but wraps around instead of trapping.
#[inline]
pub fn wrapping_sum_of<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: AddableWithOverflow + ZeroConstructible,
{
    wrapping_sum_of_seeded(values, T::zero())
}

/// Like [`product_of_seeded`], but wraps around instead of trapping.
#[inline]
pub fn wrapping_product_of_seeded<I, T>(values: I, seed: T) -> T
where
    I: IntoIterator<Item = T>,
    T: MultiplicableWithOverflow,
{
    values
        .into_iter()
        .fold(seed, MultiplicableWithOverflow::wrapping_times)
}

/// Like [`product_of`], but wraps around instead of trapping.
#[inline]
pub fn wrapping_product_of<I, T>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: MultiplicableWithOverflow + OneConstructible,
{
    wrapping_product_of_seeded(values, T::one())
}

/// Like [`sum_of_seeded`], but stops at the first overflow and reports it.
pub fn try_sum_of_seeded<I, T>(values: I, seed: T) -> Result<T, ArithmeticError>
where
    I: IntoIterator<Item = T>,
    T: AddableChecked,
{
    values
        .into_iter()
        .enumerate()
        .try_fold(seed, |acc, (index, x)| {
            acc.checked_plus(x).ok_or_else(|| {
                tracing::debug!(index, "checked sum overflowed");
                ArithmeticError::overflow::<T>(Operation::Add)
            })
        })
}

/// Like [`sum_of`], but stops at the first overflow and reports it.
///
/// ```rust
/// # use numeric_caps::{try_sum_of, ArithmeticError};
/// assert_eq!(try_sum_of([100u8, 100]), Ok(200));
/// assert!(matches!(
///     try_sum_of([200u8, 100]),
///     Err(ArithmeticError::Overflow { .. })
/// ));
/// ```
pub fn try_sum_of<I, T>(values: I) -> Result<T, ArithmeticError>
where
    I: IntoIterator<Item = T>,
    T: AddableChecked + ZeroConstructible,
{
    try_sum_of_seeded(values, T::zero())
}

/// Like [`product_of_seeded`], but stops at the first overflow and reports it.
pub fn try_product_of_seeded<I, T>(values: I, seed: T) -> Result<T, ArithmeticError>
where
    I: IntoIterator<Item = T>,
    T: MultiplicableChecked,
{
    values
        .into_iter()
        .enumerate()
        .try_fold(seed, |acc, (index, x)| {
            acc.checked_times(x).ok_or_else(|| {
                tracing::debug!(index, "checked product overflowed");
                ArithmeticError::overflow::<T>(Operation::Mul)
            })
        })
}

/// Like [`product_of`], but stops at the first overflow and reports it.
pub fn try_product_of<I, T>(values: I) -> Result<T, ArithmeticError>
where
    I: IntoIterator<Item = T>,
    T: MultiplicableChecked + OneConstructible,
{
    try_product_of_seeded(values, T::one())
}

/// Sums its arguments with [`sum_of`](crate::sum_of()).
///
/// ```rust
/// # use numeric_caps::sum_of;
/// assert_eq!(sum_of!(1, 2, 3), 6);
/// assert_eq!(sum_of!(1.5, 2.5), 4.0);
/// ```
#[macro_export]
macro_rules! sum_of {
    () => {
        $crate::sum_of(::core::iter::empty())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::sum_of([$($value),+])
    };
}

/// Multiplies its arguments with [`product_of`](crate::product_of()).
///
/// ```rust
/// # use numeric_caps::product_of;
/// assert_eq!(product_of!(2, 3, 4), 24);
/// ```
#[macro_export]
macro_rules! product_of {
    () => {
        $crate::product_of(::core::iter::empty())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::product_of([$($value),+])
    };
}

/// Read-only `sum` / `product` accessors on any collection whose shared
/// reference iterates its elements by reference: slices, arrays, `Vec`,
/// `VecDeque`, `BTreeSet` and the like. Elements are cloned out.
///
/// ```rust
/// # use numeric_caps::Sequence;
/// let xs = vec![2u32, 5, 7];
/// assert_eq!(xs.sum(), 14);
/// assert_eq!(xs.product(), 70);
/// ```
pub trait Sequence {
    type Element;

    /// Same as [`sum_of`] over the elements.
    fn sum(&self) -> Self::Element
    where
        Self::Element: Addable + ZeroConstructible;

    /// Same as [`product_of`] over the elements.
    fn product(&self) -> Self::Element
    where
        Self::Element: Multiplicable + OneConstructible;
}

impl<S, T> Sequence for S
where
    S: ?Sized,
    for<'a> &'a S: IntoIterator<Item = &'a T>,
    T: Clone,
{
    type Element = T;

    #[inline]
    fn sum(&self) -> T
    where
        T: Addable + ZeroConstructible,
    {
        sum_of(self.into_iter().cloned())
    }

    #[inline]
    fn product(&self) -> T
    where
        T: Multiplicable + OneConstructible,
    {
        product_of(self.into_iter().cloned())
    }
}
