/*
    Identity elements
*/

/// Types with an additive identity.
pub trait ZeroConstructible: Sized {
    /// Returns the additive identity.
    fn zero() -> Self;
}

/// Types with a multiplicative identity.
///
/// Kept apart from [`ZeroConstructible`]: zero is not a valid seed for a product.
pub trait OneConstructible: Sized {
    /// Returns the multiplicative identity.
    fn one() -> Self;
}

/// Identity queries derived from equality.
///
/// Implemented for every `PartialEq` type; the methods become available
/// as soon as the matching constructor capability is.
pub trait IdentityQuery: PartialEq + Sized {
    /// Returns true if `self == Self::zero()`.
    #[inline]
    fn is_identity(&self) -> bool
    where
        Self: ZeroConstructible,
    {
        *self == Self::zero()
    }

    /// Returns true if `self == Self::one()`.
    #[inline]
    fn is_unit(&self) -> bool
    where
        Self: OneConstructible,
    {
        *self == Self::one()
    }
}

impl<T: PartialEq> IdentityQuery for T {}
