/*
    Booleans
*/

use super::*;

// Declared rather than taken from `Ord`: equal values are never
// ordered, otherwise `true` is the greater one.
impl TotalOrder for bool {
    #[inline]
    fn compare(&self, other: &bool) -> Ordering {
        match (*self, *other) {
            (a, b) if a == b => Ordering::Equal,
            (true, _) => Ordering::Greater,
            (false, _) => Ordering::Less,
        }
    }
}

impl BoundedTotalOrder for bool {
    const MIN_VALUE: bool = false;
    const MAX_VALUE: bool = true;
}
