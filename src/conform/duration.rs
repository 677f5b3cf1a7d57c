/*
    Durations

    Additive only: a duration times a duration is not a duration.
*/

use std::time::Duration;

use super::*;

impl Addable for Duration {
    #[inline]
    #[track_caller]
    fn plus(self, rhs: Duration) -> Duration {
        or_overflow!(self.checked_add(rhs), Duration, Operation::Add)
    }
}

impl Subtractable for Duration {
    #[inline]
    #[track_caller]
    fn minus(self, rhs: Duration) -> Duration {
        or_overflow!(self.checked_sub(rhs), Duration, Operation::Sub)
    }
}

impl AddableChecked for Duration {
    #[inline(always)]
    fn checked_plus(self, rhs: Duration) -> Option<Duration> {
        self.checked_add(rhs)
    }
}

impl SubtractableChecked for Duration {
    #[inline(always)]
    fn checked_minus(self, rhs: Duration) -> Option<Duration> {
        self.checked_sub(rhs)
    }
}

impl ZeroConstructible for Duration {
    #[inline(always)]
    fn zero() -> Duration {
        Duration::ZERO
    }
}

impl TotalOrder for Duration {
    #[inline(always)]
    fn compare(&self, other: &Duration) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl BoundedTotalOrder for Duration {
    const MIN_VALUE: Duration = Duration::ZERO;
    const MAX_VALUE: Duration = Duration::MAX;
}
