//! `BusinessDelta`: a signed amount of business time.

use bizcal_core::{BusinessDays, Seconds};
use chrono::TimeDelta;

const SECONDS_PER_DAY: i64 = 86_400;

/// A signed duration of whole business days plus a sub-day part in seconds.
///
/// The two parts are applied separately: the seconds are consumed inside
/// working-hours windows, the days are counted in business days. A plain
/// integer converts to whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BusinessDelta {
    days: BusinessDays,
    seconds: Seconds,
}

impl BusinessDelta {
    /// The empty delta.
    pub const ZERO: BusinessDelta = BusinessDelta { days: 0, seconds: 0 };

    /// Create a delta from its two parts, taken as given.
    pub fn new(days: BusinessDays, seconds: Seconds) -> Self {
        Self { days, seconds }
    }

    /// `n` whole business days.
    pub fn from_days(n: BusinessDays) -> Self {
        Self::new(n, 0)
    }

    /// `n` business seconds.
    pub fn from_seconds(n: Seconds) -> Self {
        Self::new(0, n)
    }

    /// `n` business minutes.
    pub fn from_minutes(n: i64) -> Self {
        Self::from_seconds(n * 60)
    }

    /// `n` business hours.
    pub fn from_hours(n: i64) -> Self {
        Self::from_seconds(n * 3_600)
    }

    /// Whole-day part.
    pub fn days(&self) -> BusinessDays {
        self.days
    }

    /// Sub-day part, in seconds.
    pub fn seconds(&self) -> Seconds {
        self.seconds
    }

    /// Return `true` if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.seconds == 0
    }
}

impl From<i64> for BusinessDelta {
    fn from(days: i64) -> Self {
        Self::from_days(days)
    }
}

impl From<i32> for BusinessDelta {
    fn from(days: i32) -> Self {
        Self::from_days(days.into())
    }
}

impl From<TimeDelta> for BusinessDelta {
    /// Split into whole days and remaining seconds, truncating toward zero so
    /// that both parts carry the sign of `delta`. Sub-second precision is
    /// dropped.
    fn from(delta: TimeDelta) -> Self {
        let days = delta.num_days();
        let seconds = delta.num_seconds() - days * SECONDS_PER_DAY;
        Self::new(days, seconds)
    }
}

impl std::ops::Add for BusinessDelta {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.days + rhs.days, self.seconds + rhs.seconds)
    }
}

impl std::ops::Neg for BusinessDelta {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.days, -self.seconds)
    }
}

impl std::fmt::Display for BusinessDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} business day(s) {} second(s)", self.days, self.seconds)
    }
}
