//! `Temporal`: the two kinds of value a calendar works on.
//!
//! A pure calendar date ([`NaiveDate`]) and an instant ([`NaiveDateTime`]).
//! Predicates, searches and range counts look at the date portion only and
//! hand back a value of the same kind they were given.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::calendar::BusinessCalendar;
use crate::delta::BusinessDelta;

/// A date, or a date with a time-of-day.
pub trait Temporal: Copy + Ord + std::fmt::Debug {
    /// The calendar date, dropping any time-of-day.
    fn date(&self) -> NaiveDate;

    /// The same value moved to `date`, keeping any time-of-day.
    fn with_date(self, date: NaiveDate) -> Self;

    /// Add a business delta under `calendar`.
    ///
    /// Dates only take the whole-day part of `delta`; instants take the
    /// seconds first and then the days.
    fn add_business(self, calendar: &BusinessCalendar, delta: BusinessDelta) -> Self;
}

impl Temporal for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }

    fn with_date(self, date: NaiveDate) -> Self {
        date
    }

    fn add_business(self, calendar: &BusinessCalendar, delta: BusinessDelta) -> Self {
        calendar.add_days(self, delta.days())
    }
}

impl Temporal for NaiveDateTime {
    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }

    fn with_date(self, date: NaiveDate) -> Self {
        date.and_time(self.time())
    }

    fn add_business(self, calendar: &BusinessCalendar, delta: BusinessDelta) -> Self {
        let shifted = calendar.add_seconds(self, delta.seconds());
        calendar.add_days(shifted, delta.days())
    }
}

/// Move `date` by `days` calendar days.
///
/// # Panics
/// If the result falls outside the range chrono can represent.
pub(crate) fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date + TimeDelta::days(days)
}

/// Order two dates as `(earlier, later)`.
pub(crate) fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
