//! `BusinessCalendar`: weekends, holidays and working hours.
//!
//! A calendar knows which dates are days off and which times-of-day are
//! working time, and answers range and search questions over them. The
//! arithmetic (adding business seconds and days) lives in
//! [`arithmetic`](crate::arithmetic).

use bizcal_core::errors::Result;
use bizcal_core::DayCount;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::builder::CalendarBuilder;
use crate::direction::Direction;
use crate::temporal::{ordered, shift, Temporal};
use crate::weekday::{Weekday, WeekendSet};
use crate::working_hours::WorkingHours;

/// A business calendar.
///
/// Holds the weekly days off, the holidays (kept sorted ascending and free of
/// duplicates) and the optional daily working-hours window. Once built it is
/// read-only apart from [`set_holidays`](Self::set_holidays), which needs
/// exclusive access; a shared `&BusinessCalendar` can be used from any number
/// of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    weekends: WeekendSet,
    holidays: Vec<NaiveDate>,
    working_hours: Option<WorkingHours>,
}

impl BusinessCalendar {
    /// Create a calendar.
    ///
    /// # Errors
    /// [`Error::TooManyWeekendDays`](bizcal_core::Error::TooManyWeekendDays)
    /// if all seven days are weekend days.
    pub fn new(
        weekends: impl IntoIterator<Item = Weekday>,
        holidays: impl IntoIterator<Item = NaiveDate>,
        working_hours: Option<WorkingHours>,
    ) -> Result<Self> {
        Ok(Self::from_parts(
            WeekendSet::new(weekends)?,
            holidays,
            working_hours,
        ))
    }

    /// Create a calendar from an already validated weekend set.
    pub fn from_parts(
        weekends: WeekendSet,
        holidays: impl IntoIterator<Item = NaiveDate>,
        working_hours: Option<WorkingHours>,
    ) -> Self {
        let calendar = Self {
            weekends,
            holidays: sorted_holidays(holidays),
            working_hours,
        };
        debug!(
            weekends = ?calendar.weekends,
            holidays = calendar.holidays.len(),
            working_hours = ?calendar.working_hours.map(|h| h.kind()),
            "business calendar built"
        );
        calendar
    }

    /// Start building a calendar.
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::new()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The weekly days off.
    pub fn weekends(&self) -> WeekendSet {
        self.weekends
    }

    /// The holidays, sorted ascending.
    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }

    /// The daily working-hours window, if any.
    pub fn working_hours(&self) -> Option<WorkingHours> {
        self.working_hours
    }

    /// Return `true` if the calendar has neither weekends nor holidays.
    pub fn is_empty(&self) -> bool {
        self.weekends.is_empty() && self.holidays.is_empty()
    }

    /// Return a new calendar with the holiday list replaced by `holidays`.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.set_holidays(holidays);
        self
    }

    /// Replace the holiday list in place. The new list is sorted.
    pub fn set_holidays(&mut self, holidays: impl IntoIterator<Item = NaiveDate>) {
        self.holidays = sorted_holidays(holidays);
        debug!(holidays = self.holidays.len(), "holiday list rebuilt");
    }

    // ── Predicates ────────────────────────────────────────────────────────────

    /// Return `true` if `value` falls on a weekend day.
    pub fn is_weekend<T: Temporal>(&self, value: T) -> bool {
        self.weekends.contains(Weekday::of(value.date()))
    }

    /// Return `true` if the date of `value` is a holiday.
    pub fn is_holiday<T: Temporal>(&self, value: T) -> bool {
        self.holidays.binary_search(&value.date()).is_ok()
    }

    /// Return `true` if `value` falls on a weekend day or a holiday.
    pub fn is_day_off<T: Temporal>(&self, value: T) -> bool {
        self.is_weekend(value) || self.is_holiday(value)
    }

    /// Return `true` if `instant` is outside the working-hours window.
    ///
    /// Always `false` when the calendar has no working hours.
    pub fn is_non_working_hours(&self, instant: NaiveDateTime) -> bool {
        self.working_hours
            .is_some_and(|hours| hours.is_non_working(instant.time()))
    }

    // ── Search ────────────────────────────────────────────────────────────────

    /// Nearest business day to `value` in `direction`.
    ///
    /// A value that is not a day off comes back unchanged; the time-of-day is
    /// never looked at nor altered.
    pub fn closest_business_day<T: Temporal>(&self, value: T, direction: impl Into<Direction>) -> T {
        let step = direction.into().step();
        let mut date = value.date();
        while self.is_day_off(date) {
            date = shift(date, step);
        }
        value.with_date(date)
    }

    // ── Range counts ──────────────────────────────────────────────────────────

    /// Number of holidays strictly between `a` and `b`, in either order.
    ///
    /// With `skip_weekends`, holidays falling on a weekend day are not
    /// counted.
    pub fn holidays_between<T: Temporal>(&self, a: T, b: T, skip_weekends: bool) -> DayCount {
        let (lo, hi) = ordered(a.date(), b.date());
        let from = self.holidays.partition_point(|h| *h <= lo);
        let to = self.holidays.partition_point(|h| *h < hi);
        if from >= to {
            return 0;
        }
        self.holidays[from..to]
            .iter()
            .filter(|h| !skip_weekends || !self.is_weekend(**h))
            .count() as DayCount
    }

    /// Number of weekend days in `(earlier, later]`, in either order.
    pub fn weekends_between<T: Temporal>(&self, a: T, b: T) -> DayCount {
        let (lo, hi) = ordered(a.date(), b.date());
        let span = (hi - lo).num_days();
        let weeks = span / 7;
        let extra = span % 7;
        let partial = (0..extra)
            .filter(|k| self.is_weekend(shift(hi, -k)))
            .count() as DayCount;
        weeks * self.weekends.len() as DayCount + partial
    }

    /// Calendar days between `a` and `b` less the weekend days and holidays
    /// between them, in either order.
    pub fn business_day_delta<T: Temporal>(&self, a: T, b: T) -> DayCount {
        let (lo, hi) = ordered(a.date(), b.date());
        (hi - lo).num_days() - self.weekends_between(lo, hi) - self.holidays_between(lo, hi, true)
    }
}

fn sorted_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = holidays.into_iter().collect();
    holidays.sort_unstable();
    holidays.dedup();
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn canada_day() -> BusinessCalendar {
        BusinessCalendar::new(
            [Weekday::Saturday, Weekday::Sunday],
            [date(2011, 7, 1)],
            None,
        )
        .unwrap()
    }

    #[test]
    fn empty_calendar() {
        let cal = BusinessCalendar::new([], [], None).unwrap();
        assert!(cal.is_empty());
        let cal = BusinessCalendar::new([Weekday::Sunday], [], None).unwrap();
        assert!(!cal.is_empty());
    }

    #[test]
    fn weekend_and_holiday_predicates() {
        let cal = canada_day();
        assert!(!cal.is_weekend(date(2011, 7, 1))); // Friday
        assert!(cal.is_weekend(date(2011, 7, 2))); // Saturday
        assert!(cal.is_holiday(date(2011, 7, 1)));
        assert!(!cal.is_holiday(date(2011, 7, 2)));
        assert!(cal.is_day_off(date(2011, 7, 3)));
        assert!(!cal.is_day_off(date(2011, 7, 4)));
    }

    #[test]
    fn holiday_check_ignores_time_of_day() {
        let cal = canada_day();
        let instant = date(2011, 7, 1).and_time(NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert!(cal.is_holiday(instant));
    }

    #[test]
    fn holidays_are_sorted_and_deduplicated() {
        let cal = BusinessCalendar::new(
            [],
            [date(2011, 8, 1), date(2011, 7, 1), date(2011, 8, 1)],
            None,
        )
        .unwrap()
        .with_holidays([date(2012, 1, 2), date(2011, 12, 26), date(2011, 12, 26)]);
        assert_eq!(cal.holidays(), &[date(2011, 12, 26), date(2012, 1, 2)]);
    }

    #[test]
    fn closest_business_day_both_ways() {
        let cal = canada_day();
        assert_eq!(cal.closest_business_day(date(2011, 6, 30), true), date(2011, 6, 30));
        assert_eq!(cal.closest_business_day(date(2011, 7, 1), true), date(2011, 7, 4));
        assert_eq!(
            cal.closest_business_day(date(2011, 7, 1), Direction::Backward),
            date(2011, 6, 30)
        );
    }

    #[test]
    fn range_counts() {
        let cal = canada_day();
        assert_eq!(cal.holidays_between(date(2011, 6, 12), date(2011, 9, 12), true), 1);
        assert_eq!(cal.holidays_between(date(2011, 7, 1), date(2011, 7, 1), true), 0);
        assert_eq!(cal.weekends_between(date(2011, 6, 3), date(2011, 6, 15)), 4);
        assert_eq!(cal.business_day_delta(date(2011, 6, 10), date(2011, 6, 24)), 10);
        assert_eq!(cal.business_day_delta(date(2011, 7, 4), date(2011, 6, 30)), 1);
    }
}
