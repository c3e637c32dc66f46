//! Business-time arithmetic on a [`BusinessCalendar`].
//!
//! Seconds are consumed inside working-hours windows and spill over from one
//! window into the next; days are counted in business days, first jumping
//! over whole weeks, then stepping over weekend days, then pushing past any
//! holidays that were jumped over. Both spill-overs are loops with a strictly
//! shrinking remainder.

use bizcal_core::{BusinessDays, Seconds};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::trace;

use crate::calendar::BusinessCalendar;
use crate::delta::BusinessDelta;
use crate::direction::Direction;
use crate::temporal::{shift, Temporal};
use crate::working_hours::WorkingHours;

impl BusinessCalendar {
    /// Add `seconds` business seconds to `instant`.
    ///
    /// Without working hours the seconds are a flat offset: an instant on a
    /// day off first drops to midnight, and the result is moved to the
    /// nearest business day in the direction of travel, keeping its
    /// time-of-day.
    ///
    /// With working hours only time inside a window on a business day
    /// counts. The instant is first moved into a window (days off go to the
    /// next business day's `start`, after-hours instants to the next
    /// window's `start`), then each window is filled up to its `end` before
    /// moving on. Negative `seconds` run the same walk backwards, draining
    /// each window down to its `start`.
    pub fn add_seconds(&self, instant: NaiveDateTime, seconds: Seconds) -> NaiveDateTime {
        match self.working_hours() {
            None => self.add_flat_seconds(instant, seconds),
            Some(hours) if seconds >= 0 => self.add_window_seconds(instant, seconds, hours),
            Some(hours) => self.sub_window_seconds(instant, -seconds, hours),
        }
    }

    /// Add `days` business days to `value`; negative `days` go backwards.
    ///
    /// The result always lands on a business day. Adding zero moves a day
    /// off forward to the next business day. Any time-of-day is carried
    /// over unchanged.
    pub fn add_days<T: Temporal>(&self, value: T, days: BusinessDays) -> T {
        let direction = Direction::from_sign(days);
        let mut origin = value.date();
        let mut remaining = days.unsigned_abs();
        loop {
            let target = self.skip_weekdays(origin, remaining, direction);
            // holidays jumped over still have to be made up for
            let jumped = self.holidays_between(origin, target, true);
            if jumped == 0 {
                return value.with_date(self.closest_business_day(target, direction));
            }
            trace!(%origin, %target, jumped, "business days spill past holidays");
            origin = target;
            remaining = jumped.unsigned_abs();
        }
    }

    /// Add a business delta to a date or an instant.
    ///
    /// An instant takes the sub-day part through
    /// [`add_seconds`](Self::add_seconds) and then the whole days through
    /// [`add_days`](Self::add_days). A date only takes the whole days.
    /// A plain integer is a number of days.
    pub fn add<T: Temporal>(&self, value: T, delta: impl Into<BusinessDelta>) -> T {
        value.add_business(self, delta.into())
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn add_flat_seconds(&self, instant: NaiveDateTime, seconds: Seconds) -> NaiveDateTime {
        let instant = if self.is_day_off(instant) {
            at(instant.date(), NaiveTime::MIN)
        } else {
            instant
        };
        self.closest_business_day(
            instant + TimeDelta::seconds(seconds),
            Direction::from_sign(seconds),
        )
    }

    fn add_window_seconds(
        &self,
        mut cursor: NaiveDateTime,
        mut remaining: Seconds,
        hours: WorkingHours,
    ) -> NaiveDateTime {
        let (start, end) = (hours.start(), hours.end());
        loop {
            if self.is_day_off(cursor) {
                cursor = self.closest_business_day(at(cursor.date(), start), Direction::Forward);
            } else if hours.is_non_working(cursor.time()) {
                let date = if cursor.time() > start {
                    shift(cursor.date(), 1)
                } else {
                    cursor.date()
                };
                cursor = at(date, start);
                if self.is_day_off(cursor) {
                    continue;
                }
            }

            let mut end_of_window = at(cursor.date(), end);
            if cursor.time() > end || (cursor.time() == end && start == end) {
                end_of_window += TimeDelta::days(1);
            }
            let available = (end_of_window - cursor).num_seconds();
            if remaining <= available {
                return cursor + TimeDelta::seconds(remaining);
            }

            remaining -= available;
            let date = if cursor.time() < start {
                cursor.date()
            } else {
                shift(cursor.date(), 1)
            };
            cursor = at(date, start);
            trace!(%cursor, remaining, "business seconds spill into next window");
        }
    }

    fn sub_window_seconds(
        &self,
        mut cursor: NaiveDateTime,
        mut remaining: Seconds,
        hours: WorkingHours,
    ) -> NaiveDateTime {
        let (start, end) = (hours.start(), hours.end());
        loop {
            if self.is_day_off(cursor) {
                cursor = self.closest_business_day(at(cursor.date(), end), Direction::Backward);
            } else if hours.is_non_working(cursor.time()) {
                let date = if cursor.time() < end {
                    shift(cursor.date(), -1)
                } else {
                    cursor.date()
                };
                cursor = at(date, end);
                if self.is_day_off(cursor) {
                    continue;
                }
            }

            let mut start_of_window = at(cursor.date(), start);
            if cursor.time() < start || (cursor.time() == start && start == end) {
                start_of_window -= TimeDelta::days(1);
            }
            let available = (cursor - start_of_window).num_seconds();
            if remaining <= available {
                return cursor - TimeDelta::seconds(remaining);
            }

            remaining -= available;
            let date = if cursor.time() > end {
                cursor.date()
            } else {
                shift(cursor.date(), -1)
            };
            cursor = at(date, end);
            trace!(%cursor, remaining, "business seconds spill into previous window");
        }
    }

    /// Move `n` non-weekend days from `from`. Holidays are not skipped here.
    fn skip_weekdays(&self, from: NaiveDate, n: u64, direction: Direction) -> NaiveDate {
        let step = direction.step();
        let weekends = self.weekends();
        if weekends.is_empty() || n == 0 {
            return shift(from, step * n as i64);
        }
        // any 7 consecutive days hold one week's worth of working days;
        // the last step is always walked so the result is never a weekend day
        let week_len = weekends.business_days_per_week() as u64;
        let mut date = shift(from, step * 7 * ((n - 1) / week_len) as i64);
        let mut rest = (n - 1) % week_len + 1;
        while rest > 0 {
            date = shift(date, step);
            if !self.is_weekend(date) {
                rest -= 1;
            }
        }
        date
    }
}

fn at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn office(start: NaiveTime, end: NaiveTime) -> BusinessCalendar {
        BusinessCalendar::new(
            [Weekday::Saturday, Weekday::Sunday],
            [date(2011, 7, 1)],
            Some(WorkingHours::new(start, end)),
        )
        .unwrap()
    }

    #[test]
    fn seconds_within_the_window() {
        let cal = office(t(8, 30), t(20, 30));
        assert_eq!(cal.add_seconds(dt(2011, 3, 3, 8, 30), 3_600), dt(2011, 3, 3, 9, 30));
    }

    #[test]
    fn seconds_from_a_weekend() {
        let cal = office(t(8, 30), t(20, 30));
        // Saturday → Monday window start plus one hour
        assert_eq!(cal.add_seconds(dt(2011, 3, 5, 10, 30), 3_600), dt(2011, 3, 7, 9, 30));
    }

    #[test]
    fn seconds_spill_over_the_long_weekend() {
        let cal = office(t(8, 0), t(20, 0));
        // 5.5h left on Thursday, Friday is a holiday, 4.5h into Monday
        assert_eq!(cal.add_seconds(dt(2011, 6, 30, 14, 30), 36_000), dt(2011, 7, 4, 12, 30));
    }

    #[test]
    fn after_hours_on_friday_rolls_to_monday() {
        let cal = office(t(8, 30), t(20, 30));
        assert_eq!(cal.add_seconds(dt(2011, 3, 4, 21, 0), 3_600), dt(2011, 3, 7, 9, 30));
    }

    #[test]
    fn before_hours_starts_at_window_start() {
        let cal = office(t(8, 30), t(20, 30));
        assert_eq!(cal.add_seconds(dt(2011, 3, 3, 6, 0), 60), dt(2011, 3, 3, 8, 31));
    }

    #[test]
    fn night_shift_wraps_midnight() {
        let cal = office(t(20, 30), t(8, 30));
        // Tuesday 22:00 + 3h stays in the same shift
        assert_eq!(cal.add_seconds(dt(2011, 3, 1, 22, 0), 3 * 3_600), dt(2011, 3, 2, 1, 0));
        // midday is off shift: start at 20:30 the same day
        assert_eq!(cal.add_seconds(dt(2011, 3, 1, 12, 0), 3_600), dt(2011, 3, 1, 21, 30));
        // 02:00 has 6.5h left, the next shift starts at 20:30 that evening
        assert_eq!(cal.add_seconds(dt(2011, 3, 2, 2, 0), 7 * 3_600), dt(2011, 3, 2, 21, 0));
    }

    #[test]
    fn round_the_clock_window_is_continuous() {
        let cal = office(t(9, 0), t(9, 0));
        assert_eq!(cal.add_seconds(dt(2011, 3, 3, 9, 0), 86_400 + 60), dt(2011, 3, 4, 9, 1));
        // Friday 15:00 + 24h runs into Saturday, which is skipped
        assert_eq!(cal.add_seconds(dt(2011, 3, 4, 15, 0), 86_400), dt(2011, 3, 7, 15, 0));
    }

    #[test]
    fn negative_seconds_drain_backwards() {
        let cal = office(t(8, 30), t(20, 30));
        assert_eq!(cal.add_seconds(dt(2011, 3, 7, 9, 30), -3_600), dt(2011, 3, 7, 8, 30));
        // Monday 09:30 back two hours: one hour on Monday, one on Friday
        assert_eq!(cal.add_seconds(dt(2011, 3, 7, 9, 30), -7_200), dt(2011, 3, 4, 19, 30));
        // Sunday → Friday window end
        assert_eq!(cal.add_seconds(dt(2011, 3, 6, 12, 0), -60), dt(2011, 3, 4, 20, 29));
        // before hours → previous day's end
        assert_eq!(cal.add_seconds(dt(2011, 3, 3, 7, 0), -60), dt(2011, 3, 2, 20, 29));
    }

    #[test]
    fn negative_seconds_in_a_night_shift() {
        let cal = office(t(20, 30), t(8, 30));
        assert_eq!(cal.add_seconds(dt(2011, 3, 2, 2, 0), -3 * 3_600), dt(2011, 3, 1, 23, 0));
        assert_eq!(cal.add_seconds(dt(2011, 3, 2, 2, 0), -6 * 3_600), dt(2011, 3, 1, 8, 0));
    }

    #[test]
    fn flat_seconds_without_working_hours() {
        let cal = BusinessCalendar::new([Weekday::Saturday, Weekday::Sunday], [], None).unwrap();
        assert_eq!(cal.add_seconds(dt(2011, 3, 3, 10, 0), 3_600), dt(2011, 3, 3, 11, 0));
        // Saturday drops to midnight, then forward to Monday
        assert_eq!(cal.add_seconds(dt(2011, 3, 5, 10, 0), 3_600), dt(2011, 3, 7, 1, 0));
        // Friday evening + 5h lands on Saturday, moved to Monday
        assert_eq!(cal.add_seconds(dt(2011, 3, 4, 22, 0), 5 * 3_600), dt(2011, 3, 7, 3, 0));
        // backwards from Monday morning into Sunday → Friday
        assert_eq!(cal.add_seconds(dt(2011, 3, 7, 1, 0), -2 * 3_600), dt(2011, 3, 4, 23, 0));
    }

    #[test]
    fn days_over_holidays() {
        let cal = BusinessCalendar::new(
            [Weekday::Saturday, Weekday::Sunday],
            [date(2011, 7, 1), date(2011, 8, 1)],
            None,
        )
        .unwrap();
        let wed = date(2011, 6, 29);
        assert_eq!(cal.add_days(wed, 2), date(2011, 7, 4));
        assert_eq!(cal.add_days(wed, 22), date(2011, 8, 2));
        assert_eq!(cal.add_days(wed, -10), date(2011, 6, 15));
    }

    #[test]
    fn zero_days_snaps_forward() {
        let cal = BusinessCalendar::new([Weekday::Saturday, Weekday::Sunday], [], None).unwrap();
        assert_eq!(cal.add_days(date(2011, 3, 5), 0), date(2011, 3, 7));
        assert_eq!(cal.add_days(date(2011, 3, 3), 0), date(2011, 3, 3));
    }

    #[test]
    fn days_without_weekends() {
        let cal = BusinessCalendar::new([], [date(2011, 3, 4)], None).unwrap();
        assert_eq!(cal.add_days(date(2011, 3, 3), 2), date(2011, 3, 6));
        assert_eq!(cal.add_days(date(2011, 3, 6), -2), date(2011, 3, 3));
    }

    #[test]
    fn add_instant_takes_seconds_then_days() {
        let cal = office(t(8, 0), t(20, 0));
        let day = dt(2011, 6, 29, 14, 30);
        assert_eq!(
            cal.add(day, BusinessDelta::new(1, 5 * 3_600)),
            dt(2011, 6, 30, 19, 30)
        );
        // 10h runs into Thursday 12:30; one more day is the holiday → Monday
        assert_eq!(
            cal.add(day, BusinessDelta::new(1, 10 * 3_600)),
            dt(2011, 7, 4, 12, 30)
        );
    }

    #[test]
    fn add_date_ignores_seconds() {
        let cal = office(t(8, 0), t(20, 0));
        assert_eq!(
            cal.add(date(2011, 6, 29), BusinessDelta::new(2, 3_600)),
            date(2011, 7, 4)
        );
        assert_eq!(cal.add(date(2011, 6, 29), 1), date(2011, 6, 30));
    }
}
