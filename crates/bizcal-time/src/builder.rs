//! Fluent construction of a [`BusinessCalendar`].

use bizcal_core::errors::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::calendar::BusinessCalendar;
use crate::weekday::{Weekday, WeekendSet};
use crate::working_hours::WorkingHours;

/// Builder for [`BusinessCalendar`].
///
/// Nothing is validated until [`build`](Self::build).
///
/// # Example
///
/// ```
/// use bizcal_time::{BusinessCalendar, Weekday};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let cal = BusinessCalendar::builder()
///     .weekends([Weekday::Saturday, Weekday::Sunday])
///     .holiday(NaiveDate::from_ymd_opt(2011, 7, 1).unwrap())
///     .working_hours(
///         NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
///         NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// assert!(cal.is_day_off(NaiveDate::from_ymd_opt(2011, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    weekends: Vec<Weekday>,
    holidays: Vec<NaiveDate>,
    working_hours: Option<WorkingHours>,
}

impl CalendarBuilder {
    /// An empty builder: no weekends, no holidays, no working hours.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the weekend days.
    pub fn weekends(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekends = days.into_iter().collect();
        self
    }

    /// Add one weekend day.
    pub fn weekend(mut self, day: Weekday) -> Self {
        self.weekends.push(day);
        self
    }

    /// Add holidays, in any order.
    pub fn holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Add one holiday.
    pub fn holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.push(date);
        self
    }

    /// Set the daily working-hours window.
    pub fn working_hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.working_hours = Some(WorkingHours::new(start, end));
        self
    }

    /// Validate and build the calendar.
    ///
    /// # Errors
    /// [`Error::TooManyWeekendDays`](bizcal_core::Error::TooManyWeekendDays)
    /// if all seven days were made weekend days.
    pub fn build(self) -> Result<BusinessCalendar> {
        let weekends = WeekendSet::new(self.weekends)?;
        Ok(BusinessCalendar::from_parts(
            weekends,
            self.holidays,
            self.working_hours,
        ))
    }
}
