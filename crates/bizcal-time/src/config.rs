//! Plain-data calendar configuration.
//!
//! [`CalendarConfig`] is the serialisable description of a calendar, for
//! callers that source their weekends, holidays and hours from a file or a
//! service. Any serde format works. Validation happens when the config is
//! turned into a [`BusinessCalendar`].

use bizcal_core::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::BusinessCalendar;
use crate::weekday::{Weekday, WeekendSet};
use crate::working_hours::WorkingHours;

/// A weekday given either by name (`"Saturday"`) or ordinal (`5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdaySpec {
    /// Ordinal, 0 = Monday … 6 = Sunday.
    Ordinal(u8),
    /// Full English name.
    Name(Weekday),
}

impl TryFrom<WeekdaySpec> for Weekday {
    type Error = Error;

    fn try_from(spec: WeekdaySpec) -> Result<Self> {
        match spec {
            WeekdaySpec::Ordinal(n) => Weekday::try_from(n),
            WeekdaySpec::Name(day) => Ok(day),
        }
    }
}

/// Serialisable description of a [`BusinessCalendar`].
///
/// ```
/// use bizcal_time::{BusinessCalendar, CalendarConfig, WeekdaySpec, Weekday};
///
/// let config = CalendarConfig {
///     weekends: vec![WeekdaySpec::Name(Weekday::Saturday), WeekdaySpec::Ordinal(6)],
///     ..CalendarConfig::default()
/// };
/// let cal = BusinessCalendar::try_from(config).unwrap();
/// assert_eq!(cal.weekends().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Weekly days off.
    #[serde(default)]
    pub weekends: Vec<WeekdaySpec>,
    /// Holidays, in any order.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// `[start, end]` of the daily working window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<Vec<NaiveTime>>,
}

impl TryFrom<CalendarConfig> for BusinessCalendar {
    type Error = Error;

    fn try_from(config: CalendarConfig) -> Result<Self> {
        let days = config
            .weekends
            .into_iter()
            .map(Weekday::try_from)
            .collect::<Result<Vec<_>>>()?;
        let weekends = WeekendSet::new(days)?;
        let working_hours = config
            .working_hours
            .as_deref()
            .map(WorkingHours::from_slice)
            .transpose()?;
        Ok(BusinessCalendar::from_parts(
            weekends,
            config.holidays,
            working_hours,
        ))
    }
}

impl BusinessCalendar {
    /// Describe this calendar as a [`CalendarConfig`].
    pub fn to_config(&self) -> CalendarConfig {
        CalendarConfig {
            weekends: self.weekends().iter().map(WeekdaySpec::Name).collect(),
            holidays: self.holidays().to_vec(),
            working_hours: self.working_hours().map(|h| h.to_vec()),
        }
    }
}
