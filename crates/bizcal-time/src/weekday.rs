//! `Weekday` day-of-week enum and `WeekendSet`, the weekly days off.

use bizcal_core::errors::{Error, Result};
use bizcal_core::ensure;
use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Variants are numbered 0–6 (Monday = 0, Sunday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (0).
    Monday = 0,
    /// Tuesday (1).
    Tuesday = 1,
    /// Wednesday (2).
    Wednesday = 2,
    /// Thursday (3).
    Thursday = 3,
    /// Friday (4).
    Friday = 4,
    /// Saturday (5).
    Saturday = 5,
    /// Sunday (6).
    Sunday = 6,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the ordinal (0 = Monday … 6 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Weekday of a calendar date.
    pub fn of(date: chrono::NaiveDate) -> Self {
        chrono::Datelike::weekday(&date).into()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Weekday::from_ordinal(n).ok_or(Error::InvalidWeekday(n))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    /// Parse a full English name or its three-letter abbreviation, ignoring
    /// case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let full = day.to_string().to_ascii_lowercase();
                name == full || (name.len() == 3 && full.starts_with(&name))
            })
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday {s:?}")))
    }
}

// ── WeekendSet ────────────────────────────────────────────────────────────────

/// The set of weekdays that are off every week.
///
/// Stored as a 7-bit mask, bit `n` set when the day with ordinal `n` is off.
/// A set always leaves at least one working day in the week.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekendSet(u8);

impl WeekendSet {
    /// No weekend days at all.
    pub const NONE: WeekendSet = WeekendSet(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendSet = WeekendSet(0b110_0000);

    /// Build a set from any collection of weekdays. Repeated days count once.
    ///
    /// # Errors
    /// [`Error::TooManyWeekendDays`] if all seven days are given.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self> {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, day| mask | (1 << day.ordinal()));
        let set = WeekendSet(mask);
        ensure!(
            set.len() <= 6,
            Error::TooManyWeekendDays { count: set.len() }
        );
        Ok(set)
    }

    /// Build a set from weekday ordinals (0 = Monday … 6 = Sunday).
    pub fn from_ordinals(ordinals: impl IntoIterator<Item = u8>) -> Result<Self> {
        let days = ordinals
            .into_iter()
            .map(Weekday::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(days)
    }

    /// Return `true` if `day` is a weekend day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.ordinal()) != 0
    }

    /// Number of weekend days per week (0–6).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if no day of the week is off.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of non-weekend days in any seven consecutive days.
    pub fn business_days_per_week(&self) -> usize {
        7 - self.len()
    }

    /// Iterate over the weekend days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let set = *self;
        Weekday::ALL.into_iter().filter(move |d| set.contains(*d))
    }
}

impl std::fmt::Debug for WeekendSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
