//! Working-hours window: the part of a business day during which business
//! seconds accrue.

use bizcal_core::errors::{Error, Result};
use bizcal_core::ensure;
use chrono::NaiveTime;
use tracing::warn;

/// Shape of a working-hours window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// `start < end`, e.g. 08:30–20:30.
    Normal,
    /// `start > end`: a shift crossing midnight, e.g. 20:30–08:30.
    Wrapping,
    /// `start == end`: every instant is working time and each window lasts
    /// 24 hours from `start`.
    RoundTheClock,
}

/// A daily `(start, end)` pair of times-of-day.
///
/// Both boundaries belong to the window: an instant exactly at `start` or at
/// `end` is within working hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingHours {
    /// Create a window from its start and end times.
    ///
    /// `start == end` is accepted and means round-the-clock working.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        if start == end {
            warn!(%start, "working hours start and end coincide; treating as round-the-clock");
        }
        Self { start, end }
    }

    /// Create a window from a list that must hold exactly a start and an end.
    ///
    /// # Errors
    /// [`Error::WorkingHoursArity`] if `times` does not have two elements.
    pub fn from_slice(times: &[NaiveTime]) -> Result<Self> {
        ensure!(
            times.len() == 2,
            Error::WorkingHoursArity { count: times.len() }
        );
        Ok(Self::new(times[0], times[1]))
    }

    /// Time-of-day at which work begins.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Time-of-day at which work ends.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Classify the window.
    pub fn kind(&self) -> WindowKind {
        match self.start.cmp(&self.end) {
            std::cmp::Ordering::Less => WindowKind::Normal,
            std::cmp::Ordering::Greater => WindowKind::Wrapping,
            std::cmp::Ordering::Equal => WindowKind::RoundTheClock,
        }
    }

    /// Return `true` if `time` lies outside the window.
    pub fn is_non_working(&self, time: NaiveTime) -> bool {
        match self.kind() {
            WindowKind::Normal => time < self.start || time > self.end,
            // the non-working part is the normal interval between end and start
            WindowKind::Wrapping => time < self.start && time > self.end,
            WindowKind::RoundTheClock => false,
        }
    }

    /// Return `true` if `time` lies inside the window, boundaries included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        !self.is_non_working(time)
    }

    /// The pair as a two-element list, the inverse of [`from_slice`](Self::from_slice).
    pub fn to_vec(&self) -> Vec<NaiveTime> {
        vec![self.start, self.end]
    }
}
