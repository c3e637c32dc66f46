//! # bizcal-time
//!
//! Business calendar engine: weekends, holidays, working hours, and the
//! arithmetic of adding business seconds and business days.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Adding business seconds, days and deltas.
pub mod arithmetic;

/// `CalendarBuilder`: fluent calendar construction.
pub mod builder;

/// `BusinessCalendar`: predicates, nearest-business-day search, range counts.
pub mod calendar;

/// `CalendarConfig`: serialisable calendar description.
pub mod config;

/// `BusinessDelta`: whole business days plus business seconds.
pub mod delta;

/// `Direction`: forward or backward along the calendar.
pub mod direction;

/// `Temporal`: dates and instants.
pub mod temporal;

/// `Weekday` and `WeekendSet`.
pub mod weekday;

/// `WorkingHours`: the daily working window.
pub mod working_hours;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::CalendarBuilder;
pub use calendar::BusinessCalendar;
pub use config::{CalendarConfig, WeekdaySpec};
pub use delta::BusinessDelta;
pub use direction::Direction;
pub use temporal::Temporal;
pub use weekday::{Weekday, WeekendSet};
pub use working_hours::{WindowKind, WorkingHours};
