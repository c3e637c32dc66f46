//! # bizcal
//!
//! Business-calendar arithmetic: which days are worked, which hours of
//! those days are worked, and what date or instant lies a given number of
//! business days or working seconds away.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bizcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bizcal = "0.1"
//! ```
//!
//! ```rust
//! use bizcal::prelude::*;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let cal = BusinessCalendar::builder()
//!     .weekends([Weekday::Saturday, Weekday::Sunday])
//!     .holiday(NaiveDate::from_ymd_opt(2011, 7, 1).unwrap())
//!     .working_hours(
//!         NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
//!         NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
//!     )
//!     .build()?;
//!
//! // Wednesday plus two business days skips Canada Day and the weekend
//! let wed = NaiveDate::from_ymd_opt(2011, 6, 29).unwrap();
//! assert_eq!(cal.add_days(wed, 2), NaiveDate::from_ymd_opt(2011, 7, 4).unwrap());
//!
//! // an hour from Thursday evening lands on Monday morning
//! let evening = NaiveDate::from_ymd_opt(2011, 6, 30).unwrap().and_hms_opt(20, 0, 0).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2011, 7, 4).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert_eq!(cal.add_seconds(evening, 3_600), monday);
//! # Ok::<(), bizcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared aliases.
pub use bizcal_core as core;

/// Calendars and business-time arithmetic.
pub use bizcal_time as time;

/// The types most callers need.
pub mod prelude {
    pub use bizcal_core::{Error, Result};
    pub use bizcal_time::{
        BusinessCalendar, BusinessDelta, CalendarBuilder, CalendarConfig, Direction, Temporal,
        Weekday, WeekendSet, WorkingHours,
    };
}
