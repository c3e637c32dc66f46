//! # bizcal-core
//!
//! Error definitions and primitive aliases shared by the bizcal crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A signed count of business days.
pub type BusinessDays = i64;

/// A signed count of seconds.
pub type Seconds = i64;

/// A count of days (holidays, weekend days) found in a date range.
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
