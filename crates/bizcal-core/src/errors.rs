//! Error types for bizcal.
//!
//! Every failure in the workspace is a configuration failure: a calendar is
//! validated once when it is built and the arithmetic on a validated calendar
//! is total. The [`ensure!`](crate::ensure) macro is the early-return helper
//! used by the validation code.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// More weekend days than a week can hold while keeping one business day.
    #[error("too many weekend days per week: {count} (at most 6 allowed)")]
    TooManyWeekendDays {
        /// Number of distinct weekend days requested.
        count: usize,
    },

    /// Working hours were not given as exactly one start and one end.
    #[error("working hours must specify a beginning and an end, got {count} value(s)")]
    WorkingHoursArity {
        /// Number of times supplied.
        count: usize,
    },

    /// A weekday ordinal outside `0 = Monday … 6 = Sunday`.
    #[error("invalid weekday ordinal {0} (expected 0 = Monday … 6 = Sunday)")]
    InvalidWeekday(u8),

    /// Malformed input that none of the other variants describe.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use bizcal_core::{ensure, errors::{Error, Result}};
/// fn weekend_count(n: usize) -> Result<usize> {
///     ensure!(n <= 6, Error::TooManyWeekendDays { count: n });
///     Ok(n)
/// }
/// assert!(weekend_count(2).is_ok());
/// assert_eq!(weekend_count(7), Err(Error::TooManyWeekendDays { count: 7 }));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_weekend_days_message() {
        let e = Error::TooManyWeekendDays { count: 7 };
        assert_eq!(
            e.to_string(),
            "too many weekend days per week: 7 (at most 6 allowed)"
        );
    }

    #[test]
    fn working_hours_arity_message() {
        let e = Error::WorkingHoursArity { count: 3 };
        assert_eq!(
            e.to_string(),
            "working hours must specify a beginning and an end, got 3 value(s)"
        );
    }

    #[test]
    fn invalid_weekday_message() {
        assert_eq!(
            Error::InvalidWeekday(9).to_string(),
            "invalid weekday ordinal 9 (expected 0 = Monday … 6 = Sunday)"
        );
    }

    #[test]
    fn ensure_returns_early() {
        fn check(ok: bool) -> Result<u8> {
            ensure!(ok, Error::InvalidArgument("nope".into()));
            Ok(1)
        }
        assert_eq!(check(true), Ok(1));
        assert_eq!(check(false), Err(Error::InvalidArgument("nope".into())));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Error>();
    }
}
