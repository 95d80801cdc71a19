//! Error types for the gregor-calendar crate.

use crate::component::Component;

/// The two classes of construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A component was supplied with the wrong type (not a whole number).
    Type,
    /// A component was an integer but outside its valid range.
    Value,
}

/// Error type for all fallible operations in the gregor-calendar crate.
///
/// Every variant is fail-fast: a `Date` is either fully valid or it is not
/// created at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum DateError {
    /// Returned when a date component is not an integer.
    #[error("day, month and year must be integers: {field} was {found}")]
    NotInteger {
        /// Which component was rejected (`"day"`, `"month"` or `"year"`).
        field: &'static str,
        /// The value that was supplied.
        found: Component,
    },

    /// Returned when a year is below 1 or beyond the representable range.
    #[error("invalid year: {year} (must be 1..={})", i32::MAX)]
    InvalidYear {
        /// The invalid year that was provided or computed.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day number is outside the days of the given month.
    #[error("invalid day: {day} for month {month} of {year} (must be 1..={max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i64,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The maximum valid day for that month and year.
        max_day: u8,
    },
}

impl DateError {
    /// Returns whether this is a type error or a range error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotInteger { .. } => ErrorKind::Type,
            Self::InvalidYear { .. } | Self::InvalidMonth { .. } | Self::InvalidDay { .. } => {
                ErrorKind::Value
            }
        }
    }
}
