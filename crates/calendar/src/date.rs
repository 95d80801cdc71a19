//! Validated date in the proleptic Gregorian calendar.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use tracing::trace;

use crate::component::Component;
use crate::error::DateError;
use crate::month::{self, DAYS_IN_ERA, YEARS_IN_ERA};

/// A calendar day in the proleptic Gregorian calendar.
///
/// A `Date` always denotes a real day: `year >= 1`, `month` in 1..=12 and
/// `day` within the length of that month. Arithmetic returns new values;
/// there is no way to mutate a `Date` in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

/// Field-wise input for deserialization; every field goes through
/// [`Date::from_components`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDate {
    day: Component,
    month: Component,
    year: Component,
}

impl TryFrom<RawDate> for Date {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::from_components(raw.day, raw.month, raw.year)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

impl Date {
    /// Creates a new `Date` from day, month and year.
    ///
    /// Checks run in a fixed order and stop at the first failure: year,
    /// then month, then day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidYear`] if `year` is below 1 or does not
    /// fit in an `i32`, [`DateError::InvalidMonth`] if `month` is not in
    /// 1..=12, and [`DateError::InvalidDay`] if `day` is not within the
    /// month.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        Self::validate(day, month, year).inspect_err(|err| trace!(%err, "rejected date"))
    }

    /// Creates a new `Date` from loosely typed components.
    ///
    /// All three components are type checked (day, month, year) before any
    /// range check runs.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NotInteger`] for the first component that is not
    /// a [`Component::Integer`], otherwise whatever [`Date::new`] returns.
    ///
    /// # Example
    ///
    /// ```
    /// use gregor_calendar::{Date, ErrorKind};
    ///
    /// let err = Date::from_components(1, 1, "2023").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn from_components(
        day: impl Into<Component>,
        month: impl Into<Component>,
        year: impl Into<Component>,
    ) -> Result<Self, DateError> {
        let day = integer("day", day.into())?;
        let month = integer("month", month.into())?;
        let year = integer("year", year.into())?;
        Self::new(day, month, year)
    }

    fn validate(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        let year = i32::try_from(year)
            .ok()
            .filter(|&y| y >= 1)
            .ok_or(DateError::InvalidYear { year })?;
        let month = u8::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(DateError::InvalidMonth { month })?;
        let max_day = month::days_in_month(month, year);
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (1..=max_day).contains(d))
            .ok_or(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            })?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (>= 1).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if this date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        month::is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        month::days_in_month(self.month, self.year)
    }

    /// Returns the day of the year, 1..=365 (366 in leap years).
    pub fn day_of_year(self) -> u16 {
        let preceding: u16 = (1..self.month)
            .map(|m| u16::from(month::days_in_month(m, self.year)))
            .sum();
        preceding + u16::from(self.day)
    }

    /// Returns the number of days since 0001-01-01, which is day 0.
    pub fn ordinal_days(self) -> i64 {
        let past_years = i64::from(self.year) - 1;
        365 * past_years + past_years / 4 - past_years / 100 + past_years / 400
            + i64::from(self.day_of_year())
            - 1
    }

    /// Returns the date `days` days after this one (before it if negative).
    ///
    /// Whole 400-year cycles are skipped first, then the remaining days are
    /// folded into the following months one month at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidYear`] if the result would fall before
    /// 0001-01-01 or after the last day of year `i32::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use gregor_calendar::Date;
    ///
    /// let date = Date::new(20, 5, 2023).unwrap();
    /// assert_eq!(date.add_days(30).unwrap(), Date::new(19, 6, 2023).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let total = i128::from(self.day) + i128::from(days);
        let eras = (total - 1).div_euclid(i128::from(DAYS_IN_ERA));
        let shifted_year = i128::from(self.year) + eras * i128::from(YEARS_IN_ERA);
        let mut year = i32::try_from(shifted_year).map_err(|_| year_error(shifted_year))?;

        // 1..=DAYS_IN_ERA after removing whole cycles.
        let mut day = (total - eras * i128::from(DAYS_IN_ERA)) as u32;
        let mut month = self.month;
        while day > u32::from(month::days_in_month(month, year)) {
            day -= u32::from(month::days_in_month(month, year));
            month += 1;
            if month > 12 {
                month = 1;
                year = year
                    .checked_add(1)
                    .ok_or_else(|| year_error(i128::from(year) + 1))?;
            }
        }

        if year < 1 {
            return Err(DateError::InvalidYear {
                year: i64::from(year),
            });
        }
        Ok(Self {
            year,
            month,
            day: day as u8,
        })
    }

    /// Returns the number of days from this date forward to `other`.
    ///
    /// Positive when `other` is later, negative when it is earlier, zero when
    /// the dates are equal; `a.days_between(b) == -b.days_between(a)`.
    pub fn days_between(self, other: Date) -> i64 {
        other.ordinal_days() - self.ordinal_days()
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidYear`] only for the last day of year
    /// `i32::MAX`.
    pub fn next(self) -> Result<Self, DateError> {
        self.add_days(1)
    }
}

fn integer(field: &'static str, component: Component) -> Result<i64, DateError> {
    match component.as_integer() {
        Some(value) => Ok(value),
        None => {
            trace!(field, found = %component, "rejected non-integer date component");
            Err(DateError::NotInteger {
                field,
                found: component,
            })
        }
    }
}

fn year_error(year: i128) -> DateError {
    let year = i64::try_from(year).unwrap_or(if year < 0 { i64::MIN } else { i64::MAX });
    DateError::InvalidYear { year }
}
