//! Leap-year rule and month lengths for the proleptic Gregorian calendar.

/// Number of days in one 400-year Gregorian cycle.
pub(crate) const DAYS_IN_ERA: i64 = 146_097;

/// Number of years in one Gregorian cycle.
pub(crate) const YEARS_IN_ERA: i64 = 400;

/// Returns `true` if `year` is a leap year.
///
/// Divisible by 4, except centuries, except every fourth century.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// `month` is expected in 1..=12; every month outside {2, 4, 6, 9, 11} has 31
/// days.
pub fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Returns the number of days in `year`.
pub(crate) fn days_in_year(year: i32) -> u16 {
    (1..=12).map(|month| u16::from(days_in_month(month, year))).sum()
}
