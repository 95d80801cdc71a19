//! Date sequence generation.

use tracing::debug;

use crate::date::Date;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces `n_days` consecutive dates by repeatedly
/// advancing to the next day. Month and year boundaries, including leap
/// days, are handled by [`Date::next`]. The sequence is cut short only if it
/// runs past the last representable year.
///
/// # Example
///
/// ```
/// use gregor_calendar::{Date, date_sequence};
///
/// let start = Date::new(30, 12, 2023).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2], Date::new(1, 1, 2024).unwrap());
/// ```
pub fn date_sequence(start: Date, n_days: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.next() {
            Ok(next) => {
                current = next;
                dates.push(current);
            }
            Err(err) => {
                debug!(
                    %err,
                    produced = dates.len(),
                    requested = n_days,
                    "date sequence reached the end of the calendar"
                );
                break;
            }
        }
    }
    dates
}
