//! # gregor-calendar
//!
//! Validated dates in the proleptic Gregorian calendar, with day arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Component (untyped input)"] -->|"Date::from_components()"| B["Date"]
//!     C["(day, month, year)"] -->|"Date::new()"| B
//!     B -->|".add_days(n)"| B
//!     B -->|".days_between(other)"| D["i64"]
//!     B -->|"date_sequence()"| E["Vec of Date"]
//!     F["days_in_month() / is_leap_year()"] --> B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use gregor_calendar::{Date, date_sequence, is_leap_year};
//!
//! let today = Date::new(20, 5, 2023).unwrap();
//! let birthday = Date::new(15, 8, 2023).unwrap();
//!
//! assert_eq!(today.to_string(), "20.05.2023");
//! assert!(today < birthday);
//! assert_eq!(today.days_between(birthday), 87);
//! assert_eq!(today.add_days(30).unwrap(), Date::new(19, 6, 2023).unwrap());
//! assert!(is_leap_year(2020));
//!
//! let week = date_sequence(today, 7);
//! assert_eq!(week.len(), 7);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `Date` value type and its arithmetic |
//! | `month` | Leap-year rule and month lengths |
//! | `component` | Untyped constructor input |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod component;
mod date;
mod error;
mod month;
mod sequence;

pub use component::Component;
pub use date::Date;
pub use error::{DateError, ErrorKind};
pub use month::{days_in_month, is_leap_year};
pub use sequence::date_sequence;
