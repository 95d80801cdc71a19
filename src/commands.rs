//! One-shot subcommands: `add`, `between` and `leap`.

use anyhow::{Context, Result, bail};
use gregor_calendar::{Component, Date, is_leap_year};
use tracing::{debug, info_span};

use crate::cli::{AddArgs, BetweenArgs, LeapArgs};

/// Shift a date by a number of days.
pub fn add(args: AddArgs) -> Result<()> {
    let _cmd = info_span!("add").entered();
    let start = Date::from_components(args.date.day, args.date.month, args.date.year)
        .context("invalid start date")?;
    let shifted = start
        .add_days(args.days)
        .with_context(|| format!("cannot add {} days to {start}", args.days))?;
    debug!(%start, days = args.days, %shifted, "shifted date");
    println!("{start} + {} days = {shifted}", args.days);
    Ok(())
}

/// Count the days from one date to another.
pub fn between(args: BetweenArgs) -> Result<()> {
    let _cmd = info_span!("between").entered();
    let from = date_from_values(args.from).context("invalid --from date")?;
    let to = date_from_values(args.to).context("invalid --to date")?;
    println!("{} days from {from} to {to}", from.days_between(to));
    Ok(())
}

/// Report whether a year is a leap year.
pub fn leap(args: LeapArgs) -> Result<()> {
    let verdict = if is_leap_year(args.year) { "is" } else { "is not" };
    println!("{} {verdict} a leap year", args.year);
    Ok(())
}

fn date_from_values(values: Vec<Component>) -> Result<Date> {
    let Ok([day, month, year]) = <[Component; 3]>::try_from(values) else {
        bail!("expected DAY MONTH YEAR");
    };
    Ok(Date::from_components(day, month, year)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DateArgs;

    fn components(day: i64, month: i64, year: i64) -> Vec<Component> {
        vec![day.into(), month.into(), year.into()]
    }

    #[test]
    fn date_from_three_values() {
        let date = date_from_values(components(15, 8, 2023)).unwrap();
        assert_eq!(date, Date::new(15, 8, 2023).unwrap());
    }

    #[test]
    fn date_from_wrong_count() {
        let err = date_from_values(vec![Component::Integer(1)]).unwrap_err();
        assert!(err.to_string().contains("DAY MONTH YEAR"));
    }

    #[test]
    fn add_rejects_text_year() {
        let args = AddArgs {
            date: DateArgs {
                day: Component::Integer(1),
                month: Component::Integer(1),
                year: Component::Text("twenty".to_string()),
            },
            days: 1,
        };
        let err = add(args).unwrap_err();
        assert!(format!("{err:#}").contains("must be integers"), "{err:#}");
    }

    #[test]
    fn add_reports_year_underflow() {
        let args = AddArgs {
            date: DateArgs {
                day: Component::Integer(1),
                month: Component::Integer(1),
                year: Component::Integer(1),
            },
            days: -1,
        };
        let err = add(args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid year: 0"), "{err:#}");
    }

    #[test]
    fn between_accepts_valid_dates() {
        let args = BetweenArgs {
            from: components(20, 5, 2023),
            to: components(15, 8, 2023),
        };
        assert!(between(args).is_ok());
    }
}
