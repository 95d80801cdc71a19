//! Demo command: construct sample dates and show what the library does with them.

use anyhow::{Context, Result, bail};
use gregor_calendar::Date;
use tracing::{info, info_span};

use crate::cli::DemoArgs;
use crate::config::{DateToml, DemoConfig};

/// Run the demo and print its report.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo").entered();
    let config = match args.config {
        Some(ref path) => {
            info!(path = %path.display(), "loading demo config");
            DemoConfig::from_path(path)?
        }
        None => DemoConfig::default(),
    };

    for line in report(&config)? {
        println!("{line}");
    }
    Ok(())
}

/// Builds the demo output, one line per entry.
fn report(config: &DemoConfig) -> Result<Vec<String>> {
    let dates = config
        .dates
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let name = label(entry, idx);
            build(entry)
                .with_context(|| format!("invalid date '{name}'"))
                .map(|date| (name, date))
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(&(_, first)) = dates.first() else {
        bail!("demo config lists no dates");
    };
    info!(n_dates = dates.len(), "dates constructed");

    let mut lines = Vec::new();
    for (name, date) in &dates {
        lines.push(format!("{name}: {date}"));
    }

    for (_, date) in &dates {
        lines.push(format!("{} leap year? {}", date.year(), date.is_leap_year()));
    }

    if let Some(&(_, second)) = dates.get(1) {
        lines.push(format!("{first} < {second}? {}", first < second));
        lines.push(format!("{first} == {second}? {}", first == second));
    }

    let shifted = first
        .add_days(config.add_days)
        .with_context(|| format!("cannot add {} days to {first}", config.add_days))?;
    lines.push(format!("{first} + {} days = {shifted}", config.add_days));

    if let Some(&(_, second)) = dates.get(1) {
        lines.push(format!(
            "{} days from {first} to {second}",
            first.days_between(second)
        ));
    }

    for entry in &config.invalid {
        match build(entry) {
            Ok(date) => lines.push(format!("unexpectedly valid: {date}")),
            Err(err) => lines.push(format!("error: {err}")),
        }
    }

    Ok(lines)
}

fn build(entry: &DateToml) -> Result<Date, gregor_calendar::DateError> {
    Date::from_components(entry.day.clone(), entry.month.clone(), entry.year.clone())
}

fn label(entry: &DateToml, idx: usize) -> String {
    entry
        .label
        .clone()
        .unwrap_or_else(|| format!("date #{}", idx + 1))
}

#[cfg(test)]
mod tests {
    use gregor_calendar::Component;

    use super::*;

    #[test]
    fn default_report() {
        let lines = report(&DemoConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec![
                "today: 20.05.2023",
                "birthday: 15.08.2023",
                "leap day: 29.02.2020",
                "2023 leap year? false",
                "2023 leap year? false",
                "2020 leap year? true",
                "20.05.2023 < 15.08.2023? true",
                "20.05.2023 == 15.08.2023? false",
                "20.05.2023 + 30 days = 19.06.2023",
                "87 days from 20.05.2023 to 15.08.2023",
                "error: invalid day: 31 for month 4 of 2023 (must be 1..=30)",
                "error: invalid month: 13 (must be 1..=12)",
                "error: day, month and year must be integers: year was \"2023\"",
            ]
        );
    }

    #[test]
    fn single_date_skips_comparisons() {
        let config: DemoConfig = toml::from_str(
            "add_days = 1\ninvalid = []\n[[dates]]\nday = 31\nmonth = 12\nyear = 2023",
        )
        .unwrap();
        let lines = report(&config).unwrap();
        assert_eq!(
            lines,
            vec![
                "date #1: 31.12.2023",
                "2023 leap year? false",
                "31.12.2023 + 1 days = 01.01.2024",
            ]
        );
    }

    #[test]
    fn invalid_listed_date_names_entry() {
        let mut config = DemoConfig::default();
        config.dates[1].year = Component::Float(2023.0);
        let err = report(&config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date 'birthday'"), "{err:#}");
    }

    #[test]
    fn empty_dates_rejected() {
        let mut config = DemoConfig::default();
        config.dates.clear();
        assert!(report(&config).is_err());
    }
}
