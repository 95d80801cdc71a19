use gregor_calendar::{Component, Date, DateError, ErrorKind, days_in_month, is_leap_year};

#[test]
fn every_day_of_every_month_is_accepted() {
    for year in [1, 1900, 2000, 2021, 2024] {
        for month in 1..=12u8 {
            let max_day = days_in_month(month, year);
            for day in 1..=max_day {
                let date = Date::new(day.into(), month.into(), year.into()).unwrap();
                assert_eq!(
                    (date.day(), date.month(), date.year()),
                    (day, month, year),
                    "fields not stored as given"
                );
            }
            assert_eq!(
                Date::new(i64::from(max_day) + 1, month.into(), year.into()).unwrap_err(),
                DateError::InvalidDay {
                    day: i64::from(max_day) + 1,
                    month,
                    year,
                    max_day,
                },
                "day past the end of {month}/{year} accepted"
            );
        }
    }
}

#[test]
fn invalid_constructions() {
    let cases: &[(i64, i64, i64, ErrorKind)] = &[
        (31, 4, 2023, ErrorKind::Value),
        (1, 13, 2023, ErrorKind::Value),
        (29, 2, 2021, ErrorKind::Value),
        (1, 1, 0, ErrorKind::Value),
        (-1, 1, 2023, ErrorKind::Value),
    ];
    for &(day, month, year, kind) in cases {
        let err = Date::new(day, month, year).unwrap_err();
        assert_eq!(err.kind(), kind, "Date::new({day}, {month}, {year})");
    }
}

#[test]
fn leap_day_depends_on_year() {
    assert!(Date::new(29, 2, 2020).is_ok());
    assert!(Date::new(29, 2, 2000).is_ok());
    assert!(Date::new(29, 2, 2021).is_err());
    assert!(Date::new(29, 2, 1900).is_err());
}

#[test]
fn day_error_states_range() {
    let err = Date::new(31, 4, 2023).unwrap_err();
    assert_eq!(err.to_string(), "invalid day: 31 for month 4 of 2023 (must be 1..=30)");
}

#[test]
fn type_errors_for_each_component() {
    let err = Date::from_components("1", 1, 2023).unwrap_err();
    assert!(matches!(err, DateError::NotInteger { field: "day", .. }));

    let err = Date::from_components(1, 1.5, 2023).unwrap_err();
    assert!(matches!(err, DateError::NotInteger { field: "month", .. }));

    let err = Date::from_components(1, 1, "2023").unwrap_err();
    assert!(matches!(err, DateError::NotInteger { field: "year", .. }));
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn type_check_precedes_range_checks() {
    // Every component is also out of range, but only the type is reported.
    let err = Date::from_components(40, 13, Component::Text("zero".to_string())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn leap_year_free_function_and_method_agree() {
    for year in 1..=2400 {
        let date = Date::new(1, 1, year.into()).unwrap();
        assert_eq!(date.is_leap_year(), is_leap_year(year), "year {year}");
    }
}
