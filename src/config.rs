use std::path::Path;

use anyhow::{Context, Result};
use gregor_calendar::Component;
use serde::Deserialize;

/// Settings for the `demo` subcommand.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Days added to the first date.
    #[serde(default = "default_add_days")]
    pub add_days: i64,

    /// Dates to construct and compare. The first two are compared and
    /// measured against each other.
    #[serde(default = "default_dates")]
    pub dates: Vec<DateToml>,

    /// Constructions expected to fail; their errors are printed.
    #[serde(default = "default_invalid")]
    pub invalid: Vec<DateToml>,
}

/// A date as written in TOML. Components stay untyped until
/// `Date::from_components` checks them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateToml {
    #[serde(default)]
    pub label: Option<String>,
    pub day: Component,
    pub month: Component,
    pub year: Component,
}

impl DateToml {
    fn new(label: Option<&str>, day: i64, month: i64, year: impl Into<Component>) -> Self {
        Self {
            label: label.map(str::to_string),
            day: Component::Integer(day),
            month: Component::Integer(month),
            year: year.into(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            add_days: default_add_days(),
            dates: default_dates(),
            invalid: default_invalid(),
        }
    }
}

impl DemoConfig {
    /// Reads and parses a TOML demo configuration.
    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

fn default_add_days() -> i64 {
    30
}
fn default_dates() -> Vec<DateToml> {
    vec![
        DateToml::new(Some("today"), 20, 5, 2023),
        DateToml::new(Some("birthday"), 15, 8, 2023),
        DateToml::new(Some("leap day"), 29, 2, 2020),
    ]
}
fn default_invalid() -> Vec<DateToml> {
    vec![
        DateToml::new(None, 31, 4, 2023),
        DateToml::new(None, 1, 13, 2023),
        DateToml::new(None, 1, 1, "2023"),
    ]
}
