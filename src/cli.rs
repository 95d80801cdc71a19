use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gregor_calendar::Component;

/// Gregorian calendar date arithmetic.
#[derive(Parser)]
#[command(
    name = "gregor",
    version,
    about = "Validated Gregorian dates and day arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk through construction, comparison and arithmetic on sample dates.
    Demo(DemoArgs),
    /// Shift a date by a number of days.
    Add(AddArgs),
    /// Count the days from one date to another.
    Between(BetweenArgs),
    /// Report whether a year is a leap year.
    Leap(LeapArgs),
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Path to a TOML file listing the dates to show. Uses built-in samples if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// A date given as separate day, month and year flags.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Day of the month.
    #[arg(long, value_parser = component)]
    pub day: Component,

    /// Month (1-12).
    #[arg(long, value_parser = component)]
    pub month: Component,

    /// Year (1 or later).
    #[arg(long, value_parser = component)]
    pub year: Component,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Start date.
    #[command(flatten)]
    pub date: DateArgs,

    /// Number of days to add; negative values move backwards.
    #[arg(long, allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// Start date as DAY MONTH YEAR.
    #[arg(long, num_args = 3, value_names = ["DAY", "MONTH", "YEAR"], value_parser = component)]
    pub from: Vec<Component>,

    /// End date as DAY MONTH YEAR.
    #[arg(long, num_args = 3, value_names = ["DAY", "MONTH", "YEAR"], value_parser = component)]
    pub to: Vec<Component>,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct LeapArgs {
    /// Year to check.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Keeps numeric-looking text typed so the library can reject non-integers.
fn component(s: &str) -> Result<Component, Infallible> {
    s.parse()
}
