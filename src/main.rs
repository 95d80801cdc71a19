mod cli;
mod commands;
mod config;
mod demo;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo(args) => demo::run(args),
        Command::Add(args) => commands::add(args),
        Command::Between(args) => commands::between(args),
        Command::Leap(args) => commands::leap(args),
    }
}
