//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. The commands read the configuration, open a
//! [`Tracker`] over the on-disk store, and print through the `msg_*`
//! macros and [`crate::libs::view::View`].

pub mod breaks;
pub mod clock_in;
pub mod clock_out;
pub mod delete;
pub mod history;
pub mod init;
pub mod status;
pub mod watch;
pub mod week;

use crate::db::store::SqliteStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Set up the employee id and work policy")]
    Init(init::InitArgs),
    #[command(name = "in", about = "Clock in for today")]
    ClockIn(clock_in::ClockInArgs),
    #[command(name = "out", about = "Clock out and compute today's timesheet")]
    ClockOut(clock_out::ClockOutArgs),
    #[command(about = "Start or end a break", arg_required_else_help = true)]
    Break(breaks::BreakArgs),
    #[command(about = "Show a day's attendance")]
    Status(status::StatusArgs),
    #[command(about = "List a month of attendance records")]
    History(history::HistoryArgs),
    #[command(about = "Show the weekly overtime summary")]
    Week(week::WeekArgs),
    #[command(about = "Delete a day's attendance record")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show live work and break timers")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::ClockIn(args) => clock_in::cmd(args),
            Commands::ClockOut(args) => clock_out::cmd(args),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Watch => watch::cmd().await,
        }
    }
}

/// Tracker for the configured employee over the local database.
pub(crate) fn open_tracker() -> Result<Tracker<SqliteStore>> {
    let config = Config::read()?;
    Tracker::new(config.employee_id(), config.work_policy()?)
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses `YYYY-MM-DD` or `today`.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, String> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(now().date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| Message::InvalidDate(input.to_string()).to_string())
}

/// Parses `YYYY-MM` (or `YYYY-MM-DD`, or `today`) into a date inside that month.
pub(crate) fn parse_month(input: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = parse_date(input) {
        return Ok(date);
    }
    NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
        .map_err(|_| Message::InvalidMonth(input.to_string()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_months() {
        assert_eq!(parse_date("2025-03-12"), Ok(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()));
        assert!(parse_date("12/03/2025").is_err());
        assert_eq!(parse_month("2025-03"), Ok(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(parse_month("March").is_err());
        assert_eq!(parse_month("today"), Ok(now().date()));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
