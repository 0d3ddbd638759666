//! # Punchclock - attendance and timesheet tracking
//!
//! A command-line time clock: clock in and out, take breaks, and get the
//! day's timesheet with overtime, lateness and a weekly overtime summary.
//!
//! ## Features
//!
//! - **Timesheet Calculator**: worked hours, overtime and its pay magnitude,
//!   late minutes and a status label, from a day's clock events
//! - **Day State Machine**: clock-in, breaks and clock-out validated against
//!   the current state of the day
//! - **Weekly Overtime**: Sunday-to-Saturday totals refreshed at clock-out
//! - **Local Storage**: JSON documents in a path-addressed SQLite table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
