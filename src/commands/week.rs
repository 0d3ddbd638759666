//! Weekly overtime summary.
//!
//! By default shows the summary stored by the latest clock-out. With
//! `--date` the week containing that date is recomputed from its records
//! and shown without being stored.

use super::{now, open_tracker, parse_date};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    #[arg(long, short, value_parser = parse_date, help = "Any date in the week to recompute (YYYY-MM-DD or 'today')")]
    date: Option<NaiveDate>,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let tracker = open_tracker()?;

    let Some(date) = args.date else {
        match tracker.stored_weekly_summary()? {
            Some(summary) => View::weekly(&summary)?,
            None => msg_info!(Message::NoStoredWeeklySummary),
        }
        return Ok(());
    };

    let now = now();
    let (days, summary) = tracker.week_summary(date, now)?;
    msg_print!(Message::WeekHeader(summary.start_date.to_string(), summary.end_date.to_string()), true);
    if days.is_empty() {
        msg_info!(Message::NoRecordsForWeek);
        return Ok(());
    }

    View::history(&days, tracker.policy(), now)?;
    View::weekly(&summary)?;
    Ok(())
}
