use super::{now, open_tracker, parse_date};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(long, short, default_value = "today", value_parser = parse_date, help = "Date to show (YYYY-MM-DD or 'today')")]
    date: NaiveDate,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let tracker = open_tracker()?;

    match tracker.day(args.date)? {
        Some(day) => {
            msg_print!(Message::StatusHeader(args.date.to_string()), true);
            if let Some(open) = &day.current_break {
                msg_info!(Message::OnBreakSince(open.kind.to_string(), open.start.format("%H:%M").to_string()));
            }
            View::day(&day, tracker.policy(), now())?;
        }
        None => msg_info!(Message::NoRecordForDate(args.date.to_string())),
    }
    Ok(())
}
