use super::{now, open_tracker, parse_month};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long, short, default_value = "today", value_parser = parse_month, help = "Month to list (YYYY-MM or 'today')")]
    month: NaiveDate,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let tracker = open_tracker()?;
    let label = args.month.format("%Y-%m").to_string();

    let days = tracker.month(args.month)?;
    if days.is_empty() {
        msg_info!(Message::NoRecordsForMonth(label));
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(label), true);
    View::history(&days, tracker.policy(), now())?;
    Ok(())
}
