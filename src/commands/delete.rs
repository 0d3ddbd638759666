use super::{open_tracker, parse_date};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(long, short, default_value = "today", value_parser = parse_date, help = "Date to delete (YYYY-MM-DD or 'today')")]
    date: NaiveDate,
    #[arg(long, short, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let label = args.date.to_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteDay(label.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tracker.delete(args.date)?;
    msg_success!(Message::DayDeleted(label));
    Ok(())
}
