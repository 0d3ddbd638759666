use super::{now, open_tracker};
use crate::libs::attendance::{ClockInDetails, WorkType};
use crate::libs::messages::Message;
use crate::libs::timesheet::late_minutes;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ClockInArgs {
    #[arg(long, short, default_value = "office", help = "office, remote or field")]
    work_type: WorkType,
    #[arg(long, short, help = "Where you are working from")]
    location: Option<String>,
    #[arg(long, short, help = "Reason for a late arrival; asked for when omitted")]
    reason: Option<String>,
    #[arg(long, short, help = "Free-form notes")]
    notes: Option<String>,
}

pub fn cmd(args: ClockInArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let now = now();

    let late = late_minutes(now, tracker.policy());
    let late_reason = match args.reason {
        Some(reason) => Some(reason),
        None if late > 0 => prompt_late_reason()?,
        None => None,
    };

    let day = tracker.clock_in(
        now,
        ClockInDetails {
            work_type: args.work_type,
            location: args.location,
            late_reason,
            notes: args.notes,
        },
    )?;

    msg_success!(Message::ClockedIn(day.clock_in.format("%H:%M").to_string()));
    if late > 0 {
        msg_warning!(Message::LateArrival(late));
    }
    Ok(())
}

fn prompt_late_reason() -> Result<Option<String>> {
    let reason: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptLateReason.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(reason.trim().to_string()).filter(|r| !r.is_empty()))
}
