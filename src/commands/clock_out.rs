use super::{now, open_tracker};
use crate::libs::attendance::{ClockOutDetails, DayState};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ClockOutArgs {
    #[arg(long, short, help = "What you worked on today")]
    summary: Option<String>,
    #[arg(long, short, help = "Free-form notes")]
    notes: Option<String>,
}

pub fn cmd(args: ClockOutArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    let now = now();

    let today = tracker.day(now.date())?;
    match (DayState::of(today.as_ref()), today.as_ref().and_then(|d| d.clock_out)) {
        (DayState::NotClockedIn, _) => msg_bail_anyhow!(Message::NotClockedInToday),
        (DayState::OnBreak, _) => msg_bail_anyhow!(Message::EndBreakBeforeClockOut),
        (DayState::ClockedOut, Some(at)) => msg_bail_anyhow!(Message::AlreadyClockedOut(at.format("%H:%M").to_string())),
        _ => {}
    }

    let work_summary = match args.summary {
        Some(summary) => Some(summary),
        None => {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkSummary.to_string())
                .allow_empty(true)
                .interact_text()?;
            Some(input.trim().to_string()).filter(|s| !s.is_empty())
        }
    };

    let outcome = tracker.clock_out(
        now,
        ClockOutDetails {
            work_summary,
            notes: args.notes,
        },
    )?;

    msg_success!(Message::ClockedOut(now.format("%H:%M").to_string()));
    msg_print!(Message::ClockOutSummaryHeader, true);
    View::clock_out(&outcome.day, tracker.policy())?;

    if outcome.day.timesheet.as_ref().is_some_and(|sheet| sheet.needs_approval) {
        msg_warning!(Message::OvertimeNeedsApproval);
    }
    match outcome.weekly {
        Some(summary) => View::weekly(&summary)?,
        None => msg_warning!(Message::WeeklySummaryNotUpdated),
    }
    Ok(())
}
