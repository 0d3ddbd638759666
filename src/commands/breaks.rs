//! `break start` / `break end`.
//!
//! Ending a break that ran past its planned length asks for a reason
//! unless one was passed with `--reason`.

use super::{now, open_tracker};
use crate::libs::attendance::{BreakKind, DayState};
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct BreakArgs {
    #[command(subcommand)]
    action: BreakAction,
}

#[derive(Debug, Subcommand)]
enum BreakAction {
    #[command(about = "Start a break")]
    Start {
        #[arg(long, short, default_value = "coffee", help = "lunch, coffee or personal")]
        kind: BreakKind,
        #[arg(long, short, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=480), help = "Planned length in minutes (15, 30, 45, 60)")]
        minutes: u32,
    },
    #[command(about = "End the current break")]
    End {
        #[arg(long, short, help = "Reason for a break longer than planned")]
        reason: Option<String>,
    },
}

pub fn cmd(args: BreakArgs) -> Result<()> {
    match args.action {
        BreakAction::Start { kind, minutes } => start(kind, minutes),
        BreakAction::End { reason } => end(reason),
    }
}

fn start(kind: BreakKind, minutes: u32) -> Result<()> {
    let mut tracker = open_tracker()?;
    let now = now();

    if tracker.day(now.date())?.is_none() {
        msg_bail_anyhow!(Message::NotClockedInToday);
    }
    tracker.start_break(now, kind, minutes)?;

    msg_success!(Message::BreakStarted(kind.to_string(), minutes));
    Ok(())
}

fn end(reason: Option<String>) -> Result<()> {
    let mut tracker = open_tracker()?;
    let now = now();

    let today = tracker.day(now.date())?;
    let open = match today.as_ref().and_then(|day| day.current_break.clone()) {
        Some(open) => open,
        None if DayState::of(today.as_ref()) == DayState::NotClockedIn => msg_bail_anyhow!(Message::NotClockedInToday),
        // Let the state machine report the rejected transition.
        None => {
            tracker.end_break(now, reason)?;
            return Ok(());
        }
    };

    let extended = open.elapsed_ms(now) > i64::from(open.expected_minutes) * 60_000;
    let reason = match reason {
        Some(reason) => Some(reason),
        None if extended => {
            msg_warning!(Message::BreakExtended(open.expected_minutes));
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptExtendedReason.to_string())
                .allow_empty(true)
                .interact_text()?;
            Some(input.trim().to_string()).filter(|r| !r.is_empty())
        }
        None => None,
    };

    tracker.end_break(now, reason)?;
    msg_success!(Message::BreakEnded(format_duration(open.elapsed_ms(now))));
    Ok(())
}
