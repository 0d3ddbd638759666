//! Live work and break timers.
//!
//! Re-reads today's record every second, so breaks started or ended from
//! another terminal show up immediately. Stops on Ctrl-C or once the day
//! is clocked out.

use super::{now, open_tracker};
use crate::libs::attendance::{AttendanceDay, DayState};
use crate::libs::formatter::format_clock;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// One status line: worked time, and the open break if any.
pub fn live_line(day: &AttendanceDay, now: NaiveDateTime) -> String {
    let worked = format!("Worked {}", format_clock(day.worked_ms_at(now)));
    match &day.current_break {
        Some(open) => format!("{} | {} break {}", worked, open.kind, format_clock(open.elapsed_ms(now))),
        None => worked,
    }
}

pub async fn cmd() -> Result<()> {
    let tracker = open_tracker()?;
    let date = now().date();

    msg_info!(Message::WatchStarted);
    let mut ticker = tokio::time::interval(TICK);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(day) = tracker.day(date)? else {
                    msg_bail_anyhow!(Message::NotClockedInToday);
                };
                print!("\r{}    ", live_line(&day, now()));
                io::stdout().flush()?;

                if day.state() == DayState::ClockedOut {
                    println!();
                    msg_info!(Message::WatchDayClosed);
                    break;
                }
            }
            _ = &mut ctrl_c => {
                println!();
                msg_info!(Message::WatchStopped);
                break;
            }
        }
    }
    Ok(())
}
