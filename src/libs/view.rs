//! Console tables for attendance records.
//!
//! Table builders return a `prettytable::Table` so they can be checked in
//! tests; the `View` methods print them.

use super::attendance::{AttendanceDay, BreakInterval};
use super::formatter::{format_clock, format_duration, format_hours};
use super::policy::WorkPolicy;
use super::timesheet::WeeklyOvertimeSummary;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

const TIME_FORMAT: &str = "%H:%M";
const NOT_SET: &str = "-";

/// Status label plus a separate lateness marker, flagged once lateness
/// passes the policy threshold.
pub fn status_badge(day: &AttendanceDay, policy: &WorkPolicy) -> String {
    let late = day.late_minutes(policy);
    match (late > 0, day.is_late(policy)) {
        (_, true) => format!("{} (late {}m, over threshold)", day.status(), late),
        (true, false) => format!("{} (late {}m)", day.status(), late),
        (false, false) => day.status().to_string(),
    }
}

fn clock_out_cell(day: &AttendanceDay) -> String {
    day.clock_out
        .map_or_else(|| NOT_SET.to_string(), |t| t.format(TIME_FORMAT).to_string())
}

// Only today's open day has a running timer; an older one was never closed.
fn worked_cell(day: &AttendanceDay, now: NaiveDateTime) -> String {
    match &day.timesheet {
        Some(sheet) => format!("{}h", format_hours(sheet.actual_work_hours)),
        None if day.date == now.date() => format_clock(day.worked_ms_at(now)),
        None => NOT_SET.to_string(),
    }
}

fn overtime_cell(day: &AttendanceDay) -> String {
    match &day.timesheet {
        Some(sheet) if sheet.overtime_hours > 0.0 => format!(
            "{}h ({}x)",
            format_hours(sheet.overtime_hours),
            format_hours(sheet.overtime_pay_multiplier)
        ),
        Some(_) => format!("{}h", format_hours(0.0)),
        None => NOT_SET.to_string(),
    }
}

pub fn day_table(day: &AttendanceDay, policy: &WorkPolicy, now: NaiveDateTime) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Date", day.date]);
    table.add_row(row!["Clock in", day.clock_in.format(TIME_FORMAT)]);
    table.add_row(row!["Clock out", clock_out_cell(day)]);
    table.add_row(row!["Work type", day.work_type]);
    if let Some(location) = &day.location {
        table.add_row(row!["Location", location]);
    }
    table.add_row(row!["Worked", worked_cell(day, now)]);
    table.add_row(row!["Break time", format_duration(day.total_break_ms)]);
    table.add_row(row!["Overtime", overtime_cell(day)]);
    table.add_row(row!["Status", status_badge(day, policy)]);
    if let Some(reason) = &day.late_reason {
        table.add_row(row!["Late reason", reason]);
    }
    table
}

pub fn breaks_table(day: &AttendanceDay, now: NaiveDateTime) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "TYPE", "START", "END", "DURATION", "PLANNED", "NOTE"]);
    for (i, interval) in day.intervals().enumerate() {
        let (end, duration_ms, note) = match interval {
            BreakInterval::Completed(b) => {
                let note = match (&b.extended_reason, b.is_extended()) {
                    (Some(reason), _) => reason.clone(),
                    (None, true) => "extended".to_string(),
                    (None, false) => String::new(),
                };
                (b.end.format(TIME_FORMAT).to_string(), b.duration_ms(), note)
            }
            BreakInterval::InProgress(b) => (NOT_SET.to_string(), b.elapsed_ms(now), "in progress".to_string()),
        };
        let planned = match interval {
            BreakInterval::Completed(b) => b.expected_minutes,
            BreakInterval::InProgress(b) => b.expected_minutes,
        };
        table.add_row(row![
            i + 1,
            interval.kind(),
            interval.start().format(TIME_FORMAT),
            end,
            format_duration(duration_ms),
            format!("{}m", planned),
            note
        ]);
    }
    table
}

pub fn history_table(days: &[AttendanceDay], policy: &WorkPolicy, now: NaiveDateTime) -> Table {
    let mut table = Table::new();
    table.add_row(row!["DATE", "IN", "OUT", "WORKED", "BREAKS", "OVERTIME", "STATUS"]);
    for day in days {
        table.add_row(row![
            day.date,
            day.clock_in.format(TIME_FORMAT),
            clock_out_cell(day),
            worked_cell(day, now),
            format_duration(day.total_break_ms),
            overtime_cell(day),
            status_badge(day, policy)
        ]);
    }
    table
}

pub fn clock_out_table(day: &AttendanceDay, policy: &WorkPolicy) -> Table {
    let mut table = Table::new();
    if let Some(sheet) = &day.timesheet {
        table.add_row(row!["Work hours", format!("{}h", format_hours(sheet.actual_work_hours))]);
        table.add_row(row!["Standard hours", format!("{}h", format_hours(sheet.standard_hours))]);
        table.add_row(row!["Overtime", overtime_cell(day)]);
        table.add_row(row!["Break time", format_duration(day.total_break_ms)]);
        if sheet.late_minutes > 0 {
            table.add_row(row!["Late arrival", format!("{}m", sheet.late_minutes)]);
        }
        table.add_row(row!["Status", status_badge(day, policy)]);
    }
    table
}

pub fn weekly_table(summary: &WeeklyOvertimeSummary) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Week", format!("{} to {}", summary.start_date, summary.end_date)]);
    table.add_row(row!["Total overtime", format!("{}h", format_hours(summary.total_overtime_hours))]);
    table.add_row(row!["Overtime pay", format!("{}x", format_hours(summary.total_overtime_pay))]);
    table.add_row(row!["Last updated", summary.last_updated.format("%Y-%m-%d %H:%M")]);
    table
}

pub struct View {}

impl View {
    pub fn day(day: &AttendanceDay, policy: &WorkPolicy, now: NaiveDateTime) -> Result<()> {
        day_table(day, policy, now).printstd();
        if day.intervals().next().is_some() {
            breaks_table(day, now).printstd();
        }
        Ok(())
    }

    pub fn history(days: &[AttendanceDay], policy: &WorkPolicy, now: NaiveDateTime) -> Result<()> {
        history_table(days, policy, now).printstd();
        Ok(())
    }

    pub fn clock_out(day: &AttendanceDay, policy: &WorkPolicy) -> Result<()> {
        clock_out_table(day, policy).printstd();
        Ok(())
    }

    pub fn weekly(summary: &WeeklyOvertimeSummary) -> Result<()> {
        weekly_table(summary).printstd();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::attendance::{BreakKind, ClockInDetails, ClockOutDetails};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn badge_marks_lateness_separately() {
        let policy = WorkPolicy::default();
        let mut day = AttendanceDay::clock_in(at(9, 20), ClockInDetails::default());
        assert_eq!(status_badge(&day, &policy), "In Progress (late 20m, over threshold)");

        day.clock_out(at(17, 20), &policy, ClockOutDetails::default()).unwrap();
        assert_eq!(status_badge(&day, &policy), "Complete (late 20m, over threshold)");
    }

    #[test]
    fn badge_flags_lateness_past_threshold() {
        let policy = WorkPolicy::default();
        let day = AttendanceDay::clock_in(at(9, 10), ClockInDetails::default());
        assert_eq!(status_badge(&day, &policy), "In Progress (late 10m)");

        let day = AttendanceDay::clock_in(at(9, 15), ClockInDetails::default());
        assert_eq!(status_badge(&day, &policy), "In Progress (late 15m)");

        let day = AttendanceDay::clock_in(at(9, 16), ClockInDetails::default());
        assert_eq!(status_badge(&day, &policy), "In Progress (late 16m, over threshold)");
    }

    #[test]
    fn on_time_badge_is_plain_status() {
        let policy = WorkPolicy::default();
        let day = AttendanceDay::clock_in(at(8, 55), ClockInDetails::default());
        assert_eq!(status_badge(&day, &policy), "In Progress");
    }

    #[test]
    fn forgotten_clock_out_shows_no_running_time() {
        let policy = WorkPolicy::default();
        let day = AttendanceDay::clock_in(at(9, 0), ClockInDetails::default());

        let today = history_table(std::slice::from_ref(&day), &policy, at(11, 30)).to_string();
        assert!(today.contains("02:30:00"));

        let days_later = at(11, 30) + chrono::Duration::days(3);
        let later = history_table(std::slice::from_ref(&day), &policy, days_later).to_string();
        assert!(!later.contains("74:30:00"));
        assert_eq!(worked_cell(&day, days_later), NOT_SET);
    }

    #[test]
    fn breaks_table_lists_open_break_last() {
        let mut day = AttendanceDay::clock_in(at(9, 0), ClockInDetails::default());
        day.start_break(at(10, 0), BreakKind::Coffee, 15).unwrap();
        day.end_break(at(10, 30), None).unwrap();
        day.start_break(at(12, 0), BreakKind::Lunch, 60).unwrap();

        let table = breaks_table(&day, at(12, 10));
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("extended"));
        assert!(rendered.contains("in progress"));
    }

    #[test]
    fn clock_out_table_shows_overtime_pay() {
        let policy = WorkPolicy::default();
        let mut day = AttendanceDay::clock_in(at(9, 0), ClockInDetails::default());
        day.clock_out(at(18, 30), &policy, ClockOutDetails::default()).unwrap();

        let rendered = clock_out_table(&day, &policy).to_string();
        assert!(rendered.contains("9.50h"));
        assert!(rendered.contains("1.50h (1.88x)"));
    }
}
