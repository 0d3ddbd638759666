//! Timesheet calculation engine.
//!
//! Pure, synchronous functions that turn a day's clock-in, clock-out and
//! accumulated break time into timesheet statistics, and aggregate stored
//! days into a weekly overtime summary. Nothing here touches storage, the
//! clock, or global state: "now" and the [`WorkPolicy`] are always passed in.
//!
//! ## Day computation
//!
//! ```text
//! total_ms          = now - clock_in
//! worked_ms         = total_ms - (break_deduction ? total_break_ms : 0)
//! actual_hours      = round(worked_ms / 3_600_000)
//! standard_hours    = round(min(policy.standard_hours, actual_hours))
//! overtime_hours    = round(max(0, actual_hours - policy.standard_hours))
//! overtime_pay      = round(overtime_hours * policy.overtime_multiplier)
//! ```
//!
//! `overtime_pay` is a magnitude in hours ("1.88x regular rate"), not money.
//!
//! Malformed input (clock-out before clock-in, breaks longer than the day)
//! yields negative figures rather than an error; the state machine in
//! [`crate::libs::attendance`] keeps such input from being recorded.

use crate::libs::attendance::AttendanceDay;
use crate::libs::formatter::{ms_to_hours, round_to_decimal};
use crate::libs::policy::WorkPolicy;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work status label assigned to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStatus {
    #[serde(rename = "Significant Undertime")]
    SignificantUndertime,
    #[serde(rename = "Undertime")]
    Undertime,
    #[serde(rename = "Complete")]
    Complete,
    #[serde(rename = "Overtime")]
    Overtime,
    #[serde(rename = "Late")]
    Late,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl WorkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::SignificantUndertime => "Significant Undertime",
            WorkStatus::Undertime => "Undertime",
            WorkStatus::Complete => "Complete",
            WorkStatus::Overtime => "Overtime",
            WorkStatus::Late => "Late",
            WorkStatus::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived figures written onto an [`AttendanceDay`] at clock-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetResult {
    /// Elapsed time minus deducted breaks, in milliseconds.
    #[serde(rename = "totalWorkDuration")]
    pub total_worked_ms: i64,
    pub actual_work_hours: f64,
    pub standard_hours: f64,
    #[serde(rename = "overtime")]
    pub overtime_hours: f64,
    /// `overtime_hours * overtime_multiplier`, a scaled hour count.
    #[serde(rename = "overtimePay")]
    pub overtime_pay_multiplier: f64,
    pub late_minutes: i64,
    pub status: WorkStatus,
    /// Overtime has to be approved by a manager.
    pub needs_approval: bool,
}

impl TimesheetResult {
    /// Lateness judged on its own, independent of the status label.
    pub fn is_late(&self, policy: &WorkPolicy) -> bool {
        self.late_minutes > policy.late_threshold_minutes
    }
}

/// Overtime totals for the Sunday-to-Saturday week containing `last_updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOvertimeSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "totalOvertime")]
    pub total_overtime_hours: f64,
    pub total_overtime_pay: f64,
    pub last_updated: NaiveDateTime,
}

/// Classifies worked hours into a [`WorkStatus`]. First match wins.
///
/// 1. below the undertime threshold: Significant Undertime
/// 2. below standard hours: Undertime
/// 3. equal to standard hours: Complete
/// 4. above standard hours: Overtime
/// 5. late by more than the threshold: Late
/// 6. otherwise: In Progress
///
/// Branches 1-4 cover every comparable number, so "Late" is only reachable
/// when `actual_work_hours` is NaN. The order is kept as is; lateness is
/// reported separately through [`TimesheetResult::is_late`].
pub fn classify_status(actual_work_hours: f64, late_minutes: i64, policy: &WorkPolicy) -> WorkStatus {
    if actual_work_hours < policy.undertime_threshold_hours {
        WorkStatus::SignificantUndertime
    } else if actual_work_hours < policy.standard_hours {
        WorkStatus::Undertime
    } else if actual_work_hours == policy.standard_hours {
        WorkStatus::Complete
    } else if actual_work_hours > policy.standard_hours {
        WorkStatus::Overtime
    } else if late_minutes > policy.late_threshold_minutes {
        WorkStatus::Late
    } else {
        WorkStatus::InProgress
    }
}

/// Whole minutes between the policy's expected start and `clock_in`, on the
/// clock-in's own date. Zero when clocked in on time or early.
pub fn late_minutes(clock_in: NaiveDateTime, policy: &WorkPolicy) -> i64 {
    let expected_start = clock_in.date().and_time(policy.expected_start);
    if clock_in > expected_start {
        (clock_in - expected_start).num_minutes()
    } else {
        0
    }
}

/// Computes the timesheet for a clock-out at `now`.
///
/// `total_break_ms` is the sum of all completed break intervals. The caller
/// guarantees `clock_in < now`; otherwise the figures come out negative.
pub fn compute_clock_out(now: NaiveDateTime, clock_in: NaiveDateTime, total_break_ms: i64, policy: &WorkPolicy) -> TimesheetResult {
    let round = |value: f64| round_to_decimal(value, policy.round_to);

    let total_duration_ms = (now - clock_in).num_milliseconds();
    let deducted_ms = if policy.break_deduction { total_break_ms } else { 0 };
    let actual_work_ms = total_duration_ms - deducted_ms;

    let actual_work_hours = round(ms_to_hours(actual_work_ms));
    let standard_hours = round(policy.standard_hours.min(actual_work_hours));
    let overtime_hours = round((actual_work_hours - policy.standard_hours).max(0.0));
    let overtime_pay_multiplier = round(overtime_hours * policy.overtime_multiplier);

    let late_minutes = late_minutes(clock_in, policy);
    let status = classify_status(actual_work_hours, late_minutes, policy);

    tracing::debug!(
        total_duration_ms,
        actual_work_ms,
        actual_work_hours,
        overtime_hours,
        late_minutes,
        status = status.label(),
        "computed clock-out timesheet"
    );

    TimesheetResult {
        total_worked_ms: actual_work_ms,
        actual_work_hours,
        standard_hours,
        overtime_hours,
        overtime_pay_multiplier,
        late_minutes,
        status,
        needs_approval: overtime_hours > 0.0,
    }
}

/// The Sunday and Saturday bounding the week that contains `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

/// Sums overtime over the week containing `now`.
///
/// Records outside the week and records without a computed timesheet are
/// ignored, so callers may pass a wider range than needed. The result only
/// depends on the input; re-running it yields the same summary.
pub fn compute_weekly_summary(now: NaiveDateTime, days: &[AttendanceDay], policy: &WorkPolicy) -> WeeklyOvertimeSummary {
    let (start_date, end_date) = week_bounds(now.date());

    let (overtime, overtime_pay) = days
        .iter()
        .filter(|day| day.date >= start_date && day.date <= end_date)
        .filter_map(|day| day.timesheet.as_ref())
        .fold((0.0, 0.0), |(hours, pay), sheet| {
            (hours + sheet.overtime_hours, pay + sheet.overtime_pay_multiplier)
        });

    WeeklyOvertimeSummary {
        start_date,
        end_date,
        total_overtime_hours: round_to_decimal(overtime, policy.round_to),
        total_overtime_pay: round_to_decimal(overtime_pay, policy.round_to),
        last_updated: now,
    }
}
