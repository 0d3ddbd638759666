//! Attendance day records and the clock-in / break / clock-out state machine.
//!
//! An [`AttendanceDay`] is created at clock-in, mutated by break start/end,
//! and sealed at clock-out when its [`TimesheetResult`] is attached. Every
//! transition checks the current [`DayState`] and rejects calls that do not
//! fit, so the lifecycle does not depend on which buttons a UI happens to
//! enable.
//!
//! ```text
//! NotClockedIn --clock_in--> ClockedIn --start_break--> OnBreak
//!                               ^                          |
//!                               +-------end_break----------+
//! ClockedIn --clock_out--> ClockedOut
//! ```
//!
//! ## Breaks
//!
//! Completed breaks are stored in order in `breaks`; the break in progress,
//! if any, lives in `current_break`. There can therefore be at most one open
//! break and it is always the latest one. [`AttendanceDay::intervals`] gives
//! the combined chronological view as [`BreakInterval`]s.

use crate::libs::policy::WorkPolicy;
use crate::libs::timesheet::{compute_clock_out, late_minutes, TimesheetResult, WorkStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle errors for a day record.
#[derive(Debug, Error, PartialEq)]
pub enum AttendanceError {
    #[error("already clocked in on {0}")]
    AlreadyClockedIn(NaiveDate),
    #[error("no clock-in recorded for {0}")]
    NotClockedIn(NaiveDate),
    #[error("cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: DayState },
    #[error("{action} at {at} is earlier than the last recorded event at {last}")]
    TimeWentBackwards {
        action: &'static str,
        at: NaiveDateTime,
        last: NaiveDateTime,
    },
    #[error("unknown break type: {0}")]
    UnknownBreakKind(String),
    #[error("unknown work type: {0}")]
    UnknownWorkType(String),
    #[error("clocked-out day {date} has no valid `{field}`")]
    IncompleteTimesheet { date: NaiveDate, field: &'static str },
    #[error("day {0} carries timesheet figures but no clock-out")]
    TimesheetWithoutClockOut(NaiveDate),
}

/// Where the day's state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    NotClockedIn,
    ClockedIn,
    OnBreak,
    ClockedOut,
}

impl DayState {
    /// State of an optional day record; no record means not clocked in.
    pub fn of(day: Option<&AttendanceDay>) -> DayState {
        day.map_or(DayState::NotClockedIn, AttendanceDay::state)
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DayState::NotClockedIn => "not clocked in",
            DayState::ClockedIn => "clocked in",
            DayState::OnBreak => "on break",
            DayState::ClockedOut => "clocked out",
        };
        f.write_str(text)
    }
}

/// Kind of break, as chosen when starting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Coffee,
    Personal,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "lunch",
            BreakKind::Coffee => "coffee",
            BreakKind::Personal => "personal",
        }
    }
}

impl FromStr for BreakKind {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lunch" => Ok(BreakKind::Lunch),
            "coffee" => Ok(BreakKind::Coffee),
            "personal" => Ok(BreakKind::Personal),
            other => Err(AttendanceError::UnknownBreakKind(other.to_string())),
        }
    }
}

impl fmt::Display for BreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the employee works from on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Office,
    Remote,
    Field,
}

impl FromStr for WorkType {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "office" => Ok(WorkType::Office),
            "remote" => Ok(WorkType::Remote),
            "field" => Ok(WorkType::Field),
            other => Err(AttendanceError::UnknownWorkType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WorkType::Office => "office",
            WorkType::Remote => "remote",
            WorkType::Field => "field",
        };
        f.write_str(text)
    }
}

/// A break that has been started but not yet ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBreak {
    pub start: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: BreakKind,
    #[serde(rename = "expectedDuration")]
    pub expected_minutes: u32,
}

impl OpenBreak {
    /// Milliseconds elapsed since the break started.
    pub fn elapsed_ms(&self, now: NaiveDateTime) -> i64 {
        (now - self.start).num_milliseconds()
    }
}

/// A break with both ends recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedBreak {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: BreakKind,
    #[serde(rename = "expectedDuration")]
    pub expected_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_reason: Option<String>,
}

impl CompletedBreak {
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// The break ran past its expected duration.
    pub fn is_extended(&self) -> bool {
        self.duration_ms() > i64::from(self.expected_minutes) * 60_000
    }
}

/// Chronological view of a day's breaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakInterval<'a> {
    Completed(&'a CompletedBreak),
    InProgress(&'a OpenBreak),
}

impl BreakInterval<'_> {
    pub fn start(&self) -> NaiveDateTime {
        match self {
            BreakInterval::Completed(b) => b.start,
            BreakInterval::InProgress(b) => b.start,
        }
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        match self {
            BreakInterval::Completed(b) => Some(b.end),
            BreakInterval::InProgress(_) => None,
        }
    }

    pub fn kind(&self) -> BreakKind {
        match self {
            BreakInterval::Completed(b) => b.kind,
            BreakInterval::InProgress(b) => b.kind,
        }
    }
}

/// Optional details captured at clock-in.
#[derive(Debug, Clone, Default)]
pub struct ClockInDetails {
    pub work_type: WorkType,
    pub location: Option<String>,
    pub late_reason: Option<String>,
    pub notes: Option<String>,
}

/// Optional details captured at clock-out.
#[derive(Debug, Clone, Default)]
pub struct ClockOutDetails {
    pub work_summary: Option<String>,
    pub notes: Option<String>,
}

/// One employee's attendance for one calendar date.
///
/// The timesheet figures are stored flat next to the day's fields. A stored
/// day is rejected unless it has either a clock-out and every figure, or
/// neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredDay")]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub clock_in: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<NaiveDateTime>,
    #[serde(default)]
    pub breaks: Vec<CompletedBreak>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_break: Option<OpenBreak>,
    /// Sum of completed break durations.
    #[serde(default, rename = "totalBreakTime")]
    pub total_break_ms: i64,
    #[serde(default)]
    pub work_type: WorkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_notes: Option<String>,
    #[serde(flatten)]
    pub timesheet: Option<TimesheetResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDay {
    date: NaiveDate,
    clock_in: NaiveDateTime,
    #[serde(default)]
    clock_out: Option<NaiveDateTime>,
    #[serde(default)]
    breaks: Vec<CompletedBreak>,
    #[serde(default)]
    current_break: Option<OpenBreak>,
    #[serde(default, rename = "totalBreakTime")]
    total_break_ms: i64,
    #[serde(default)]
    work_type: WorkType,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    late_reason: Option<String>,
    #[serde(default)]
    clock_in_notes: Option<String>,
    #[serde(default)]
    work_summary: Option<String>,
    #[serde(default)]
    clock_out_notes: Option<String>,
    #[serde(flatten)]
    figures: StoredFigures,
}

// Every figure optional so a missing or null one can be reported by name.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFigures {
    #[serde(rename = "totalWorkDuration")]
    total_worked_ms: Option<i64>,
    actual_work_hours: Option<f64>,
    standard_hours: Option<f64>,
    #[serde(rename = "overtime")]
    overtime_hours: Option<f64>,
    #[serde(rename = "overtimePay")]
    overtime_pay_multiplier: Option<f64>,
    late_minutes: Option<i64>,
    status: Option<WorkStatus>,
    needs_approval: Option<bool>,
}

impl StoredFigures {
    fn is_empty(&self) -> bool {
        self.total_worked_ms.is_none()
            && self.actual_work_hours.is_none()
            && self.standard_hours.is_none()
            && self.overtime_hours.is_none()
            && self.overtime_pay_multiplier.is_none()
            && self.late_minutes.is_none()
            && self.status.is_none()
            && self.needs_approval.is_none()
    }

    fn into_timesheet(self, date: NaiveDate) -> Result<TimesheetResult, AttendanceError> {
        fn required<T>(value: Option<T>, date: NaiveDate, field: &'static str) -> Result<T, AttendanceError> {
            value.ok_or(AttendanceError::IncompleteTimesheet { date, field })
        }

        Ok(TimesheetResult {
            total_worked_ms: required(self.total_worked_ms, date, "totalWorkDuration")?,
            actual_work_hours: required(self.actual_work_hours, date, "actualWorkHours")?,
            standard_hours: required(self.standard_hours, date, "standardHours")?,
            overtime_hours: required(self.overtime_hours, date, "overtime")?,
            overtime_pay_multiplier: required(self.overtime_pay_multiplier, date, "overtimePay")?,
            late_minutes: required(self.late_minutes, date, "lateMinutes")?,
            status: required(self.status, date, "status")?,
            needs_approval: required(self.needs_approval, date, "needsApproval")?,
        })
    }
}

impl TryFrom<StoredDay> for AttendanceDay {
    type Error = AttendanceError;

    fn try_from(stored: StoredDay) -> Result<Self, Self::Error> {
        let timesheet = match (stored.clock_out, stored.figures.is_empty()) {
            (Some(_), _) => Some(stored.figures.into_timesheet(stored.date)?),
            (None, true) => None,
            (None, false) => return Err(AttendanceError::TimesheetWithoutClockOut(stored.date)),
        };

        Ok(AttendanceDay {
            date: stored.date,
            clock_in: stored.clock_in,
            clock_out: stored.clock_out,
            breaks: stored.breaks,
            current_break: stored.current_break,
            total_break_ms: stored.total_break_ms,
            work_type: stored.work_type,
            location: stored.location,
            late_reason: stored.late_reason,
            clock_in_notes: stored.clock_in_notes,
            work_summary: stored.work_summary,
            clock_out_notes: stored.clock_out_notes,
            timesheet,
        })
    }
}

impl AttendanceDay {
    /// Starts a day at `now`.
    pub fn clock_in(now: NaiveDateTime, details: ClockInDetails) -> AttendanceDay {
        AttendanceDay {
            date: now.date(),
            clock_in: now,
            clock_out: None,
            breaks: Vec::new(),
            current_break: None,
            total_break_ms: 0,
            work_type: details.work_type,
            location: details.location,
            late_reason: details.late_reason,
            clock_in_notes: details.notes,
            work_summary: None,
            clock_out_notes: None,
            timesheet: None,
        }
    }

    pub fn state(&self) -> DayState {
        if self.clock_out.is_some() {
            DayState::ClockedOut
        } else if self.current_break.is_some() {
            DayState::OnBreak
        } else {
            DayState::ClockedIn
        }
    }

    /// Timestamp of the latest event recorded on this day.
    pub fn last_event(&self) -> NaiveDateTime {
        self.clock_out
            .or_else(|| self.current_break.as_ref().map(|b| b.start))
            .or_else(|| self.breaks.last().map(|b| b.end))
            .unwrap_or(self.clock_in)
    }

    /// Opens a break. Only allowed while clocked in and not already on break.
    pub fn start_break(&mut self, now: NaiveDateTime, kind: BreakKind, expected_minutes: u32) -> Result<&OpenBreak, AttendanceError> {
        self.expect_state("start a break", DayState::ClockedIn)?;
        self.expect_not_before("break start", now)?;

        Ok(&*self.current_break.insert(OpenBreak { start: now, kind, expected_minutes }))
    }

    /// Closes the open break and adds its length to the break total.
    pub fn end_break(&mut self, now: NaiveDateTime, extended_reason: Option<String>) -> Result<&CompletedBreak, AttendanceError> {
        self.expect_state("end a break", DayState::OnBreak)?;
        self.expect_not_before("break end", now)?;

        let open = self.current_break.take().ok_or(AttendanceError::InvalidTransition {
            action: "end a break",
            state: DayState::ClockedIn,
        })?;

        let completed = CompletedBreak {
            start: open.start,
            end: now,
            kind: open.kind,
            expected_minutes: open.expected_minutes,
            extended_reason,
        };
        self.total_break_ms += completed.duration_ms();
        self.breaks.push(completed);

        Ok(&self.breaks[self.breaks.len() - 1])
    }

    /// Seals the day at `now` and attaches the computed timesheet.
    ///
    /// Rejected while a break is open; the break has to be ended first.
    pub fn clock_out(&mut self, now: NaiveDateTime, policy: &WorkPolicy, details: ClockOutDetails) -> Result<&TimesheetResult, AttendanceError> {
        self.expect_state("clock out", DayState::ClockedIn)?;
        self.expect_not_before("clock-out", now)?;

        let sheet = compute_clock_out(now, self.clock_in, self.total_break_ms, policy);
        self.clock_out = Some(now);
        self.work_summary = details.work_summary;
        self.clock_out_notes = details.notes;

        Ok(&*self.timesheet.insert(sheet))
    }

    /// Completed breaks followed by the open one, if any.
    pub fn intervals(&self) -> impl Iterator<Item = BreakInterval<'_>> {
        self.breaks
            .iter()
            .map(BreakInterval::Completed)
            .chain(self.current_break.iter().map(BreakInterval::InProgress))
    }

    /// Status label; "In Progress" until the day is clocked out.
    pub fn status(&self) -> WorkStatus {
        self.timesheet.as_ref().map_or(WorkStatus::InProgress, |sheet| sheet.status)
    }

    /// Minutes late at clock-in, available before clock-out too.
    pub fn late_minutes(&self, policy: &WorkPolicy) -> i64 {
        self.timesheet
            .as_ref()
            .map_or_else(|| late_minutes(self.clock_in, policy), |sheet| sheet.late_minutes)
    }

    /// Late by more than the policy's threshold.
    pub fn is_late(&self, policy: &WorkPolicy) -> bool {
        self.timesheet.as_ref().map_or_else(
            || late_minutes(self.clock_in, policy) > policy.late_threshold_minutes,
            |sheet| sheet.is_late(policy),
        )
    }

    /// Worked milliseconds so far: elapsed time minus completed and open breaks.
    pub fn worked_ms_at(&self, now: NaiveDateTime) -> i64 {
        let end = self.clock_out.unwrap_or(now);
        let open_break = self.current_break.as_ref().map_or(0, |b| b.elapsed_ms(end));
        (end - self.clock_in).num_milliseconds() - self.total_break_ms - open_break
    }

    fn expect_state(&self, action: &'static str, expected: DayState) -> Result<(), AttendanceError> {
        let state = self.state();
        if state == expected {
            Ok(())
        } else {
            tracing::debug!(action, %state, "rejected transition");
            Err(AttendanceError::InvalidTransition { action, state })
        }
    }

    fn expect_not_before(&self, action: &'static str, at: NaiveDateTime) -> Result<(), AttendanceError> {
        let last = self.last_event();
        if at < last {
            Err(AttendanceError::TimeWentBackwards { action, at, last })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn clocked_in() -> AttendanceDay {
        AttendanceDay::clock_in(at(9, 0), ClockInDetails::default())
    }

    #[test]
    fn clock_in_starts_an_open_day() {
        let day = clocked_in();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(day.state(), DayState::ClockedIn);
        assert_eq!(day.status(), WorkStatus::InProgress);
        assert_eq!(DayState::of(None), DayState::NotClockedIn);
    }

    #[test]
    fn break_cycle_accumulates_break_time() {
        let mut day = clocked_in();
        day.start_break(at(12, 0), BreakKind::Lunch, 30).unwrap();
        assert_eq!(day.state(), DayState::OnBreak);

        let completed = day.end_break(at(12, 45), Some("queue at the canteen".into())).unwrap();
        assert!(completed.is_extended());
        assert_eq!(day.total_break_ms, 45 * 60_000);
        assert_eq!(day.state(), DayState::ClockedIn);

        day.start_break(at(15, 0), BreakKind::Coffee, 15).unwrap();
        let completed = day.end_break(at(15, 10), None).unwrap();
        assert!(!completed.is_extended());
        assert_eq!(day.total_break_ms, 55 * 60_000);
    }

    #[test]
    fn open_break_is_last_interval() {
        let mut day = clocked_in();
        day.start_break(at(10, 0), BreakKind::Coffee, 15).unwrap();
        day.end_break(at(10, 15), None).unwrap();
        day.start_break(at(12, 0), BreakKind::Lunch, 60).unwrap();

        let intervals: Vec<_> = day.intervals().collect();
        assert_eq!(intervals.len(), 2);
        assert!(matches!(intervals[0], BreakInterval::Completed(_)));
        assert!(matches!(intervals[1], BreakInterval::InProgress(_)));
        assert_eq!(intervals[1].end(), None);
        assert_eq!(intervals[1].kind(), BreakKind::Lunch);
    }

    #[test]
    fn rejects_second_break_while_on_break() {
        let mut day = clocked_in();
        day.start_break(at(10, 0), BreakKind::Coffee, 15).unwrap();
        let err = day.start_break(at(10, 5), BreakKind::Lunch, 30).unwrap_err();
        assert_eq!(
            err,
            AttendanceError::InvalidTransition { action: "start a break", state: DayState::OnBreak }
        );
    }

    #[test]
    fn rejects_end_break_without_open_break() {
        let mut day = clocked_in();
        assert!(matches!(day.end_break(at(10, 0), None), Err(AttendanceError::InvalidTransition { .. })));
    }

    #[test]
    fn rejects_clock_out_while_on_break() {
        let mut day = clocked_in();
        day.start_break(at(12, 0), BreakKind::Lunch, 30).unwrap();
        let err = day.clock_out(at(17, 0), &WorkPolicy::default(), ClockOutDetails::default()).unwrap_err();
        assert_eq!(err, AttendanceError::InvalidTransition { action: "clock out", state: DayState::OnBreak });
    }

    #[test]
    fn clock_out_seals_the_day() {
        let mut day = clocked_in();
        day.start_break(at(12, 0), BreakKind::Lunch, 60).unwrap();
        day.end_break(at(13, 0), None).unwrap();

        let sheet = day.clock_out(at(18, 0), &WorkPolicy::default(), ClockOutDetails::default()).unwrap();
        assert_eq!(sheet.actual_work_hours, 8.0);
        assert_eq!(day.state(), DayState::ClockedOut);
        assert_eq!(day.status(), WorkStatus::Complete);

        assert!(day.start_break(at(18, 30), BreakKind::Coffee, 15).is_err());
        assert!(day.clock_out(at(19, 0), &WorkPolicy::default(), ClockOutDetails::default()).is_err());
    }

    #[test]
    fn rejects_events_before_the_last_one() {
        let mut day = clocked_in();
        let err = day.start_break(at(8, 0), BreakKind::Coffee, 15).unwrap_err();
        assert!(matches!(err, AttendanceError::TimeWentBackwards { .. }));

        day.start_break(at(10, 0), BreakKind::Coffee, 15).unwrap();
        day.end_break(at(10, 15), None).unwrap();
        assert!(day.clock_out(at(10, 10), &WorkPolicy::default(), ClockOutDetails::default()).is_err());
    }

    #[test]
    fn worked_time_excludes_open_break() {
        let mut day = clocked_in();
        day.start_break(at(10, 0), BreakKind::Coffee, 15).unwrap();
        day.end_break(at(10, 30), None).unwrap();
        day.start_break(at(12, 0), BreakKind::Lunch, 30).unwrap();

        // 4h elapsed, 30m completed break, 1h open break
        assert_eq!(day.worked_ms_at(at(13, 0)), (150) * 60_000);
    }

    #[test]
    fn late_minutes_before_clock_out() {
        let day = AttendanceDay::clock_in(at(9, 20), ClockInDetails::default());
        assert_eq!(day.late_minutes(&WorkPolicy::default()), 20);
    }

    #[test]
    fn parses_break_kinds_and_work_types() {
        assert_eq!("Lunch".parse::<BreakKind>().unwrap(), BreakKind::Lunch);
        assert!("nap".parse::<BreakKind>().is_err());
        assert_eq!("remote".parse::<WorkType>().unwrap(), WorkType::Remote);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut day = clocked_in();
        day.clock_out(at(17, 0), &WorkPolicy::default(), ClockOutDetails::default()).unwrap();

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2025-03-12");
        assert_eq!(json["totalBreakTime"], 0);
        assert_eq!(json["status"], "Complete");
        assert_eq!(json["overtime"], 0.0);
        assert!(json.get("currentBreak").is_none());

        let back: AttendanceDay = serde_json::from_value(json).unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn closed_day_with_broken_figures_does_not_load() {
        let mut day = clocked_in();
        day.clock_out(at(19, 0), &WorkPolicy::default(), ClockOutDetails::default()).unwrap();
        let json = serde_json::to_value(&day).unwrap();

        let mut bogus_status = json.clone();
        bogus_status["status"] = "Bogus".into();
        assert!(serde_json::from_value::<AttendanceDay>(bogus_status).is_err());

        let mut null_hours = json.clone();
        null_hours["actualWorkHours"] = serde_json::Value::Null;
        let err = serde_json::from_value::<AttendanceDay>(null_hours).unwrap_err();
        assert!(err.to_string().contains("actualWorkHours"));

        let mut no_clock_out = json;
        no_clock_out.as_object_mut().unwrap().remove("clockOut");
        let err = serde_json::from_value::<AttendanceDay>(no_clock_out).unwrap_err();
        assert!(err.to_string().contains("no clock-out"));
    }
}
