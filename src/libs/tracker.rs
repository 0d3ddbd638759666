//! Day-to-day attendance workflow.
//!
//! [`Tracker`] ties the state machine in [`crate::libs::attendance`] to the
//! repository: it loads the day record, applies one transition, stores the
//! result, and after a clock-out refreshes the weekly overtime summary.
//!
//! All operations take `now` explicitly so the workflow can be driven by a
//! fixed clock in tests.
//!
//! ```rust,no_run
//! use punchclock::db::store::MemoryStore;
//! use punchclock::libs::attendance::ClockInDetails;
//! use punchclock::libs::policy::WorkPolicy;
//! use punchclock::libs::tracker::Tracker;
//! use chrono::Local;
//!
//! let mut tracker = Tracker::with_store(MemoryStore::new(), "ana", WorkPolicy::default());
//! tracker.clock_in(Local::now().naive_local(), ClockInDetails::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::attendance::Attendance;
use crate::db::store::{KeyValueStore, SqliteStore};
use crate::libs::attendance::{AttendanceDay, AttendanceError, BreakKind, ClockInDetails, ClockOutDetails};
use crate::libs::policy::WorkPolicy;
use crate::libs::timesheet::{compute_weekly_summary, week_bounds, WeeklyOvertimeSummary};
use anyhow::Result;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

/// Result of a successful clock-out.
#[derive(Debug, Clone)]
pub struct ClockOutOutcome {
    pub day: AttendanceDay,
    /// `None` when the weekly refresh failed; the clock-out itself is stored.
    pub weekly: Option<WeeklyOvertimeSummary>,
}

pub struct Tracker<S: KeyValueStore> {
    repo: Attendance<S>,
    policy: WorkPolicy,
}

impl Tracker<SqliteStore> {
    pub fn new(employee: &str, policy: WorkPolicy) -> Result<Self> {
        Ok(Self {
            repo: Attendance::new(employee)?,
            policy,
        })
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn with_store(store: S, employee: &str, policy: WorkPolicy) -> Self {
        Self {
            repo: Attendance::with_store(store, employee),
            policy,
        }
    }

    pub fn policy(&self) -> &WorkPolicy {
        &self.policy
    }

    pub fn employee(&self) -> &str {
        self.repo.employee()
    }

    /// Record for `date`, if any.
    pub fn day(&self, date: NaiveDate) -> Result<Option<AttendanceDay>> {
        self.repo.fetch(date)
    }

    fn open_day(&self, now: NaiveDateTime) -> Result<AttendanceDay> {
        let date = now.date();
        self.repo.fetch(date)?.ok_or_else(|| AttendanceError::NotClockedIn(date).into())
    }

    /// Opens today's record. A second clock-in on the same date is rejected.
    pub fn clock_in(&mut self, now: NaiveDateTime, details: ClockInDetails) -> Result<AttendanceDay> {
        let day = AttendanceDay::clock_in(now, details);
        self.repo.insert(&day)?;
        tracing::info!(employee = self.employee(), date = %day.date, "clocked in");
        Ok(day)
    }

    pub fn start_break(&mut self, now: NaiveDateTime, kind: BreakKind, expected_minutes: u32) -> Result<AttendanceDay> {
        let mut day = self.open_day(now)?;
        day.start_break(now, kind, expected_minutes)?;
        self.repo.save(&day)?;
        tracing::info!(employee = self.employee(), %kind, expected_minutes, "break started");
        Ok(day)
    }

    pub fn end_break(&mut self, now: NaiveDateTime, extended_reason: Option<String>) -> Result<AttendanceDay> {
        let mut day = self.open_day(now)?;
        let duration_ms = day.end_break(now, extended_reason)?.duration_ms();
        self.repo.save(&day)?;
        tracing::info!(employee = self.employee(), duration_ms, "break ended");
        Ok(day)
    }

    /// Seals today's record and refreshes the weekly overtime summary.
    pub fn clock_out(&mut self, now: NaiveDateTime, details: ClockOutDetails) -> Result<ClockOutOutcome> {
        let mut day = self.open_day(now)?;
        day.clock_out(now, &self.policy, details)?;
        self.repo.save(&day)?;
        tracing::info!(employee = self.employee(), date = %day.date, status = %day.status(), "clocked out");

        let weekly = match self.refresh_weekly_summary(now) {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(error = %e, "weekly overtime summary not updated");
                None
            }
        };

        Ok(ClockOutOutcome { day, weekly })
    }

    /// Recomputes the summary for the week containing `now` and stores it.
    pub fn refresh_weekly_summary(&mut self, now: NaiveDateTime) -> Result<WeeklyOvertimeSummary> {
        let (start, end) = week_bounds(now.date());
        let days = self.repo.fetch_range(start, end)?;
        let summary = compute_weekly_summary(now, &days, &self.policy);
        self.repo.save_weekly_summary(&summary)?;
        Ok(summary)
    }

    /// Summary written by the latest clock-out.
    pub fn stored_weekly_summary(&self) -> Result<Option<WeeklyOvertimeSummary>> {
        self.repo.fetch_weekly_summary()
    }

    /// Every record in the calendar month containing `date`.
    pub fn month(&self, date: NaiveDate) -> Result<Vec<AttendanceDay>> {
        let (start, end) = month_bounds(date);
        self.repo.fetch_range(start, end)
    }

    /// Records of the Sunday-to-Saturday week containing `date`.
    pub fn week(&self, date: NaiveDate) -> Result<Vec<AttendanceDay>> {
        let (start, end) = week_bounds(date);
        self.repo.fetch_range(start, end)
    }

    /// Recomputes the week containing `date` without storing it.
    pub fn week_summary(&self, date: NaiveDate, now: NaiveDateTime) -> Result<(Vec<AttendanceDay>, WeeklyOvertimeSummary)> {
        let days = self.week(date)?;
        let summary = WeeklyOvertimeSummary {
            last_updated: now,
            ..compute_weekly_summary(date.and_time(now.time()), &days, &self.policy)
        };
        Ok((days, summary))
    }

    pub fn delete(&mut self, date: NaiveDate) -> Result<()> {
        self.repo.delete(date)?;
        tracing::info!(employee = self.employee(), %date, "attendance record deleted");
        Ok(())
    }
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    (start, end)
}
