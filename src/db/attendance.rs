//! Attendance records on top of a [`KeyValueStore`].
//!
//! Layout:
//!
//! ```text
//! attendance/{employee}/{YYYY-MM-DD}   one AttendanceDay per date
//! overtime_summary/{employee}/weekly   latest WeeklyOvertimeSummary
//! ```

use crate::db::store::{FieldQuery, KeyValueStore, SqliteStore};
use crate::libs::attendance::{AttendanceDay, AttendanceError};
use crate::libs::timesheet::WeeklyOvertimeSummary;
use anyhow::{Context, Result};
use chrono::NaiveDate;

const ATTENDANCE_ROOT: &str = "attendance";
const OVERTIME_ROOT: &str = "overtime_summary";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Attendance<S: KeyValueStore> {
    store: S,
    employee: String,
}

impl Attendance<SqliteStore> {
    /// Repository over the on-disk database.
    pub fn new(employee: &str) -> Result<Self> {
        Ok(Self::with_store(SqliteStore::new()?, employee))
    }
}

impl<S: KeyValueStore> Attendance<S> {
    pub fn with_store(store: S, employee: &str) -> Self {
        Self {
            store,
            employee: employee.to_string(),
        }
    }

    pub fn employee(&self) -> &str {
        &self.employee
    }

    fn collection(&self) -> String {
        format!("{}/{}", ATTENDANCE_ROOT, self.employee)
    }

    fn day_path(&self, date: NaiveDate) -> String {
        format!("{}/{}", self.collection(), date.format(DATE_FORMAT))
    }

    fn weekly_path(&self) -> String {
        format!("{}/{}/weekly", OVERTIME_ROOT, self.employee)
    }

    pub fn fetch(&self, date: NaiveDate) -> Result<Option<AttendanceDay>> {
        let path = self.day_path(date);
        match self.store.read(&path)? {
            Some(value) => {
                let day = serde_json::from_value(value).with_context(|| format!("malformed record at {}", path))?;
                Ok(Some(day))
            }
            None => Ok(None),
        }
    }

    /// Stores a new day. Fails if the date already has a record.
    pub fn insert(&mut self, day: &AttendanceDay) -> Result<()> {
        if self.store.read(&self.day_path(day.date))?.is_some() {
            return Err(AttendanceError::AlreadyClockedIn(day.date).into());
        }
        self.save(day)
    }

    /// Overwrites the record for `day.date`.
    pub fn save(&mut self, day: &AttendanceDay) -> Result<()> {
        let value = serde_json::to_value(day)?;
        self.store.write(&self.day_path(day.date), &value)
    }

    pub fn delete(&mut self, date: NaiveDate) -> Result<()> {
        let path = self.day_path(date);
        if self.store.read(&path)?.is_none() {
            return Err(AttendanceError::NotClockedIn(date).into());
        }
        self.store.remove(&path)
    }

    /// Days between `start` and `end` inclusive, in date order.
    pub fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<AttendanceDay>> {
        let query = FieldQuery::Between {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        };

        let mut days = Vec::new();
        for (path, value) in self.store.query_by_field(&self.collection(), "date", &query)? {
            match serde_json::from_value::<AttendanceDay>(value) {
                Ok(day) => days.push(day),
                Err(e) => tracing::warn!(%path, error = %e, "skipping malformed attendance record"),
            }
        }
        Ok(days)
    }

    pub fn save_weekly_summary(&mut self, summary: &WeeklyOvertimeSummary) -> Result<()> {
        let value = serde_json::to_value(summary)?;
        self.store.write(&self.weekly_path(), &value)
    }

    pub fn fetch_weekly_summary(&self) -> Result<Option<WeeklyOvertimeSummary>> {
        self.store
            .read(&self.weekly_path())?
            .map(serde_json::from_value)
            .transpose()
            .context("malformed weekly overtime summary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::libs::attendance::{ClockInDetails, ClockOutDetails};
    use crate::libs::policy::WorkPolicy;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn day(d: u32) -> AttendanceDay {
        AttendanceDay::clock_in(date(d).and_hms_opt(9, 0, 0).unwrap(), ClockInDetails::default())
    }

    #[test]
    fn insert_rejects_duplicate_dates() {
        let mut repo = Attendance::with_store(MemoryStore::new(), "ana");
        repo.insert(&day(12)).unwrap();

        let err = repo.insert(&day(12)).unwrap_err();
        assert_eq!(err.downcast_ref::<AttendanceError>(), Some(&AttendanceError::AlreadyClockedIn(date(12))));
        assert_eq!(repo.fetch(date(12)).unwrap(), Some(day(12)));
    }

    #[test]
    fn employees_are_kept_apart() {
        let mut store = MemoryStore::new();
        store.write("attendance/bo/2025-03-12", &serde_json::to_value(day(12)).unwrap()).unwrap();

        let repo = Attendance::with_store(store, "ana");
        assert_eq!(repo.fetch(date(12)).unwrap(), None);
        assert!(repo.fetch_range(date(1), date(31)).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_day_fails() {
        let mut repo = Attendance::with_store(MemoryStore::new(), "ana");
        assert!(repo.delete(date(12)).is_err());

        repo.insert(&day(12)).unwrap();
        repo.delete(date(12)).unwrap();
        assert_eq!(repo.fetch(date(12)).unwrap(), None);
    }

    #[test]
    fn range_skips_malformed_records() {
        let mut store = MemoryStore::new();
        store
            .write("attendance/ana/2025-03-11", &serde_json::json!({"date": "2025-03-11", "clockIn": 42}))
            .unwrap();
        let mut repo = Attendance::with_store(store, "ana");
        repo.insert(&day(12)).unwrap();

        let days = repo.fetch_range(date(9), date(15)).unwrap();
        assert_eq!(days, vec![day(12)]);
    }

    #[test]
    fn closed_day_with_unknown_status_is_malformed() {
        let mut closed = day(13);
        closed
            .clock_out(date(13).and_hms_opt(19, 0, 0).unwrap(), &WorkPolicy::default(), ClockOutDetails::default())
            .unwrap();
        let mut value = serde_json::to_value(&closed).unwrap();
        value["status"] = "Bogus".into();

        let mut store = MemoryStore::new();
        store.write("attendance/ana/2025-03-13", &value).unwrap();
        let mut repo = Attendance::with_store(store, "ana");
        repo.insert(&day(12)).unwrap();

        assert!(repo.fetch(date(13)).is_err());
        assert_eq!(repo.fetch_range(date(9), date(15)).unwrap(), vec![day(12)]);
    }
}
