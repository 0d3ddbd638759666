#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use punchclock::db::store::{KeyValueStore, MemoryStore, SqliteStore};
    use punchclock::libs::attendance::{
        AttendanceError, BreakKind, ClockInDetails, ClockOutDetails, DayState, WorkType,
    };
    use punchclock::libs::policy::WorkPolicy;
    use punchclock::libs::timesheet::WorkStatus;
    use punchclock::libs::tracker::Tracker;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temp dir for the test's duration.
    struct TrackerTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn memory_tracker() -> Tracker<MemoryStore> {
        Tracker::with_store(MemoryStore::new(), "ana", WorkPolicy::default())
    }

    fn work_day<S: KeyValueStore>(tracker: &mut Tracker<S>, day: u32, out: (u32, u32)) {
        tracker.clock_in(at(day, 9, 0), ClockInDetails::default()).unwrap();
        tracker.start_break(at(day, 12, 0), BreakKind::Lunch, 60).unwrap();
        tracker.end_break(at(day, 13, 0), None).unwrap();
        tracker.clock_out(at(day, out.0, out.1), ClockOutDetails::default()).unwrap();
    }

    #[test]
    fn test_full_day_workflow() {
        let mut tracker = memory_tracker();
        let details = ClockInDetails {
            work_type: WorkType::Remote,
            location: Some("home".into()),
            ..ClockInDetails::default()
        };

        tracker.clock_in(at(12, 9, 0), details).unwrap();
        let day = tracker.start_break(at(12, 12, 0), BreakKind::Lunch, 60).unwrap();
        assert_eq!(day.state(), DayState::OnBreak);

        let day = tracker.end_break(at(12, 13, 0), None).unwrap();
        assert_eq!(day.total_break_ms, 3_600_000);

        let outcome = tracker
            .clock_out(
                at(12, 19, 30),
                ClockOutDetails {
                    work_summary: Some("release".into()),
                    notes: None,
                },
            )
            .unwrap();
        let sheet = outcome.day.timesheet.as_ref().unwrap();
        assert_eq!(sheet.actual_work_hours, 9.5);
        assert_eq!(sheet.overtime_hours, 1.5);
        assert_eq!(sheet.overtime_pay_multiplier, 1.88);
        assert_eq!(sheet.status, WorkStatus::Overtime);

        let weekly = outcome.weekly.unwrap();
        assert_eq!(weekly.total_overtime_hours, 1.5);
        assert_eq!(tracker.stored_weekly_summary().unwrap(), Some(weekly));

        let stored = tracker.day(at(12, 0, 0).date()).unwrap().unwrap();
        assert_eq!(stored.work_type, WorkType::Remote);
        assert_eq!(stored.work_summary.as_deref(), Some("release"));
        assert_eq!(stored, outcome.day);
    }

    #[test]
    fn test_second_clock_in_is_rejected() {
        let mut tracker = memory_tracker();
        tracker.clock_in(at(12, 9, 0), ClockInDetails::default()).unwrap();

        let err = tracker.clock_in(at(12, 9, 30), ClockInDetails::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AttendanceError>(),
            Some(&AttendanceError::AlreadyClockedIn(at(12, 0, 0).date()))
        );
        assert_eq!(tracker.day(at(12, 0, 0).date()).unwrap().unwrap().clock_in, at(12, 9, 0));
    }

    #[test]
    fn test_clock_out_rejected_while_on_break() {
        let mut tracker = memory_tracker();
        tracker.clock_in(at(12, 9, 0), ClockInDetails::default()).unwrap();
        tracker.start_break(at(12, 12, 0), BreakKind::Coffee, 15).unwrap();

        let err = tracker.clock_out(at(12, 17, 0), ClockOutDetails::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AttendanceError>(),
            Some(AttendanceError::InvalidTransition { state: DayState::OnBreak, .. })
        ));
        assert_eq!(tracker.day(at(12, 0, 0).date()).unwrap().unwrap().state(), DayState::OnBreak);
    }

    #[test]
    fn test_clock_out_without_clock_in() {
        let mut tracker = memory_tracker();
        let err = tracker.clock_out(at(12, 17, 0), ClockOutDetails::default()).unwrap_err();
        assert!(matches!(err.downcast_ref::<AttendanceError>(), Some(AttendanceError::NotClockedIn(_))));
    }

    #[test]
    fn test_weekly_summary_rescans_the_week() {
        let mut tracker = memory_tracker();
        // Saturday of the previous week
        work_day(&mut tracker, 8, (20, 0));
        work_day(&mut tracker, 10, (19, 30)); // 1.50h overtime
        work_day(&mut tracker, 11, (18, 45)); // 0.75h overtime

        let summary = tracker.stored_weekly_summary().unwrap().unwrap();
        assert_eq!(summary.total_overtime_hours, 2.25);
        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());

        let again = tracker.refresh_weekly_summary(at(11, 18, 45)).unwrap();
        assert_eq!(again, summary);
    }

    #[test]
    fn test_month_and_week_listing() {
        let mut tracker = memory_tracker();
        work_day(&mut tracker, 3, (18, 0));
        work_day(&mut tracker, 12, (18, 0));
        work_day(&mut tracker, 14, (18, 0));

        let month: Vec<_> = tracker
            .month(at(20, 0, 0).date())
            .unwrap()
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(month.len(), 3);
        assert!(month.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(tracker.week(at(12, 0, 0).date()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_allows_clocking_in_again() {
        let mut tracker = memory_tracker();
        tracker.clock_in(at(12, 9, 0), ClockInDetails::default()).unwrap();
        tracker.delete(at(12, 0, 0).date()).unwrap();

        assert!(tracker.day(at(12, 0, 0).date()).unwrap().is_none());
        tracker.clock_in(at(12, 10, 0), ClockInDetails::default()).unwrap();
        assert!(tracker.delete(at(13, 0, 0).date()).is_err());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_records_persist_in_sqlite(_ctx: &mut TrackerTestContext) {
        {
            let mut tracker = Tracker::new("ana", WorkPolicy::default()).unwrap();
            work_day(&mut tracker, 12, (18, 0));
        }

        let tracker = Tracker::new("ana", WorkPolicy::default()).unwrap();
        let day = tracker.day(at(12, 0, 0).date()).unwrap().unwrap();
        assert_eq!(day.status(), WorkStatus::Complete);
        assert_eq!(day.breaks.len(), 1);
        assert!(tracker.stored_weekly_summary().unwrap().is_some());

        let other = Tracker::with_store(SqliteStore::new().unwrap(), "bo", WorkPolicy::default());
        assert!(other.day(at(12, 0, 0).date()).unwrap().is_none());
    }
}
