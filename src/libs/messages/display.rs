use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleEmployee => "Employee".to_string(),
            Message::ConfigModulePolicy => "Work policy".to_string(),
            Message::PromptEmployeeId => "Employee id".to_string(),
            Message::PromptEditPolicy => "Edit the work policy?".to_string(),
            Message::PromptExpectedStart => "Expected start of day (HH:MM)".to_string(),
            Message::PromptStandardHours => "Standard hours per day".to_string(),
            Message::PromptOvertimeMultiplier => "Overtime multiplier".to_string(),
            Message::PromptBreakDeduction => "Deduct break time from worked time?".to_string(),
            Message::PromptRoundTo => "Decimal places for hour figures".to_string(),
            Message::PromptLateThreshold => "Late threshold (minutes)".to_string(),
            Message::PromptUndertimeThreshold => "Significant undertime below (hours)".to_string(),
            Message::InvalidTimeFormat => "Expected a time like 09:00".to_string(),

            // === CLOCK IN / OUT ===
            Message::ClockedIn(time) => format!("Clocked in at {}", time),
            Message::ClockedOut(time) => format!("Clocked out at {}", time),
            Message::LateArrival(minutes) => format!("Late arrival: {} min after the expected start", minutes),
            Message::PromptLateReason => "Reason for arriving late".to_string(),
            Message::PromptWorkSummary => "What did you work on today?".to_string(),
            Message::NotClockedInToday => "You have not clocked in today".to_string(),
            Message::AlreadyClockedOut(time) => format!("Already clocked out today at {}", time),
            Message::EndBreakBeforeClockOut => "You are on a break. End it before clocking out".to_string(),
            Message::OvertimeNeedsApproval => "Overtime recorded; it needs manager approval".to_string(),
            Message::WeeklySummaryNotUpdated => "Clock-out saved, but the weekly overtime summary could not be updated".to_string(),

            // === BREAKS ===
            Message::BreakStarted(kind, minutes) => format!("{} break started ({} min)", kind, minutes),
            Message::BreakEnded(duration) => format!("Break ended after {}", duration),
            Message::BreakExtended(minutes) => format!("This break ran longer than the planned {} min", minutes),
            Message::PromptExtendedReason => "Reason for the extended break".to_string(),
            Message::OnBreakSince(kind, time) => format!("On {} break since {}", kind, time),

            // === RECORDS ===
            Message::StatusHeader(date) => format!("Attendance for {}", date),
            Message::HistoryHeader(month) => format!("Attendance history for {}", month),
            Message::WeekHeader(start, end) => format!("Week {} to {}", start, end),
            Message::ClockOutSummaryHeader => "Clock-out summary".to_string(),
            Message::NoRecordForDate(date) => format!("No attendance record for {}", date),
            Message::NoRecordsForMonth(month) => format!("No attendance records for {}", month),
            Message::NoRecordsForWeek => "No attendance records this week".to_string(),
            Message::NoStoredWeeklySummary => "No weekly overtime summary stored yet".to_string(),
            Message::ConfirmDeleteDay(date) => format!("Delete the attendance record for {}?", date),
            Message::DayDeleted(date) => format!("Attendance record for {} deleted", date),
            Message::DeleteCancelled => "Nothing deleted".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),
            Message::InvalidMonth(input) => format!("Invalid month '{}', expected YYYY-MM", input),

            // === WATCH ===
            Message::WatchStarted => "Live timers running. Press Ctrl-C to stop".to_string(),
            Message::WatchStopped => "Stopped".to_string(),
            Message::WatchDayClosed => "The day is clocked out".to_string(),

            // === MIGRATIONS ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };
        write!(f, "{}", s)
    }
}
