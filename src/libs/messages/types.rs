/// Every user-facing text the application prints or prompts with.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION ===
    ConfigSaved,
    ConfigModuleEmployee,
    ConfigModulePolicy,
    PromptEmployeeId,
    PromptEditPolicy,
    PromptExpectedStart,
    PromptStandardHours,
    PromptOvertimeMultiplier,
    PromptBreakDeduction,
    PromptRoundTo,
    PromptLateThreshold,
    PromptUndertimeThreshold,
    InvalidTimeFormat,

    // === CLOCK IN / OUT ===
    ClockedIn(String),  // time
    ClockedOut(String), // time
    LateArrival(i64),   // minutes
    PromptLateReason,
    PromptWorkSummary,
    NotClockedInToday,
    AlreadyClockedOut(String), // time
    EndBreakBeforeClockOut,
    OvertimeNeedsApproval,
    WeeklySummaryNotUpdated,

    // === BREAKS ===
    BreakStarted(String, u32), // kind, expected minutes
    BreakEnded(String),        // duration
    BreakExtended(u32),        // expected minutes
    PromptExtendedReason,
    OnBreakSince(String, String), // kind, time

    // === RECORDS ===
    StatusHeader(String),               // date
    HistoryHeader(String),              // month
    WeekHeader(String, String),         // start, end
    ClockOutSummaryHeader,
    NoRecordForDate(String),
    NoRecordsForMonth(String),
    NoRecordsForWeek,
    NoStoredWeeklySummary,
    ConfirmDeleteDay(String),
    DayDeleted(String),
    DeleteCancelled,
    InvalidDate(String),
    InvalidMonth(String),

    // === WATCH ===
    WatchStarted,
    WatchStopped,
    WatchDayClosed,

    // === MIGRATIONS ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
