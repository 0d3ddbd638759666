//! Core library modules.
//!
//! ## Features
//!
//! - **Calculation**: `formatter`, `policy`, `timesheet`
//! - **Day Records**: `attendance` state machine, `tracker` workflow
//! - **Infrastructure**: `config`, `data_storage`, `messages`
//! - **Output**: `view`
//!
//! ## Usage
//!
//! ```rust
//! use punchclock::libs::policy::WorkPolicy;
//! use punchclock::libs::timesheet::compute_clock_out;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
//! let sheet = compute_clock_out(
//!     day.and_hms_opt(18, 0, 0).unwrap(),
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     3_600_000,
//!     &WorkPolicy::default(),
//! );
//! assert_eq!(sheet.actual_work_hours, 8.0);
//! ```

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod policy;
pub mod timesheet;
pub mod tracker;
pub mod view;
