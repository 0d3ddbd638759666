//! Work policy configuration consumed by the timesheet calculator.
//!
//! The policy is plain data: the calculator receives it by reference and
//! never reads it from a global. It is persisted as the `policy` section of
//! `config.json`; missing fields fall back to the defaults below.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported when a policy cannot produce meaningful timesheets.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("standard hours must be a positive number, got {0}")]
    NonPositiveStandardHours(f64),
    #[error("overtime multiplier must not be negative, got {0}")]
    NegativeOvertimeMultiplier(f64),
    #[error("undertime threshold must not be negative, got {0}")]
    NegativeUndertimeThreshold(f64),
    #[error("late threshold must not be negative, got {0} minutes")]
    NegativeLateThreshold(i64),
    #[error("round_to must be at most 15 decimal places, got {0}")]
    RoundToOutOfRange(u32),
}

/// Decimal places beyond which an `f64` hour figure carries no information.
pub const MAX_ROUND_TO: u32 = 15;

/// Static work-policy configuration.
///
/// | field | default |
/// |---|---|
/// | `standard_hours` | 8.0 |
/// | `overtime_multiplier` | 1.25 |
/// | `break_deduction` | true |
/// | `round_to` | 2 |
/// | `late_threshold_minutes` | 15 |
/// | `undertime_threshold_hours` | 7.5 |
/// | `expected_start` | 09:00 |
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WorkPolicy {
    /// Baseline workday length in hours; no overtime accrues below it.
    pub standard_hours: f64,
    /// Multiplier applied to overtime hours.
    pub overtime_multiplier: f64,
    /// Subtract completed break time from elapsed time before computing hours.
    pub break_deduction: bool,
    /// Decimal places for every hour figure.
    pub round_to: u32,
    /// Minutes after `expected_start` considered late.
    pub late_threshold_minutes: i64,
    /// Hours below which a day is "Significant Undertime".
    pub undertime_threshold_hours: f64,
    /// Expected wall-clock start of the working day.
    #[serde(with = "hh_mm")]
    pub expected_start: NaiveTime,
}

impl Default for WorkPolicy {
    fn default() -> Self {
        WorkPolicy {
            standard_hours: 8.0,
            overtime_multiplier: 1.25,
            break_deduction: true,
            round_to: 2,
            late_threshold_minutes: 15,
            undertime_threshold_hours: 7.5,
            expected_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }
}

impl WorkPolicy {
    /// Checks the policy for values the calculator cannot make sense of.
    ///
    /// The calculator itself stays total and never calls this; it is run
    /// when the configuration is loaded or edited.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(self.standard_hours.is_finite() && self.standard_hours > 0.0) {
            return Err(PolicyError::NonPositiveStandardHours(self.standard_hours));
        }
        if !(self.overtime_multiplier.is_finite() && self.overtime_multiplier >= 0.0) {
            return Err(PolicyError::NegativeOvertimeMultiplier(self.overtime_multiplier));
        }
        if !(self.undertime_threshold_hours.is_finite() && self.undertime_threshold_hours >= 0.0) {
            return Err(PolicyError::NegativeUndertimeThreshold(self.undertime_threshold_hours));
        }
        if self.round_to > MAX_ROUND_TO {
            return Err(PolicyError::RoundToOutOfRange(self.round_to));
        }
        if self.late_threshold_minutes < 0 {
            return Err(PolicyError::NegativeLateThreshold(self.late_threshold_minutes));
        }
        if self.undertime_threshold_hours > self.standard_hours {
            tracing::warn!(
                undertime = self.undertime_threshold_hours,
                standard = self.standard_hours,
                "undertime threshold exceeds standard hours; plain \"Undertime\" can never be reported"
            );
        }
        Ok(())
    }
}

/// `NaiveTime` as `"HH:MM"`, accepting `"HH:MM:SS"` on input.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
