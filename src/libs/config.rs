//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Both sections are optional; a missing file or section
//! falls back to defaults so the tool works without any setup.
//!
//! ```json
//! {
//!   "employee": { "id": "ana" },
//!   "policy": {
//!     "standard_hours": 8.0,
//!     "overtime_multiplier": 1.25,
//!     "break_deduction": true,
//!     "round_to": 2,
//!     "late_threshold_minutes": 15,
//!     "undertime_threshold_hours": 7.5,
//!     "expected_start": "09:00"
//!   }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchclock::libs::config::Config;
//!
//! let config = Config::read()?;
//! let policy = config.work_policy()?;
//! println!("{} works {}h a day", config.employee_id(), policy.standard_hours);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::{DataStorage, DEFAULT_EMPLOYEE};
use crate::libs::messages::Message;
use crate::libs::policy::WorkPolicy;
use crate::msg_print;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Who the attendance records belong to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmployeeConfig {
    pub id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<WorkPolicy>,
}

impl Config {
    /// Loads the configuration, or defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| format!("invalid config file {}", config_file_path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Employee the records are stored under.
    pub fn employee_id(&self) -> &str {
        self.employee.as_ref().map_or(DEFAULT_EMPLOYEE, |e| e.id.as_str())
    }

    /// The configured policy after validation, or the default policy.
    pub fn work_policy(&self) -> Result<WorkPolicy> {
        let policy = self.policy.clone().unwrap_or_default();
        policy.validate().context("invalid work policy in config")?;
        Ok(policy)
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleEmployee);
        let id: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeeId.to_string())
            .default(config.employee_id().to_string())
            .interact_text()?;
        config.employee = Some(EmployeeConfig { id });

        let edit_policy = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptEditPolicy.to_string())
            .default(config.policy.is_none())
            .interact()?;
        if !edit_policy {
            return Ok(config);
        }

        msg_print!(Message::ConfigModulePolicy);
        let default = config.policy.clone().unwrap_or_default();
        let expected_start: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptExpectedStart.to_string())
            .default(default.expected_start.format("%H:%M").to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                NaiveTime::parse_from_str(input, "%H:%M")
                    .map(|_| ())
                    .map_err(|_| Message::InvalidTimeFormat.to_string())
            })
            .interact_text()?;

        let policy = WorkPolicy {
            standard_hours: Input::with_theme(&theme)
                .with_prompt(Message::PromptStandardHours.to_string())
                .default(default.standard_hours)
                .interact_text()?,
            overtime_multiplier: Input::with_theme(&theme)
                .with_prompt(Message::PromptOvertimeMultiplier.to_string())
                .default(default.overtime_multiplier)
                .interact_text()?,
            break_deduction: Confirm::with_theme(&theme)
                .with_prompt(Message::PromptBreakDeduction.to_string())
                .default(default.break_deduction)
                .interact()?,
            round_to: Input::with_theme(&theme)
                .with_prompt(Message::PromptRoundTo.to_string())
                .default(default.round_to)
                .interact_text()?,
            late_threshold_minutes: Input::with_theme(&theme)
                .with_prompt(Message::PromptLateThreshold.to_string())
                .default(default.late_threshold_minutes)
                .interact_text()?,
            undertime_threshold_hours: Input::with_theme(&theme)
                .with_prompt(Message::PromptUndertimeThreshold.to_string())
                .default(default.undertime_threshold_hours)
                .interact_text()?,
            expected_start: NaiveTime::parse_from_str(&expected_start, "%H:%M")?,
        };
        policy.validate()?;
        config.policy = Some(policy);

        Ok(config)
    }
}
