#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use punchclock::libs::config::{Config, EmployeeConfig, CONFIG_FILE_NAME};
    use punchclock::libs::data_storage::{DataStorage, DEFAULT_EMPLOYEE};
    use punchclock::libs::policy::{PolicyError, WorkPolicy};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Clean data directory per test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.employee_id(), DEFAULT_EMPLOYEE);
        assert_eq!(config.work_policy().unwrap(), WorkPolicy::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            employee: Some(EmployeeConfig { id: "ana".to_string() }),
            policy: Some(WorkPolicy {
                standard_hours: 7.0,
                expected_start: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
                ..WorkPolicy::default()
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.employee_id(), "ana");
        assert_eq!(read_config.work_policy().unwrap().standard_hours, 7.0);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_policy_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "policy": { "overtime_multiplier": 1.5, "expected_start": "08:00" } }"#).unwrap();

        let policy = Config::read().unwrap().work_policy().unwrap();
        assert_eq!(policy.overtime_multiplier, 1.5);
        assert_eq!(policy.expected_start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(policy.standard_hours, 8.0);
        assert_eq!(policy.round_to, 2);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_policy_is_rejected(_ctx: &mut ConfigTestContext) {
        let config = Config {
            employee: None,
            policy: Some(WorkPolicy {
                standard_hours: 0.0,
                ..WorkPolicy::default()
            }),
        };
        config.save().unwrap();

        let err = Config::read().unwrap().work_policy().unwrap_err();
        assert_eq!(
            err.downcast_ref::<PolicyError>(),
            Some(&PolicyError::NonPositiveStandardHours(0.0))
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }
}
