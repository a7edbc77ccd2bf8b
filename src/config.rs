//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; stdout stays reserved for the conversation.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_WINDOW_DAYS;
use chrono::NaiveDate;
use std::env;

/// Longest accepted reminder window.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Configuration for the contact book shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Upper bound of the birthday reminder window in days (default: 7)
    pub birthday_window_days: i64,

    /// Fixed "today" for scripted runs; `None` uses the system clock
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `BIRTHDAY_WINDOW_DAYS`: Reminder window in days, 0-366 (default: 7)
    /// - `CONTACT_BOOK_TODAY`: Override of today's date as `DD.MM.YYYY`
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(0..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;

        Ok(Config {
            log_level,
            birthday_window_days,
            today,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `DD.MM.YYYY` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::parse(&val)
                .map(|parsed| Some(parsed.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a {} date, got: {}", BIRTHDAY_FORMAT, val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            today: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["LOG_LEVEL", "BIRTHDAY_WINDOW_DAYS", "CONTACT_BOOK_TODAY"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.birthday_window_days, 7);
        assert!(config.today.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("CONTACT_BOOK_TODAY", "10.03.2024");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_negative_window() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "-1");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_invalid_today() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_TODAY", "2024-03-10");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_TODAY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_i64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_I64", "42");

        assert_eq!(Config::parse_env_i64("TEST_I64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_i64("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_i64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_I64_INVALID", "not-a-number");

        assert!(Config::parse_env_i64("TEST_I64_INVALID", 10).is_err());
    }
}
