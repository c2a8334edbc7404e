//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SPA_GATE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use spa_gate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Spa capacity: {}", config.spa.total_capacity);
//! ```

mod error;
mod spa;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use spa::SpaConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section carries house defaults, so an unconfigured deployment
/// loads successfully. Load using [`AppConfig::load()`] which reads from
/// environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Spa configuration (capacity, tariff, grace period)
    #[serde(default)]
    pub spa: SpaConfig,

    /// Storage configuration (ticket store location)
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SPA_GATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SPA_GATE__SPA__TOTAL_CAPACITY=50` -> `spa.total_capacity = 50`
    /// - `SPA_GATE__STORAGE__DATA_DIR=...` -> `storage.data_dir = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SPA_GATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.spa.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::Tariff;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("SPA_GATE__SPA__TOTAL_CAPACITY");
        env::remove_var("SPA_GATE__SPA__FIXED_HOURS");
        env::remove_var("SPA_GATE__SPA__FIXED_PRICE_CENTS");
        env::remove_var("SPA_GATE__SPA__HOURLY_RATE_CENTS");
        env::remove_var("SPA_GATE__SPA__GRACE_PERIOD_MINUTES");
        env::remove_var("SPA_GATE__STORAGE__DATA_DIR");
    }

    #[test]
    fn test_load_without_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.spa.tariff(), Tariff::default());
        assert_eq!(config.storage.data_dir, "./data");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SPA_GATE__SPA__TOTAL_CAPACITY", "3");
        env::set_var("SPA_GATE__SPA__GRACE_PERIOD_MINUTES", "30");
        env::set_var("SPA_GATE__STORAGE__DATA_DIR", "/var/lib/spa-gate");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.spa.total_capacity, 3);
        assert_eq!(config.spa.grace_period_minutes, 30);
        assert_eq!(config.storage.data_dir, "/var/lib/spa-gate");
    }

    #[test]
    fn test_custom_tariff_amounts() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SPA_GATE__SPA__FIXED_PRICE_CENTS", "1250");
        env::set_var("SPA_GATE__SPA__HOURLY_RATE_CENTS", "600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let tariff = config.spa.tariff();
        assert_eq!(tariff.fixed_price.as_cents(), 1250);
        assert_eq!(tariff.hourly_rate.as_cents(), 600);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SPA_GATE__SPA__TOTAL_CAPACITY", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
