//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Total capacity must be at least 1")]
    InvalidCapacity,

    #[error("Fixed hours must not be negative")]
    InvalidFixedHours,

    #[error("Grace period must not be negative")]
    InvalidGracePeriod,

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(&'static str),

    #[error("Storage data directory must not be empty")]
    MissingDataDir,
}
