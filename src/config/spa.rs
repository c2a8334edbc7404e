//! Spa tariff and capacity configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Money;
use crate::domain::ticket::Tariff;

/// Spa configuration
///
/// Amounts are configured in euro cents so the values survive the trip
/// through environment variables without decimal parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaConfig {
    /// Number of spaces the spa can hold
    #[serde(default = "default_total_capacity")]
    pub total_capacity: u32,

    /// Hours covered by the fixed entry price
    #[serde(default = "default_fixed_hours")]
    pub fixed_hours: i64,

    /// Fixed entry price in euro cents
    #[serde(default = "default_fixed_price_cents")]
    pub fixed_price_cents: i64,

    /// Rate per extra hour in euro cents
    #[serde(default = "default_hourly_rate_cents")]
    pub hourly_rate_cents: i64,

    /// Minutes a payment stays valid for exit
    #[serde(default = "default_grace_period_minutes")]
    pub grace_period_minutes: i64,
}

impl SpaConfig {
    /// Build the domain tariff from the configured values
    pub fn tariff(&self) -> Tariff {
        Tariff {
            total_capacity: self.total_capacity,
            fixed_hours: self.fixed_hours,
            fixed_price: Money::from_cents(self.fixed_price_cents),
            hourly_rate: Money::from_cents(self.hourly_rate_cents),
            grace_period_minutes: self.grace_period_minutes,
        }
    }

    /// Validate spa configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_capacity == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        if self.fixed_hours < 0 {
            return Err(ValidationError::InvalidFixedHours);
        }
        if self.fixed_price_cents < 0 {
            return Err(ValidationError::NegativeAmount("fixed_price_cents"));
        }
        if self.hourly_rate_cents < 0 {
            return Err(ValidationError::NegativeAmount("hourly_rate_cents"));
        }
        if self.grace_period_minutes < 0 {
            return Err(ValidationError::InvalidGracePeriod);
        }
        Ok(())
    }
}

impl Default for SpaConfig {
    fn default() -> Self {
        Self {
            total_capacity: default_total_capacity(),
            fixed_hours: default_fixed_hours(),
            fixed_price_cents: default_fixed_price_cents(),
            hourly_rate_cents: default_hourly_rate_cents(),
            grace_period_minutes: default_grace_period_minutes(),
        }
    }
}

// The defaults mirror the house tariff so an unconfigured deployment
// behaves exactly like Tariff::default().

fn default_total_capacity() -> u32 {
    Tariff::default().total_capacity
}

fn default_fixed_hours() -> i64 {
    Tariff::default().fixed_hours
}

fn default_fixed_price_cents() -> i64 {
    Tariff::default().fixed_price.as_cents()
}

fn default_hourly_rate_cents() -> i64 {
    Tariff::default().hourly_rate.as_cents()
}

fn default_grace_period_minutes() -> i64 {
    Tariff::default().grace_period_minutes
}
