//! House tariff for the spa floor.
//!
//! Groups the capacity and pricing parameters the lifecycle rules run on.
//! The production tariff is loaded from configuration; tests construct one
//! directly.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// Capacity and pricing parameters for one spa floor.
///
/// # House Defaults
///
/// | Parameter | Default |
/// |-----------|---------|
/// | Total capacity | 50 spaces |
/// | Fixed price | €10 for up to 2 hours |
/// | Hourly rate | €5 per started extra hour |
/// | Grace period | 15 minutes |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Number of ticket slots on the floor.
    pub total_capacity: u32,

    /// Hours covered by the fixed price.
    pub fixed_hours: i64,

    /// Flat fee covering up to `fixed_hours` hours.
    pub fixed_price: Money,

    /// Fee per started hour beyond `fixed_hours`, and per started hour of
    /// overstay past the grace window.
    pub hourly_rate: Money,

    /// How long a payment authorizes exit, in minutes.
    pub grace_period_minutes: i64,
}

impl Tariff {
    /// Grace window length in seconds.
    pub fn grace_period_secs(&self) -> i64 {
        self.grace_period_minutes * 60
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            total_capacity: 50,
            fixed_hours: 2,
            fixed_price: Money::from_euros(10),
            hourly_rate: Money::from_euros(5),
            grace_period_minutes: 15,
        }
    }
}
