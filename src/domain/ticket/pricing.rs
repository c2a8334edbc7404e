//! Duration-based pricing rules.
//!
//! A visit costs the fixed price for up to `fixed_hours` hours; every
//! started hour beyond that bills at the hourly rate. Overstaying the grace
//! window after paying accrues a penalty at the same hourly rate.

use crate::domain::foundation::{Money, Timestamp};

use super::tariff::Tariff;

const SECS_PER_HOUR: i64 = 3600;

/// Billable duration between entry and a reference instant, in whole hours.
///
/// Any started hour counts in full. A reference at or before entry clamps
/// to zero hours.
pub fn billable_hours(entry_time: &Timestamp, reference_time: &Timestamp) -> i64 {
    let secs = reference_time
        .duration_since(entry_time)
        .num_seconds()
        .max(0);
    (secs + SECS_PER_HOUR - 1) / SECS_PER_HOUR
}

/// Stay price between entry and a reference instant.
pub fn stay_price(tariff: &Tariff, entry_time: &Timestamp, reference_time: &Timestamp) -> Money {
    let hours = billable_hours(entry_time, reference_time);
    if hours <= tariff.fixed_hours {
        tariff.fixed_price
    } else {
        tariff.fixed_price + tariff.hourly_rate.times(hours - tariff.fixed_hours)
    }
}

/// Penalty owed when the grace window has lapsed since payment.
///
/// Each started hour past the window bills at the hourly rate. Calls made
/// while the window is still open clamp to zero.
pub fn overstay_penalty(tariff: &Tariff, paid_at: &Timestamp, now: &Timestamp) -> Money {
    let elapsed_secs = now.duration_since(paid_at).num_seconds();
    let over_secs = elapsed_secs - tariff.grace_period_secs();
    let penalty_hours = (over_secs + SECS_PER_HOUR - 1) / SECS_PER_HOUR;
    tariff.hourly_rate.times(penalty_hours).clamp_non_negative()
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn entry() -> Timestamp {
        Timestamp::from_unix_secs(1_700_000_000)
    }

    proptest! {
        /// Property: the quoted price never drops below the fixed price.
        #[test]
        fn prop_price_never_below_fixed(minutes in 0i64..100_000) {
            let tariff = Tariff::default();
            let price = stay_price(&tariff, &entry(), &entry().plus_minutes(minutes));
            prop_assert!(price >= tariff.fixed_price);
        }

        /// Property: staying longer never costs less.
        #[test]
        fn prop_price_monotonic_in_duration(a in 0i64..100_000, b in 0i64..100_000) {
            let tariff = Tariff::default();
            let (shorter, longer) = if a <= b { (a, b) } else { (b, a) };
            let price_shorter = stay_price(&tariff, &entry(), &entry().plus_minutes(shorter));
            let price_longer = stay_price(&tariff, &entry(), &entry().plus_minutes(longer));
            prop_assert!(price_shorter <= price_longer);
        }

        /// Property: every stay inside the fixed window costs exactly the
        /// fixed price.
        #[test]
        fn prop_fixed_window_is_flat(secs in 0i64..=2 * 3600) {
            let tariff = Tariff::default();
            let price = stay_price(&tariff, &entry(), &entry().plus_secs(secs));
            prop_assert_eq!(price, tariff.fixed_price);
        }

        /// Property: the penalty is never negative, wherever the clock sits
        /// relative to the grace window.
        #[test]
        fn prop_penalty_never_negative(offset_secs in -100_000i64..100_000) {
            let tariff = Tariff::default();
            let paid_at = entry();
            let penalty = overstay_penalty(&tariff, &paid_at, &paid_at.plus_secs(offset_secs));
            prop_assert!(penalty >= Money::ZERO);
        }
    }
}
