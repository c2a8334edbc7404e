//! Payment validity rules.
//!
//! A payment authorizes exit only while the grace window is open.

use crate::domain::foundation::Timestamp;

use super::aggregate::Ticket;
use super::tariff::Tariff;

/// Returns true while a payment made at `paid_at` still authorizes exit.
///
/// The window is inclusive: a payment is still valid at exactly
/// `grace_period_minutes` elapsed.
pub fn payment_within_grace(tariff: &Tariff, paid_at: &Timestamp, now: &Timestamp) -> bool {
    let elapsed_secs = now.duration_since(paid_at).num_seconds();
    elapsed_secs <= tariff.grace_period_secs()
}

/// Returns true when the ticket's recorded payment currently authorizes
/// exit. Always false for tickets that never paid.
pub fn has_valid_payment(tariff: &Tariff, ticket: &Ticket, now: &Timestamp) -> bool {
    match ticket.paid_at {
        Some(paid_at) => payment_within_grace(tariff, &paid_at, now),
        None => false,
    }
}
