//! Operation outcomes returned by the lifecycle service.
//!
//! Mirrors the desk workflows: issuance confirmations, price quotes,
//! payment receipts, exit decisions, and the capacity report. Deny states
//! the desk is expected to resolve (lapsed grace, owed penalty, missing
//! payment) are ordinary variants here, not errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Barcode, Money, Timestamp};

use super::aggregate::Ticket;
use super::payment_method::PaymentMethod;

/// Outcome of issuing a ticket at the entrance gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedTicket {
    pub ticket: Ticket,

    /// Free spaces remaining after this issuance.
    pub free_spaces: u32,
}

impl fmt::Display for IssuedTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket {} issued. {} space(s) left.",
            self.ticket.barcode, self.free_spaces
        )
    }
}

/// Proof of settlement shown when quoting an already-paid ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub barcode: Barcode,
    pub customer_name: String,
    pub entry_time: Timestamp,
    pub paid_at: Timestamp,
    pub payment_method: PaymentMethod,

    /// Stay price at payment time plus every settled penalty.
    pub total_paid: Money,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Barcode: {}", self.barcode)?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "Entry: {}", self.entry_time)?;
        writeln!(f, "Paid at: {}", self.paid_at)?;
        writeln!(f, "Method: {}", self.payment_method.as_str().to_uppercase())?;
        writeln!(f, "Amount paid: {}", self.total_paid)?;
        write!(f, "Status: PAID")
    }
}

/// Quoted amount for a ticket at the pay desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceQuote {
    /// Already settled; nothing due.
    Paid { receipt: Receipt },

    /// The grace window lapsed earlier; the latest penalty entry is due.
    PenaltyDue { amount: Money },

    /// Fresh stay price for the hours elapsed so far.
    Due { amount: Money, hours: i64 },
}

impl PriceQuote {
    /// Amount the visitor would pay right now.
    pub fn amount_due(&self) -> Money {
        match self {
            PriceQuote::Paid { .. } => Money::ZERO,
            PriceQuote::PenaltyDue { amount } => *amount,
            PriceQuote::Due { amount, .. } => *amount,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PriceQuote::Paid { .. })
    }

    pub fn is_penalty(&self) -> bool {
        matches!(self, PriceQuote::PenaltyDue { .. })
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceQuote::Paid { .. } => write!(f, "Already paid. Nothing due."),
            PriceQuote::PenaltyDue { amount } => write!(f, "Penalty due: {}.", amount),
            PriceQuote::Due { amount, hours } => {
                write!(f, "Price for {} hour(s): {}.", hours, amount)
            }
        }
    }
}

/// Whether a payment settled the stay or an accrued penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Stay,
    Penalty,
}

/// Confirmation returned after a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub barcode: Barcode,
    pub amount_paid: Money,

    /// Always zero; a payment settles the full amount due.
    pub new_balance: Money,

    pub payment_method: PaymentMethod,
    pub paid_at: Timestamp,

    /// When the grace window for this payment closes.
    pub grace_expires_at: Timestamp,

    pub kind: PaymentKind,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PaymentKind::Stay => write!(
                f,
                "Payment successful! {} paid by {}. Exit before {}.",
                self.amount_paid,
                self.payment_method.label(),
                self.grace_expires_at
            ),
            PaymentKind::Penalty => write!(
                f,
                "Penalty of {} has been paid. Exit before {}. Thank you!",
                self.amount_paid, self.grace_expires_at
            ),
        }
    }
}

/// Decision returned by the exit gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExitDecision {
    /// Gate opens; the visit is over.
    Approved { exit_time: Timestamp },

    /// Payment lapsed while the visitor lingered; a fresh penalty was
    /// recorded on the ticket.
    GraceExpired { penalty: Money, minutes_expired: i64 },

    /// An earlier penalty is still unpaid.
    PenaltyOwed { penalty: Money },

    /// Never paid; the full stay price is due.
    PaymentRequired { amount_due: Money },
}

impl ExitDecision {
    /// True only when the gate opens.
    pub fn can_exit(&self) -> bool {
        matches!(self, ExitDecision::Approved { .. })
    }
}

impl fmt::Display for ExitDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitDecision::Approved { .. } => write!(f, "Exit approved. Have a nice day!"),
            ExitDecision::GraceExpired {
                penalty,
                minutes_expired,
            } => write!(
                f,
                "Payment expired {} minute(s) ago. A penalty of {} must be paid before exit.",
                minutes_expired, penalty
            ),
            ExitDecision::PenaltyOwed { penalty } => write!(
                f,
                "A penalty of {} is outstanding and must be paid before exit.",
                penalty
            ),
            ExitDecision::PaymentRequired { amount_due } => {
                write!(f, "Payment of {} required before exit.", amount_due)
            }
        }
    }
}

/// Occupancy snapshot for the front desk display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub total: u32,
    pub occupied: u32,
    pub free: u32,
}

impl CapacityReport {
    /// Builds a report, saturating `free` at zero.
    pub fn new(total: u32, occupied: u32) -> Self {
        Self {
            total,
            occupied,
            free: total.saturating_sub(occupied),
        }
    }

    /// Rounded occupancy percentage.
    pub fn percent_occupied(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.occupied as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// True when no spaces remain.
    pub fn is_full(&self) -> bool {
        self.free == 0
    }
}
