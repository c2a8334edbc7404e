//! Ticket aggregate entity.
//!
//! One ticket per visit. The ticket carries everything the pricing and exit
//! rules need: when the visitor entered, whether and when they paid, and the
//! penalty history accrued by overstaying the grace window.
//!
//! # Design Decisions
//!
//! - **Barcode is the identity**: assigned at issuance, never changes
//! - **Money in cents**: all monetary values stored as i64 cents (not floats)
//! - **Penalty history is append-only**: the last entry is the amount
//!   currently owed
//! - **Exit is terminal**: once `returned_at` is set the ticket never
//!   mutates again

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Barcode, Money, Timestamp};

use super::payment_method::PaymentMethod;
use super::status::TicketStatus;

/// A visitor's pass through the spa.
///
/// # Invariants
///
/// - `barcode` is unique across the repository
/// - `paid_at` is set whenever `is_paid` is true
/// - `is_paid` and an unsettled penalty tail are mutually exclusive
/// - `returned_at`, once set, is never cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, assigned at issuance.
    pub barcode: Barcode,

    /// Free-text visitor label taken at the entrance.
    pub customer_name: String,

    /// When the visitor entered.
    pub entry_time: Timestamp,

    /// Whether the ticket is currently settled.
    pub is_paid: bool,

    /// Most recent successful payment time.
    pub paid_at: Option<Timestamp>,

    /// Method used for the most recent payment.
    pub payment_method: Option<PaymentMethod>,

    /// Exit approval time. Terminal once set.
    pub returned_at: Option<Timestamp>,

    /// Penalty history, append-only. The last entry is the amount owed.
    pub penalty_amounts: Vec<Money>,
}

impl Ticket {
    /// Creates a ticket at the entrance gate.
    ///
    /// New tickets are active and unpaid with an empty penalty history.
    pub fn issue(
        barcode: Barcode,
        customer_name: impl Into<String>,
        entry_time: Timestamp,
    ) -> Self {
        Self {
            barcode,
            customer_name: customer_name.into(),
            entry_time,
            is_paid: false,
            paid_at: None,
            payment_method: None,
            returned_at: None,
            penalty_amounts: Vec::new(),
        }
    }

    /// Returns true while the ticket occupies a capacity slot.
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Returns true once exit has been approved.
    pub fn has_exited(&self) -> bool {
        self.returned_at.is_some()
    }

    /// Returns true when an unpaid penalty entry is outstanding.
    ///
    /// A penalty exists only after a payment lapsed, so `paid_at` must be
    /// set even though `is_paid` is false.
    pub fn owes_penalty(&self) -> bool {
        !self.is_paid && self.paid_at.is_some() && !self.penalty_amounts.is_empty()
    }

    /// Returns the penalty currently owed, if any.
    pub fn current_penalty(&self) -> Option<Money> {
        if self.owes_penalty() {
            self.penalty_amounts.last().copied()
        } else {
            None
        }
    }

    /// Sum of every penalty recorded on this ticket, settled or not.
    pub fn total_penalties(&self) -> Money {
        self.penalty_amounts.iter().copied().sum()
    }

    /// Derives the current position in the visit lifecycle.
    pub fn status(&self) -> TicketStatus {
        if self.has_exited() {
            TicketStatus::Exited
        } else if self.is_paid {
            TicketStatus::ActivePaid
        } else if self.owes_penalty() {
            TicketStatus::GraceExpired
        } else {
            TicketStatus::ActiveUnpaid
        }
    }

    /// Merges a partial update into this ticket.
    ///
    /// Unset patch fields leave the ticket untouched. A penalty entry is
    /// appended, never replaced.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(is_paid) = patch.is_paid {
            self.is_paid = is_paid;
        }
        if let Some(paid_at) = patch.paid_at {
            self.paid_at = Some(paid_at);
        }
        if let Some(method) = patch.payment_method {
            self.payment_method = Some(method);
        }
        if let Some(returned_at) = patch.returned_at {
            self.returned_at = Some(returned_at);
        }
        if let Some(penalty) = patch.append_penalty {
            self.penalty_amounts.push(penalty);
        }
    }
}

/// Partial update merged into a stored ticket by the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub is_paid: Option<bool>,
    pub paid_at: Option<Timestamp>,
    pub payment_method: Option<PaymentMethod>,
    pub returned_at: Option<Timestamp>,
    pub append_penalty: Option<Money>,
}

impl TicketPatch {
    /// Patch recording a successful payment.
    pub fn payment(method: PaymentMethod, paid_at: Timestamp) -> Self {
        Self {
            is_paid: Some(true),
            paid_at: Some(paid_at),
            payment_method: Some(method),
            ..Self::default()
        }
    }

    /// Patch recording a lapsed grace window and the penalty it accrued.
    pub fn grace_lapsed(penalty: Money) -> Self {
        Self {
            is_paid: Some(false),
            append_penalty: Some(penalty),
            ..Self::default()
        }
    }

    /// Patch recording an approved exit.
    pub fn exit(returned_at: Timestamp) -> Self {
        Self {
            returned_at: Some(returned_at),
            ..Self::default()
        }
    }
}
