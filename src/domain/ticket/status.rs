//! Ticket status state machine.
//!
//! The visit lifecycle as seen by the desk. The status is derived from the
//! ticket's fields rather than stored; see `Ticket::status`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Position of a ticket in the visit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Inside, nothing paid yet. The full stay price is due before exit.
    ActiveUnpaid,

    /// Paid within the grace window; the visitor may leave freely.
    ActivePaid,

    /// The grace window lapsed after payment; the latest penalty is due.
    GraceExpired,

    /// Exit approved. Terminal.
    Exited,
}

impl TicketStatus {
    /// Returns true while the ticket occupies a capacity slot.
    pub fn is_active(&self) -> bool {
        !matches!(self, TicketStatus::Exited)
    }
}

impl StateMachine for TicketStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TicketStatus::*;
        matches!(
            (self, target),
            // From ACTIVE_UNPAID
            (ActiveUnpaid, ActivePaid)
            // From ACTIVE_PAID
                | (ActivePaid, GraceExpired)
                | (ActivePaid, Exited)
            // From GRACE_EXPIRED (penalty settled)
                | (GraceExpired, ActivePaid)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TicketStatus::*;
        match self {
            ActiveUnpaid => vec![ActivePaid],
            ActivePaid => vec![GraceExpired, Exited],
            GraceExpired => vec![ActivePaid],
            Exited => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn unpaid_ticket_can_only_become_paid() {
        assert!(TicketStatus::ActiveUnpaid.can_transition_to(&TicketStatus::ActivePaid));
        assert!(!TicketStatus::ActiveUnpaid.can_transition_to(&TicketStatus::Exited));
        assert!(!TicketStatus::ActiveUnpaid.can_transition_to(&TicketStatus::GraceExpired));
    }

    #[test]
    fn paid_ticket_can_exit_or_lapse() {
        assert!(TicketStatus::ActivePaid.can_transition_to(&TicketStatus::Exited));
        assert!(TicketStatus::ActivePaid.can_transition_to(&TicketStatus::GraceExpired));
        assert!(!TicketStatus::ActivePaid.can_transition_to(&TicketStatus::ActiveUnpaid));
    }

    #[test]
    fn lapsed_ticket_returns_to_paid_after_settling() {
        assert!(TicketStatus::GraceExpired.can_transition_to(&TicketStatus::ActivePaid));
        assert!(!TicketStatus::GraceExpired.can_transition_to(&TicketStatus::Exited));
    }

    #[test]
    fn exited_is_terminal() {
        assert!(TicketStatus::Exited.is_terminal());
        assert!(!TicketStatus::GraceExpired.is_terminal());

        let result = TicketStatus::Exited.transition_to(TicketStatus::ActivePaid);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn transition_to_accepts_valid_target() {
        let result = TicketStatus::ActiveUnpaid.transition_to(TicketStatus::ActivePaid);
        assert_eq!(result, Ok(TicketStatus::ActivePaid));
    }

    #[test]
    fn only_exited_is_inactive() {
        assert!(TicketStatus::ActiveUnpaid.is_active());
        assert!(TicketStatus::ActivePaid.is_active());
        assert!(TicketStatus::GraceExpired.is_active());
        assert!(!TicketStatus::Exited.is_active());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        let all = [
            TicketStatus::ActiveUnpaid,
            TicketStatus::ActivePaid,
            TicketStatus::GraceExpired,
            TicketStatus::Exited,
        ];
        for from in all {
            for to in all {
                let listed = from.valid_transitions().contains(&to);
                assert_eq!(listed, from.can_transition_to(&to));
            }
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TicketStatus::ActiveUnpaid).unwrap();
        assert_eq!(json, "\"active_unpaid\"");
        let json = serde_json::to_string(&TicketStatus::GraceExpired).unwrap();
        assert_eq!(json, "\"grace_expired\"");
    }
}
