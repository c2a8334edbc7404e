//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across status enums in the domain.

use super::errors::ValidationError;
use std::fmt::Debug;

/// Trait for status enums with validated transitions.
///
/// Implementors define which transitions are legal; the trait supplies the
/// checked `transition_to` and terminal-state detection on top.
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Checks whether a transition from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all states reachable from self in one transition.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Attempts the transition, returning the new state or an error.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Returns true if no further transitions are possible.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum GateState {
        Closed,
        Open,
        Faulted,
    }

    impl StateMachine for GateState {
        fn can_transition_to(&self, target: &Self) -> bool {
            use GateState::*;
            matches!(
                (self, target),
                (Closed, Open) | (Open, Closed) | (Closed, Faulted) | (Open, Faulted)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use GateState::*;
            match self {
                Closed => vec![Open, Faulted],
                Open => vec![Closed, Faulted],
                Faulted => vec![],
            }
        }
    }

    #[test]
    fn allows_valid_transition() {
        let result = GateState::Closed.transition_to(GateState::Open);
        assert_eq!(result, Ok(GateState::Open));
    }

    #[test]
    fn rejects_invalid_transition() {
        let result = GateState::Faulted.transition_to(GateState::Open);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFormat { field, .. }) if field == "state_transition"
        ));
    }

    #[test]
    fn terminal_state_has_no_transitions() {
        assert!(GateState::Faulted.is_terminal());
        assert!(!GateState::Closed.is_terminal());
        assert!(!GateState::Open.is_terminal());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        let all = [GateState::Closed, GateState::Open, GateState::Faulted];
        for from in all {
            for to in all {
                let listed = from.valid_transitions().contains(&to);
                assert_eq!(listed, from.can_transition_to(&to));
            }
        }
    }
}
