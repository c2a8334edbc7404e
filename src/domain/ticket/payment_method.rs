//! Payment methods accepted at the pay desk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Payment method recorded on a ticket.
///
/// The method is recorded for the receipt only; no gateway integration
/// happens at the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit card
    Credit,

    /// Debit card
    Debit,

    /// Cash at the desk
    Cash,
}

impl PaymentMethod {
    /// Returns the human-readable label for this method.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Debit => "Debit Card",
            PaymentMethod::Cash => "Cash",
        }
    }

    /// Returns the lowercase wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "credit",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(PaymentMethod::Credit),
            "debit" => Ok(PaymentMethod::Debit),
            "cash" => Ok(PaymentMethod::Cash),
            other => Err(ValidationError::invalid_format(
                "payment_method",
                format!("'{}' is not one of credit, debit, cash", other),
            )),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods() {
        assert_eq!(
            "credit".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Credit
        );
        assert_eq!(
            "debit".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Debit
        );
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(
            " Credit ".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Credit
        );
        assert_eq!(
            "CASH".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Cash
        );
    }

    #[test]
    fn rejects_unknown_method() {
        let result = "bitcoin".parse::<PaymentMethod>();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFormat { field, .. }) if field == "payment_method"
        ));
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(PaymentMethod::Credit.label(), "Credit Card");
        assert_eq!(PaymentMethod::Debit.label(), "Debit Card");
        assert_eq!(PaymentMethod::Cash.label(), "Cash");
    }

    #[test]
    fn displays_label() {
        assert_eq!(PaymentMethod::Credit.to_string(), "Credit Card");
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&PaymentMethod::Credit).unwrap();
        assert_eq!(json, "\"credit\"");

        let back: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(back, PaymentMethod::Cash);
    }
}
