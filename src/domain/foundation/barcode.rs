//! Barcode identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;

/// The unique identifier printed on a ticket at issuance.
///
/// Barcodes come from the barcode generator collaborator; the domain only
/// requires them to be non-empty after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode(String);

impl Barcode {
    /// Creates a new Barcode, returning an error if the code is blank.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("barcode"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the barcode as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_code() {
        let barcode = Barcode::new("1700000000000042").unwrap();
        assert_eq!(barcode.as_str(), "1700000000000042");
    }

    #[test]
    fn rejects_empty_code() {
        let result = Barcode::new("");
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField { field }) if field == "barcode"
        ));
    }

    #[test]
    fn rejects_whitespace_only_code() {
        assert!(Barcode::new("   ").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let barcode = Barcode::new("  spa-7  ").unwrap();
        assert_eq!(barcode.as_str(), "spa-7");
    }

    #[test]
    fn displays_inner_code() {
        let barcode = Barcode::new("12345").unwrap();
        assert_eq!(barcode.to_string(), "12345");
    }

    #[test]
    fn serializes_as_plain_string() {
        let barcode = Barcode::new("12345").unwrap();
        let json = serde_json::to_string(&barcode).unwrap();
        assert_eq!(json, "\"12345\"");

        let back: Barcode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, barcode);
    }
}
