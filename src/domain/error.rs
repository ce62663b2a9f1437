//! Domain Error Types
//!
//! Pure domain errors that don't depend on the console or the store.

use thiserror::Error;

use super::MeasureError;

/// Domain-specific errors
///
/// Every variant is a malformed or missing input: callers surface all of
/// them as invalid arguments.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Weight or points outside their allowed range, or unparseable
    #[error(transparent)]
    Measure(#[from] MeasureError),

    /// Required text field is empty or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Category code not in the closed set
    #[error("Invalid waste type: {0:?}")]
    UnknownCategory(String),

    /// Policy name or menu choice not recognised
    #[error("Invalid scoring policy: {0:?}")]
    UnknownPolicy(String),
}

impl DomainError {
    /// Reject blank values for a required field
    pub fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::MissingField(field));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(DomainError::require("Name", "  "), Err(DomainError::MissingField("Name")));
        assert_eq!(DomainError::require("Name", ""), Err(DomainError::MissingField("Name")));
        assert!(DomainError::require("Name", "Ana").is_ok());
    }

    #[test]
    fn test_messages() {
        let err = DomainError::MissingField("Zone");
        assert_eq!(err.to_string(), "Zone is required");

        let err: DomainError = MeasureError::NotPositive(Decimal::ZERO).into();
        assert!(err.to_string().contains("greater than zero"));

        let err = DomainError::UnknownCategory("X".to_string());
        assert!(err.to_string().contains("\"X\""));
    }
}
