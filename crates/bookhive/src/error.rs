//! Error types for bookhive

use thiserror::Error;

use crate::changeset::ValidationErrors;

/// Result type alias for bookhive operations
pub type WarehouseResult<T> = Result<T, WarehouseError>;

/// Error types for the query workbench
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// A selector value that is not part of its enumeration
    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    /// No predefined query or result table under this id
    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    /// Field-level presence check failures
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// Query backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

impl WarehouseError {
    /// Create an unknown-option error for a selector
    pub fn unknown_option(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown query error
    pub fn is_unknown_query(&self) -> bool {
        matches!(self, Self::UnknownQuery(_))
    }

    /// Field-level errors, when the failure carries them
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for WarehouseError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changeset::BookEntry;

    #[test]
    fn validation_errors_convert() {
        let errors = BookEntry::default().validate().unwrap_err();
        let err = WarehouseError::from(errors);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation failed on 3 field(s)");
        assert_eq!(
            err.field_errors().and_then(|e| e.alert_message()),
            Some("Please fill in all required book fields")
        );
    }

    #[test]
    fn unknown_query_is_tagged() {
        let err = WarehouseError::UnknownQuery("weekly_loans".into());
        assert!(err.is_unknown_query());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Unknown query: weekly_loans");
    }
}
