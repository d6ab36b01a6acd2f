//! Unified error handling for userforge core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ValidationError;

/// Root error type for userforge core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserforgeError {
    /// One or more key fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Errors from the application layer (service setup).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl UserforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// The underlying validation failure, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Application(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

/// Convenient result type alias.
pub type UserforgeResult<T> = Result<T, UserforgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    #[test]
    fn validation_category_and_suggestions() {
        let err: UserforgeError =
            ValidationError::from_violations(vec![Violation::UsernameBlank, Violation::EmailBlank])
                .unwrap()
                .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.suggestions().len(), 2);
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn display_keeps_every_message() {
        let err: UserforgeError = ValidationError::from_violations(vec![
            Violation::UsernameBlank,
            Violation::EmailMalformed,
        ])
        .unwrap()
        .into();

        assert_eq!(
            err.to_string(),
            "Validation failed: username must not be empty, email format is invalid"
        );
    }

    #[test]
    fn application_errors_are_configuration() {
        let err: UserforgeError = ApplicationError::InvalidDefaults {
            field: "city",
            reason: "must not be blank".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.as_validation().is_none());
    }
}
