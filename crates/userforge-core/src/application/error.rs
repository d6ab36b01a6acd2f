//! Application layer errors.
//!
//! These errors represent failures in orchestration setup, not business
//! rules. Key-field violations are `ValidationError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while wiring or running application services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A configured builder default is unusable.
    #[error("Invalid builder default for '{field}': {reason}")]
    InvalidDefaults { field: &'static str, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDefaults { field, .. } => vec![
                format!("Set a non-blank value for defaults.{field}"),
                "Or remove the key to fall back to the built-in default".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDefaults { .. } => ErrorCategory::Configuration,
        }
    }
}
