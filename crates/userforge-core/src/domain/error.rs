// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Separator placed between violation messages when a [`ValidationError`]
/// is rendered as a single line.
pub const MESSAGE_SEPARATOR: &str = ", ";

/// A single key-field check that failed.
///
/// Only the key fields (`username`, `email`) are ever inspected, so this set
/// is closed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("username must not be empty")]
    UsernameBlank,

    #[error("email must not be empty")]
    EmailBlank,

    /// Email is present but has no `@`. Never reported together with
    /// [`Violation::EmailBlank`].
    #[error("email format is invalid")]
    EmailMalformed,
}

impl Violation {
    /// Name of the entity field this violation refers to.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::UsernameBlank => "username",
            Self::EmailBlank | Self::EmailMalformed => "email",
        }
    }

    /// Get a user-actionable hint for fixing this violation.
    pub fn suggestion(&self) -> String {
        match self {
            Self::UsernameBlank => "Provide a username with at least one visible character".into(),
            Self::EmailBlank => "Provide an email address, e.g. alice@example.com".into(),
            Self::EmailMalformed => "An email address must contain an '@'".into(),
        }
    }
}

/// Validation failure carrying every violation found in a single pass.
///
/// Invariant: never empty. Only [`ValidationError::from_violations`] can
/// build one and it refuses an empty list.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wrap the collected violations, or `None` if nothing was violated.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Violations in the order the checks ran.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    /// Human-readable message for every violation, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Names of the offending fields. A field appears once per violation.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(Violation::field).collect()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.violations.iter().map(Violation::suggestion).collect()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false`; present for API symmetry with [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(MESSAGE_SEPARATOR))
    }
}
