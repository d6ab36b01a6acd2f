// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for userforge.
//!
//! This module contains pure business logic with no I/O and no logging.
//!
//! - **Immutable entities**: a `User` never changes after `build()`
//! - **Infallible construction**: the builder accepts any value
//! - **Explicit validation**: key fields are checked only when asked
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{User, UserBuilder};

pub use error::{MESSAGE_SEPARATOR, ValidationError, Violation};

pub use validation::DomainValidator;
