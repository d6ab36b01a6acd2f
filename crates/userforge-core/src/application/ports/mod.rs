//! Application ports (traits) for external collaborators.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented elsewhere
//!   - `UserMapper`: DTO ↔ entity field copying
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`UserService` methods, called by the CLI)

pub mod output;

pub use output::UserMapper;

#[cfg(test)]
pub use output::MockUserMapper;
