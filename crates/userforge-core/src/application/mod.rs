//! Application layer for userforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (UserService)
//! - **Ports**: Interface definitions (traits) for collaborators
//! - **DTO / Mapper**: the transport shape and its stock field mapper
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All validation rules live in `crate::domain`.

pub mod defaults;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::UserService;

// Re-export port traits (for alternative mapper implementations)
pub use ports::UserMapper;

pub use defaults::BuilderDefaults;
pub use dto::UserDto;
pub use error::ApplicationError;
pub use mapper::FieldMapper;
