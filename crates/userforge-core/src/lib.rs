//! userforge Core - DTO to entity conversion
//!
//! This crate provides the domain and application layers for turning loosely
//! shaped input into immutable, selectively validated `User` entities.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          userforge-cli (CLI)            │
//! │     (flags / JSON files → UserDto)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (UserService)               │
//! │   direct / builder / update / project   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (UserMapper ← FieldMapper)         │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (User, UserBuilder, ValidationError)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use userforge_core::domain::User;
//!
//! // 1. Build (never fails)
//! let user = User::builder()
//!     .username("alice")
//!     .email("alice@example.com")
//!     .build();
//!
//! // 2. Validate explicitly
//! assert!(user.validate().is_ok());
//!
//! // 3. Copy with overrides
//! let moved = user.to_builder().city("Lisbon").build();
//! assert_eq!(moved.city(), Some("Lisbon"));
//! assert_eq!(user.city(), None);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuilderDefaults, FieldMapper, UserDto, UserService, ports::UserMapper,
    };
    pub use crate::domain::{User, UserBuilder, ValidationError, Violation};
    pub use crate::error::{UserforgeError, UserforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
