//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! conversion workflows: direct, builder-with-defaults, update, projection.

pub mod user_service;

pub use user_service::UserService;
