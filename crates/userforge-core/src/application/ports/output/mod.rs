//! Driven (output) ports.
//!
//! These traits define what the application needs from collaborators it does
//! not own. [`crate::application::mapper::FieldMapper`] is the stock
//! implementation.

use crate::application::dto::UserDto;
use crate::domain::{User, UserBuilder};

/// Port for copying fields between [`UserDto`] and the `User` entity.
///
/// Implemented by:
/// - `userforge_core::application::mapper::FieldMapper` (field-by-field copy)
/// - `MockUserMapper` (generated by mockall for tests)
///
/// ## Design Notes
///
/// - Stateless: implementations hold no data, so one instance can be shared
/// - Infallible: mapping never validates; that is the service's next step
#[cfg_attr(test, mockall::automock)]
pub trait UserMapper: Send + Sync {
    /// Convert a DTO into a new entity.
    fn to_entity(&self, dto: &UserDto) -> User;

    /// Project an entity back into a DTO.
    fn to_dto(&self, user: &User) -> UserDto;

    /// Copy the DTO's present values onto an existing builder.
    ///
    /// Fields absent from the DTO keep whatever the builder already holds.
    fn update_builder_from_dto(&self, dto: &UserDto, builder: UserBuilder) -> UserBuilder;
}
