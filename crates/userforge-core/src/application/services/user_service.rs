//! User Service - DTO to entity workflows.
//!
//! Four ways of turning input into a `User` (or back):
//! 1. Direct: map the DTO, validate
//! 2. Builder: map the DTO onto a fresh builder, stamp defaults, validate
//! 3. Update: map the DTO onto a builder derived from an existing user, validate
//! 4. Projection: entity back to DTO
//!
//! Validation failures are logged and returned unchanged; nothing here
//! swallows them.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{BuilderDefaults, FieldMapper, dto::UserDto, ports::UserMapper},
    domain::{DomainValidator as validator, User, ValidationError},
    error::{UserforgeError, UserforgeResult},
};

/// Orchestrates mapping, building and validation.
pub struct UserService {
    mapper: Box<dyn UserMapper>,
    defaults: BuilderDefaults,
}

impl UserService {
    /// Create a user service with the given mapper and builder defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use userforge_core::application::{BuilderDefaults, FieldMapper, UserService};
    ///
    /// let service = UserService::new(Box::new(FieldMapper), BuilderDefaults::default()).unwrap();
    /// ```
    pub fn new(mapper: Box<dyn UserMapper>, defaults: BuilderDefaults) -> UserforgeResult<Self> {
        defaults.validate()?;
        Ok(Self { mapper, defaults })
    }

    pub fn defaults(&self) -> &BuilderDefaults {
        &self.defaults
    }

    /// Map the DTO straight into an entity and validate it.
    #[instrument(skip_all, fields(username = dto.username().unwrap_or_default()))]
    pub fn create_user_direct(&self, dto: &UserDto) -> UserforgeResult<User> {
        let user = self.mapper.to_entity(dto);
        self.checked(user, "direct")
    }

    /// Map the DTO onto a fresh builder, then overwrite `active`,
    /// `department` and `city` with the configured defaults.
    #[instrument(skip_all, fields(username = dto.username().unwrap_or_default()))]
    pub fn create_user_with_builder(&self, dto: &UserDto) -> UserforgeResult<User> {
        let builder = self.mapper.update_builder_from_dto(dto, User::builder());

        debug!(
            active = self.defaults.active,
            department = %self.defaults.department,
            city = %self.defaults.city,
            "Applying builder defaults"
        );
        let user = builder
            .active(self.defaults.active)
            .department(self.defaults.department.as_str())
            .city(self.defaults.city.as_str())
            .build();

        self.checked(user, "builder")
    }

    /// Derive a builder from `existing`, apply the present fields of
    /// `update`, and validate the result. `existing` is left untouched.
    #[instrument(skip_all, fields(existing = %existing))]
    pub fn update_user(&self, existing: &User, update: &UserDto) -> UserforgeResult<User> {
        let user = self
            .mapper
            .update_builder_from_dto(update, existing.to_builder())
            .build();
        self.checked(user, "update")
    }

    /// Project an entity back into its transport shape.
    pub fn get_user_dto(&self, user: &User) -> UserDto {
        self.mapper.to_dto(user)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn checked(&self, user: User, workflow: &'static str) -> UserforgeResult<User> {
        match validator::validate_user(&user) {
            Ok(()) => {
                info!(workflow, user = %user, "User accepted");
                Ok(user)
            }
            Err(err) => {
                log_rejection(workflow, &err);
                Err(UserforgeError::Validation(err))
            }
        }
    }
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self {
            mapper: Box::new(FieldMapper),
            defaults: BuilderDefaults::default(),
        }
    }
}

fn log_rejection(workflow: &'static str, err: &ValidationError) {
    warn!(
        workflow,
        violations = err.len(),
        fields = ?err.fields(),
        "User rejected: {err}"
    );
}
