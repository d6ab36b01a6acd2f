use crate::domain::{entities::User, error::ValidationError};

/// Centralized domain validation.
///
/// Callers that only hold a `User` reference go through here; the rules
/// themselves live on the entity.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_user(user: &User) -> Result<(), ValidationError> {
        user.validate()
    }
}
