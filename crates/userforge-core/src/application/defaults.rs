//! Values the builder workflow stamps onto every new user.

use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Non-key field defaults applied by
/// [`UserService::create_user_with_builder`](crate::application::UserService::create_user_with_builder).
///
/// They overwrite whatever the DTO carried for the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderDefaults {
    pub active: bool,
    pub department: String,
    pub city: String,
}

impl Default for BuilderDefaults {
    fn default() -> Self {
        Self {
            active: true,
            department: "Engineering".into(),
            city: "Beijing".into(),
        }
    }
}

impl BuilderDefaults {
    /// Reject defaults that would stamp blank text onto every user.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        for (field, value) in [("department", &self.department), ("city", &self.city)] {
            if value.trim().is_empty() {
                return Err(ApplicationError::InvalidDefaults {
                    field,
                    reason: "must not be blank".into(),
                });
            }
        }
        Ok(())
    }
}
