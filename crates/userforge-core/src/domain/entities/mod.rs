pub mod common;
pub mod user;

pub use crate::domain::ValidationError;
pub use user::{User, UserBuilder};
