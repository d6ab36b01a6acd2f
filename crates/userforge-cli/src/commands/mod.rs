//! One module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and print the result
//! through [`crate::output::OutputManager`]. No business rules live here.

use userforge_core::application::{FieldMapper, UserService};

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod create;
pub mod demo;
pub mod init;
pub mod input;
pub mod update;
pub mod validate;

/// Wire the service with the field mapper and the configured defaults.
///
/// Fails with a configuration error when the defaults are unusable.
pub(crate) fn user_service(config: &AppConfig) -> CliResult<UserService> {
    Ok(UserService::new(Box::new(FieldMapper), config.defaults.clone())?)
}
