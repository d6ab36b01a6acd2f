//! `userforge validate`: check the key fields of a DTO.

use tracing::instrument;

use userforge_core::{
    application::{FieldMapper, UserMapper},
    error::UserforgeError,
};

use crate::{cli::ValidateArgs, commands::input, error::CliResult, output::OutputManager};

/// Report the outcome; an invalid DTO ends in a validation error.
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let dto = input::read_dto(&args.fields)?;
    let result = FieldMapper.to_entity(&dto).validate();

    output.validation_report(&result)?;
    result.map_err(UserforgeError::from)?;
    Ok(())
}
