//! `userforge update`: apply a DTO on top of an existing user.

use tracing::{debug, instrument};

use crate::{
    cli::UpdateArgs,
    commands::{input, user_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Fields absent from the DTO keep the existing user's values.
#[instrument(skip_all, fields(existing = %args.existing.display()))]
pub fn execute(args: UpdateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let existing = input::read_user(&args.existing)?;
    let dto = input::read_dto(&args.fields)?;
    debug!(%existing, ?dto, "Applying update");

    let updated = user_service(&config)?.update_user(&existing, &dto)?;

    output.user(&updated)?;
    Ok(())
}
