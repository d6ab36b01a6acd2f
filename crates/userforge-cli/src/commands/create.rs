//! `userforge create`: build a user from a DTO and validate it.

use tracing::{debug, instrument};

use crate::{
    cli::{CreateArgs, CreateMode},
    commands::{input, user_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run the direct or the builder workflow and print the new user.
#[instrument(skip_all, fields(mode = ?args.mode))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dto = input::read_dto(&args.fields)?;
    debug!(?dto, "DTO assembled");

    let service = user_service(&config)?;
    let user = match args.mode {
        CreateMode::Direct => service.create_user_direct(&dto)?,
        CreateMode::Builder => service.create_user_with_builder(&dto)?,
    };

    output.user(&user)?;
    Ok(())
}
