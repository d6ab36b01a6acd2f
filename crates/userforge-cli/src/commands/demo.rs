//! `userforge demo`: a short walkthrough of the builder and the validator.

use tracing::instrument;

use userforge_core::{
    application::{FieldMapper, UserDto, UserMapper},
    domain::User,
};

use crate::{error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("=== DTO to entity walkthrough ===")?;

    let dto = sample_dto();
    output.print(&format!("1. Source DTO: {dto:?}"))?;

    let user = FieldMapper.to_entity(&dto);
    output.print(&format!("2. Built entity: {user}"))?;

    output.info("3. Validating...")?;
    report(&output, &user)?;

    output.info("4. Validating a user without key fields...")?;
    let invalid = User::builder().email("invalid").build();
    report(&output, &invalid)?;

    output.info("5. Deriving a modified copy...")?;
    let updated = user.to_builder().username("updateduser").city("Beijing").build();
    output.print(&format!("   before: {user}"))?;
    output.print(&format!("   after:  {updated}"))?;

    output.print("")?;
    output.success("Walkthrough complete")?;
    Ok(())
}

fn sample_dto() -> UserDto {
    let mut dto = UserDto::new();
    dto.set_username(Some("testuser".into()));
    dto.set_email(Some("test@example.com".into()));
    dto.set_age(Some(25));
    dto.set_city(Some("Shanghai".into()));
    dto
}

fn report(output: &OutputManager, user: &User) -> CliResult<()> {
    match user.validate() {
        Ok(()) => output.success("   validation passed")?,
        Err(err) => output.warning(&format!("   validation failed: {err}"))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dto_builds_a_valid_user() {
        let user = FieldMapper.to_entity(&sample_dto());
        assert!(user.validate().is_ok());
        assert_eq!(
            user.to_string(),
            "testuser <test@example.com> [age=25, city=Shanghai]"
        );
    }
}
