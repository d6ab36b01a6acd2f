//! Turning command-line input into core types.
//!
//! A DTO starts from the `--from` JSON file when given, then every field
//! flag that was passed overrides the value read from the file.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use userforge_core::{application::UserDto, domain::User};

use crate::{
    cli::UserFieldArgs,
    error::{CliError, CliResult, IntoCli},
};

/// Assemble a DTO from `--from` and the field flags.
pub fn read_dto(fields: &UserFieldArgs) -> CliResult<UserDto> {
    let mut dto = match &fields.from {
        Some(path) => read_json::<UserDto>(path)?,
        None => UserDto::new(),
    };
    apply_flags(&mut dto, fields);
    Ok(dto)
}

/// Load a previously printed user (`create --output-format json`).
pub fn read_user(path: &Path) -> CliResult<User> {
    read_json(path)
}

fn apply_flags(dto: &mut UserDto, fields: &UserFieldArgs) {
    if let Some(v) = &fields.username {
        dto.set_username(Some(v.clone()));
    }
    if let Some(v) = &fields.email {
        dto.set_email(Some(v.clone()));
    }
    if let Some(v) = fields.age {
        dto.set_age(Some(v));
    }
    if let Some(v) = &fields.phone {
        dto.set_phone(Some(v.clone()));
    }
    if let Some(v) = &fields.address {
        dto.set_address(Some(v.clone()));
    }
    if let Some(v) = &fields.city {
        dto.set_city(Some(v.clone()));
    }
    if let Some(v) = &fields.country {
        dto.set_country(Some(v.clone()));
    }
    if let Some(v) = fields.active {
        dto.set_active(Some(v));
    }
    if let Some(v) = &fields.department {
        dto.set_department(Some(v.clone()));
    }
    if let Some(v) = &fields.position {
        dto.set_position(Some(v.clone()));
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    if !path.exists() {
        return Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "Reading JSON input");
    let text = fs::read_to_string(path).with_cli_context(|| format!("reading {}", path.display()))?;

    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn flags_only() {
        let fields = UserFieldArgs {
            username: Some("alice".into()),
            age: Some(30),
            ..Default::default()
        };
        let dto = read_dto(&fields).unwrap();
        assert_eq!(dto.username(), Some("alice"));
        assert_eq!(dto.age(), Some(30));
        assert_eq!(dto.email(), None);
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "user.json",
            r#"{"username":"alice","email":"alice@example.com","city":"Shanghai"}"#,
        );

        let fields = UserFieldArgs {
            from: Some(path),
            city: Some("Lisbon".into()),
            ..Default::default()
        };
        let dto = read_dto(&fields).unwrap();

        assert_eq!(dto.username(), Some("alice"));
        assert_eq!(dto.city(), Some("Lisbon"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let fields = UserFieldArgs {
            from: Some("does-not-exist.json".into()),
            ..Default::default()
        };
        assert!(matches!(
            read_dto(&fields),
            Err(CliError::InputNotFound { .. })
        ));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", "{ not json");

        let err = read_user(&path).unwrap_err();
        assert!(matches!(err, CliError::Json { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn reads_existing_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "alice.json",
            r#"{"id":7,"username":"alice","email":"alice@example.com"}"#,
        );

        let user = read_user(&path).unwrap();
        assert_eq!(user.id(), Some(7));
        assert_eq!(user.username(), Some("alice"));
        assert_eq!(user.age(), None);
    }
}
