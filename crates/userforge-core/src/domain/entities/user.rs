//! The `User` entity and its builder.
//!
//! A `User` is an immutable snapshot of a person profile. It is only ever
//! produced by [`UserBuilder::build`]; "modifying" a user means deriving a
//! builder with [`User::to_builder`], overriding some fields, and building a
//! new snapshot.
//!
//! # Construction never fails
//!
//! The builder accepts any value for any field (empty strings, negative ages,
//! malformed emails). Checking the key fields is a separate, explicit step:
//! [`User::validate`].
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::{has_email_shape, is_blank},
    error::{ValidationError, Violation},
};

// ── Entity ────────────────────────────────────────────────────────────────────

/// An immutable user profile.
///
/// Only `username` and `email` are key fields; every other field is optional
/// and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: Option<i64>,
    username: Option<String>,
    email: Option<String>,
    age: Option<i32>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    active: Option<bool>,
    department: Option<String>,
    position: Option<String>,
}

impl User {
    /// Start building a new `User` with every field unset.
    pub fn builder() -> UserBuilder {
        UserBuilder::new()
    }

    /// Derive a builder seeded with every field of this user.
    pub fn to_builder(&self) -> UserBuilder {
        UserBuilder {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            age: self.age,
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            active: self.active,
            department: self.department.clone(),
            position: self.position.clone(),
        }
    }

    pub const fn id(&self) -> Option<i64> {
        self.id
    }
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub const fn age(&self) -> Option<i32> {
        self.age
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
    pub const fn active(&self) -> Option<bool> {
        self.active
    }
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Check the key fields and report every violation at once.
    ///
    /// Order of checks (and of the reported violations):
    /// 1. `username` must not be blank.
    /// 2. `email` must not be blank, or else must contain `@`.
    ///
    /// A blank email never also reports the format violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if is_blank(self.username()) {
            violations.push(Violation::UsernameBlank);
        }

        match self.email() {
            email if is_blank(email) => violations.push(Violation::EmailBlank),
            Some(email) if !has_email_shape(email) => violations.push(Violation::EmailMalformed),
            _ => {}
        }

        match ValidationError::from_violations(violations) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}>",
            self.username().unwrap_or("-"),
            self.email().unwrap_or("-")
        )?;

        let mut extras = Vec::new();
        if let Some(id) = self.id {
            extras.push(format!("id={id}"));
        }
        if let Some(age) = self.age {
            extras.push(format!("age={age}"));
        }
        for (name, value) in [
            ("phone", self.phone()),
            ("address", self.address()),
            ("city", self.city()),
            ("country", self.country()),
            ("department", self.department()),
            ("position", self.position()),
        ] {
            if let Some(value) = value {
                extras.push(format!("{name}={value}"));
            }
        }
        if let Some(active) = self.active {
            extras.push(format!("active={active}"));
        }

        if !extras.is_empty() {
            write!(f, " [{}]", extras.join(", "))?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Staging area for a [`User`].
///
/// Every field starts unset (`None`, not a zero value). Setters never
/// validate. [`build`](Self::build) borrows the builder and copies its
/// values, so a built `User` is unaffected by later changes to the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserBuilder {
    id: Option<i64>,
    username: Option<String>,
    email: Option<String>,
    age: Option<i32>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    active: Option<bool>,
    department: Option<String>,
    position: Option<String>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Snapshot the current values into a new [`User`]. Always succeeds.
    pub fn build(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            age: self.age,
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            active: self.active,
            department: self.department.clone(),
            position: self.position.clone(),
        }
    }
}

impl From<&User> for UserBuilder {
    fn from(user: &User) -> Self {
        user.to_builder()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::builder()
            .username("alice")
            .email("alice@example.com")
            .age(30)
            .phone("555-0100")
            .address("1 Main St")
            .city("Shanghai")
            .country("China")
            .active(true)
            .department("IT")
            .position("Developer")
            .build()
    }

    // ── Builder ───────────────────────────────────────────────────────────────

    #[test]
    fn fresh_builder_has_every_field_unset() {
        let user = UserBuilder::new().build();
        assert_eq!(user.id(), None);
        assert_eq!(user.username(), None);
        assert_eq!(user.email(), None);
        assert_eq!(user.age(), None);
        assert_eq!(user.active(), None);
    }

    #[test]
    fn only_key_fields_leaves_others_unset() {
        let user = User::builder()
            .username("alice")
            .email("alice@example.com")
            .build();

        assert_eq!(user.username(), Some("alice"));
        assert_eq!(user.email(), Some("alice@example.com"));
        assert_eq!(user.age(), None);
        assert_eq!(user.phone(), None);
        assert_eq!(user.address(), None);
        assert_eq!(user.city(), None);
        assert_eq!(user.country(), None);
        assert_eq!(user.active(), None);
        assert_eq!(user.department(), None);
        assert_eq!(user.position(), None);
    }

    #[test]
    fn setters_accept_anything() {
        let user = User::builder().username("").email("nope").age(-5).build();
        assert_eq!(user.username(), Some(""));
        assert_eq!(user.email(), Some("nope"));
        assert_eq!(user.age(), Some(-5));
    }

    #[test]
    fn explicit_empty_string_is_distinct_from_unset() {
        let set = User::builder().city("").build();
        let unset = User::builder().build();
        assert_ne!(set, unset);
    }

    #[test]
    fn building_twice_yields_equal_snapshots() {
        let builder = User::builder().username("alice").email("a@b");
        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn mutating_after_build_does_not_alias() {
        let builder = User::builder().username("alice").email("a@b");
        let first = builder.build();

        let builder = builder.username("x");
        let second = builder.build();

        assert_eq!(first.username(), Some("alice"));
        assert_eq!(second.username(), Some("x"));
        assert_ne!(first, second);
    }

    // ── to_builder ────────────────────────────────────────────────────────────

    #[test]
    fn to_builder_round_trips() {
        let user = alice();
        assert_eq!(user.to_builder().build(), user);
        assert_eq!(UserBuilder::from(&user).build(), user);
    }

    #[test]
    fn to_builder_override_only_touches_that_field() {
        let user = alice();
        let older = user.to_builder().age(31).build();

        assert_eq!(older.age(), Some(31));
        assert_eq!(older.to_builder().age(30).build(), user);
    }

    #[test]
    fn to_builder_leaves_source_untouched() {
        let user = alice();
        let _moved = user
            .to_builder()
            .age(36)
            .city("Guangzhou")
            .department("Product")
            .build();

        assert_eq!(user.age(), Some(30));
        assert_eq!(user.city(), Some("Shanghai"));
        assert_eq!(user.department(), Some("IT"));
    }

    #[test]
    fn to_builder_preserves_id() {
        let user = User::builder().id(42).username("a").email("a@b").build();
        assert_eq!(user.to_builder().username("b").build().id(), Some(42));
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn valid_with_only_key_fields() {
        let user = User::builder()
            .username("alice")
            .email("alice@example.com")
            .build();
        assert!(user.validate().is_ok());
    }

    #[test]
    fn missing_username_and_email_reports_both() {
        let err = User::builder().age(25).build().validate().unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::UsernameBlank, Violation::EmailBlank]
        );
    }

    #[test]
    fn whitespace_username_is_blank() {
        let err = User::builder()
            .username("   ")
            .email("a@b")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(err.violations(), &[Violation::UsernameBlank]);
    }

    #[test]
    fn no_break_space_username_is_text() {
        let user = User::builder().username("\u{A0}").email("a@b").build();
        assert!(user.validate().is_ok());

        let err = User::builder()
            .username("\u{1F}")
            .email("a@b")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(err.violations(), &[Violation::UsernameBlank]);
    }

    #[test]
    fn email_without_at_is_malformed_only() {
        let err = User::builder()
            .username("u")
            .email("no-at-sign")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(err.violations(), &[Violation::EmailMalformed]);
    }

    #[test]
    fn empty_email_is_blank_only() {
        let err = User::builder()
            .username("u")
            .email("")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(err.violations(), &[Violation::EmailBlank]);
        assert!(!err.contains(Violation::EmailMalformed));
    }

    #[test]
    fn blank_username_and_malformed_email_in_check_order() {
        let err = User::builder()
            .email("invalid")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "username must not be empty, email format is invalid"
        );
    }

    #[test]
    fn non_key_fields_are_never_inspected() {
        let user = User::builder()
            .username("u")
            .email("u@x")
            .age(-1)
            .phone("")
            .city("   ")
            .active(false)
            .build();
        assert!(user.validate().is_ok());
    }

    // ── Display ───────────────────────────────────────────────────────────────

    #[test]
    fn display_shows_key_fields_and_set_extras() {
        let user = User::builder()
            .username("alice")
            .email("alice@example.com")
            .age(25)
            .city("Shanghai")
            .build();
        assert_eq!(
            user.to_string(),
            "alice <alice@example.com> [age=25, city=Shanghai]"
        );
    }

    #[test]
    fn display_marks_missing_key_fields() {
        assert_eq!(User::builder().build().to_string(), "- <->");
    }
}
