//! Transport shape for user data.
//!
//! `UserDto` mirrors every field of [`crate::domain::User`] but is freely
//! mutable and carries no invariants. It is what arrives from the outside
//! (CLI flags, JSON files) and what a `User` is projected back into.

use serde::{Deserialize, Serialize};

/// Mutable data holder with one getter and one setter per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDto {
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

impl UserDto {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Getters ───────────────────────────────────────────────────────────────

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

    // ── Setters ───────────────────────────────────────────────────────────────
    //
    // Setters take `Option` so a field can be cleared as well as set.

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }
    pub fn set_age(&mut self, age: Option<i32>) {
        self.age = age;
    }
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }
    pub fn set_address(&mut self, address: Option<String>) {
        self.address = address;
    }
    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city;
    }
    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country;
    }
    pub fn set_active(&mut self, active: Option<bool>) {
        self.active = active;
    }
    pub fn set_department(&mut self, department: Option<String>) {
        self.department = department;
    }
    pub fn set_position(&mut self, position: Option<String>) {
        self.position = position;
    }
}
