//! # Contact
//!
//! A contact is a plain value: three strings, no identifier. Two contacts
//! with the same fields are indistinguishable; the store tells them apart
//! by position only.
//!
//! Field order in the struct is the column order in the persisted file
//! (`name, phone, email`), so keep it that way.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// One row of the list view: `"{name} - {phone} - {email}"`.
    pub fn display_line(&self) -> String {
        format!("{} - {} - {}", self.name, self.phone, self.email)
    }
}
