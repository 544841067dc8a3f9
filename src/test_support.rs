//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use tempfile::TempDir;

use crate::core::contact::Contact;
use crate::core::state::App;
use crate::core::store::{self, ContactStore};

/// Creates an empty App backed by `contacts.csv` in a fresh temp dir.
/// Keep the `TempDir` alive for as long as the App is used.
pub fn test_app() -> (TempDir, App) {
    seeded_app(&[])
}

/// Creates an App whose file already holds `contacts`.
pub fn seeded_app(contacts: &[Contact]) -> (TempDir, App) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("contacts.csv");
    if !contacts.is_empty() {
        store::write(&path, contacts).expect("seed contacts file");
    }
    let store = ContactStore::open(path).expect("open seeded store");
    (dir, App::new(store))
}

/// Overwrite all three fields of the open form.
pub fn fill_form(app: &mut App, name: &str, phone: &str, email: &str) {
    let form = app.form.as_mut().expect("form should be open");
    form.name = name.to_string();
    form.phone = phone.to_string();
    form.email = email.to_string();
}
