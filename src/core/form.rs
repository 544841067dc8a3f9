//! # Record Form
//!
//! Field buffers and validation for the modal add/edit dialog. The TUI
//! draws it and feeds keystrokes into it; submission goes through
//! `Action::SubmitForm` so the store mutation happens in one place.
//!
//! The form never reads or writes the contacts file.

use crate::core::contact::Contact;
use crate::core::error::AppError;

/// Which flow opened the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the contact at this store index.
    Edit(usize),
}

/// The three inputs, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Phone,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Email];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Phone,
            Field::Phone => Field::Email,
            Field::Email => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Phone => Field::Name,
            Field::Email => Field::Phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    pub mode: FormMode,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Field receiving keystrokes.
    pub focus: Field,
}

impl RecordForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            focus: Field::Name,
        }
    }

    /// Open an edit form pre-populated from `contact`.
    pub fn edit(index: usize, contact: &Contact) -> Self {
        Self {
            mode: FormMode::Edit(index),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            focus: Field::Name,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Contact",
            FormMode::Edit(_) => "Update Contact",
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
        }
    }

    /// Fields left empty, in tab order. A space is a value like any other.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.value(field).is_empty())
            .collect()
    }

    /// Validate and produce the contact. Values are kept exactly as typed.
    pub fn submit(&self) -> Result<Contact, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation { missing });
        }
        Ok(Contact::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ))
    }
}
