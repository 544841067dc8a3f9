//! # Application Errors
//!
//! Every error a user can trigger from the main window. All of them are
//! recoverable: the shell turns them into a dialog and carries on.

use std::fmt;

use crate::core::form::Field;
use crate::core::store::StoreError;

/// A shell command that operates on the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Update,
    Delete,
}

impl Command {
    pub fn verb(self) -> &'static str {
        match self {
            Command::Update => "update",
            Command::Delete => "delete",
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    /// Form submitted with required fields left empty.
    Validation { missing: Vec<Field> },
    /// Update or Delete with nothing selected.
    SelectionRequired(Command),
    /// Writing the contacts file failed. Memory already holds the change.
    Persistence(StoreError),
}

impl AppError {
    /// Title for the dialog that reports this error.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Validation { .. } | AppError::SelectionRequired(_) => "Error",
            AppError::Persistence(_) => "Save Failed",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation { missing } => {
                let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                write!(f, "Please fill all the fields (missing: {})", names.join(", "))
            }
            AppError::SelectionRequired(command) => {
                write!(f, "Please select a contact to {}", command.verb())
            }
            AppError::Persistence(e) => write!(f, "Could not save contacts: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Persistence(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_required_message() {
        let err = AppError::SelectionRequired(Command::Delete);
        assert_eq!(err.to_string(), "Please select a contact to delete");
        assert_eq!(err.title(), "Error");
    }

    #[test]
    fn test_validation_message_lists_missing_fields() {
        let err = AppError::Validation {
            missing: vec![Field::Phone, Field::Email],
        };
        assert_eq!(
            err.to_string(),
            "Please fill all the fields (missing: Phone, Email)"
        );
    }

    #[test]
    fn test_persistence_wraps_store_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = StoreError::Io(io).into();
        assert!(err.to_string().starts_with("Could not save contacts: I/O error"));
        assert_eq!(err.title(), "Save Failed");
    }
}
