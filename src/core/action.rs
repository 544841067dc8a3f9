//! # Actions
//!
//! Everything that can happen in the contact manager becomes an `Action`.
//! User clicks "Delete"? That's `Action::Delete(selected)`.
//! User presses Enter in the form? That's `Action::SubmitForm`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! telling the caller what I/O to do next. It never touches the file itself.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The selection travels inside the action because it belongs to the list
//! view, not to the core.

use log::{debug, info};

use crate::core::error::{AppError, Command};
use crate::core::form::{FormMode, RecordForm};
use crate::core::state::{App, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the form in Create mode.
    Add,
    /// Open the form in Edit mode for the selected row.
    Update(Option<usize>),
    /// Remove the selected row.
    Delete(Option<usize>),
    /// Quit the application.
    Exit,
    /// Validate the open form and commit it.
    SubmitForm,
    /// Close the open form without changes.
    CancelForm,
    /// Close the message dialog.
    DismissNotice,
}

/// What the caller must do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The store changed: write it out and refresh the list.
    Persist,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Add => {
            if app.form.is_some() {
                debug!("Ignoring Add while the form is open");
                return Effect::None;
            }
            app.form = Some(RecordForm::create());
            Effect::None
        }
        Action::Update(selected) => {
            if app.form.is_some() {
                debug!("Ignoring Update while the form is open");
                return Effect::None;
            }
            let Some((index, contact)) =
                selected.and_then(|i| app.store.get(i).map(|contact| (i, contact)))
            else {
                app.report(AppError::SelectionRequired(Command::Update));
                return Effect::None;
            };
            app.form = Some(RecordForm::edit(index, contact));
            Effect::None
        }
        Action::Delete(selected) => {
            if app.form.is_some() {
                debug!("Ignoring Delete while the form is open");
                return Effect::None;
            }
            let Some(index) = selected.filter(|&i| i < app.store.len()) else {
                app.report(AppError::SelectionRequired(Command::Delete));
                return Effect::None;
            };
            let removed = app.store.remove_at(index);
            info!("Deleted contact at index {}", index);
            app.notice = Some(Notice::info(
                "Deleted Contact",
                format!("{} was deleted.", removed.name),
            ));
            Effect::Persist
        }
        Action::Exit => Effect::Quit,
        Action::SubmitForm => {
            let Some(form) = app.form.as_ref() else {
                return Effect::None;
            };
            let contact = match form.submit() {
                Ok(contact) => contact,
                Err(e) => {
                    // Form stays open so the user can fix it
                    app.report(e);
                    return Effect::None;
                }
            };
            match form.mode {
                FormMode::Create => {
                    info!("Adding contact at index {}", app.store.len());
                    app.store.append(contact.clone());
                }
                FormMode::Edit(index) => {
                    info!("Updating contact at index {}", index);
                    app.store.replace(index, contact.clone());
                }
            }
            app.form = None;
            app.notice = Some(Notice::info(
                "Submitted Information",
                format!(
                    "Name: {}\nPhone: {}\nEmail: {}",
                    contact.name, contact.phone, contact.email
                ),
            ));
            Effect::Persist
        }
        Action::CancelForm => {
            app.form = None;
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
    }
}
