//! # Application State
//!
//! Core state for the contact manager. Domain data only, no TUI types.
//! Presentation state (list selection, scroll offset, hit-test rects)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: ContactStore          // contacts + backing file
//! ├── form: Option<RecordForm>     // Some while the add/edit dialog is open
//! ├── notice: Option<Notice>       // Some while an info/error dialog is shown
//! └── status_message: String       // status line text
//! ```
//!
//! State changes go through `update(state, action)` in action.rs. The only
//! I/O, writing the contacts file, happens in `App::dispatch` when `update`
//! asks for it with `Effect::Persist`.

use log::{debug, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::error::AppError;
use crate::core::form::RecordForm;
use crate::core::store::ContactStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message box. Dismissed by the user before anything else happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

pub struct App {
    pub store: ContactStore,
    pub form: Option<RecordForm>,
    pub notice: Option<Notice>,
    pub status_message: String,
}

impl App {
    pub fn new(store: ContactStore) -> Self {
        let status_message = format!("{} contacts loaded", store.len());
        Self {
            store,
            form: None,
            notice: None,
            status_message,
        }
    }

    /// Show `err` to the user. Nothing else changes.
    pub fn report(&mut self, err: AppError) {
        debug!("Reporting error: {}", err);
        self.notice = Some(Notice::error(&err));
    }

    /// Run `action` through `update` and carry out any persistence it asks
    /// for. Returns the effect so the caller can refresh or quit.
    ///
    /// A failed save is reported as a dialog; the in-memory change stays.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        let effect = update(self, action);
        if effect == Effect::Persist {
            match self.store.save() {
                Ok(()) => {
                    self.status_message = format!(
                        "{} contacts saved to {}",
                        self.store.len(),
                        self.store.path().display()
                    );
                }
                Err(e) => {
                    warn!("Failed to save {}: {}", self.store.path().display(), e);
                    self.status_message = "Unsaved changes".to_string();
                    self.report(AppError::Persistence(e));
                }
            }
        }
        effect
    }
}
