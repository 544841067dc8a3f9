//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top line with title, contact count and status
//! - `MessageDialog`: Info/error overlay for a `Notice`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `ContactList`: The list view (rows, selection, scroll, hit-testing)
//! - `ButtonBar`: Add/Update/Delete/Exit buttons with click hit-testing
//! - `RecordFormView`: The add/edit overlay, editing a core `RecordForm`
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `...State` struct lives in `TuiState` and a wrapper holding
//! `&mut` to it is built each frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status line)
//! ├── contact_list.rs    (List view)
//! ├── button_bar.rs      (Command buttons)
//! ├── record_form.rs     (Add/Update overlay)
//! └── message_dialog.rs  (Info/error overlay)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod button_bar;
pub mod contact_list;
pub mod message_dialog;
pub mod record_form;
mod title_bar;

pub use button_bar::{ButtonBar, ButtonBarState, ShellCommand};
pub use contact_list::{ContactList, ContactListState};
pub use message_dialog::MessageDialog;
pub use record_form::{FormEvent, RecordFormView};
pub use title_bar::TitleBar;

/// A `width` x `height` rect centered in `outer`, shrunk to fit if needed.
pub fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
