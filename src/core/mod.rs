//! # Core Application Logic
//!
//! This module contains the contact manager's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ContactStore (CSV)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Tests    │
//!             │  Adapter   │          │ (headless) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`contact`]: The `Contact` value record
//! - [`store`]: `ContactStore`, the ordered list and its CSV file
//! - [`form`]: `RecordForm`, field buffers and validation for add/edit
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`error`]: User-facing error taxonomy
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod contact;
pub mod error;
pub mod form;
pub mod state;
pub mod store;

pub use action::{Action, Effect};
pub use contact::Contact;
pub use state::App;
pub use store::ContactStore;
