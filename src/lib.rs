//! Contact manager library: the core (store, form, reducer) and the
//! terminal UI that drives it. `main.rs` wires them to config and logging.

pub mod core;
pub mod tui;

#[cfg(test)]
mod test_support;
