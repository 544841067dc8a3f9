//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Input goes to the topmost thing on screen and nowhere else:
//!
//! 1. A notice dialog, if shown: any key or click dismisses it.
//! 2. The record form, if open: keystrokes edit it, Enter submits, Esc cancels.
//! 3. The main window: shortcuts and buttons run commands, arrows move
//!    the selection.
//!
//! That ordering is what makes the form modal: while it is open nothing in
//! the main window can mutate the store.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including a
//! terminal resize) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect};
use crate::core::contact::Contact;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ButtonBarState, ContactListState, FormEvent, RecordFormView, ShellCommand,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub contact_list: ContactListState,
    pub buttons: ButtonBarState,
}

impl TuiState {
    pub fn new(contacts: &[Contact]) -> Self {
        Self {
            contact_list: ContactListState::new(contacts),
            buttons: ButtonBarState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Take over the terminal and run until the user exits.
pub fn run(mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new(app.store.contacts());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Contact manager exiting with {} contacts", app.store.len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process the first event + drain everything pending before the next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            needs_redraw = true;
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event to whatever is on top. See the module docs for the order.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return app.dispatch(Action::Exit),
        _ => {}
    }

    if app.notice.is_some() {
        if !matches!(
            event,
            TuiEvent::ScrollUp | TuiEvent::ScrollDown | TuiEvent::Paste(_)
        ) {
            app.dispatch(Action::DismissNotice);
        }
        return Effect::None;
    }

    if let Some(form) = app.form.as_mut() {
        let action = match RecordFormView::new(form).handle_event(&event) {
            Some(FormEvent::Submit) => Action::SubmitForm,
            Some(FormEvent::Cancel) => Action::CancelForm,
            Some(FormEvent::Edited) | None => return Effect::None,
        };
        return apply(app, tui, action);
    }

    match event {
        TuiEvent::MouseClick(column, row) => {
            if let Some(command) = tui.buttons.hit_test(column, row) {
                return run_command(app, tui, command);
            }
            if let Some(index) = tui.contact_list.hit_test(column, row) {
                debug!("Clicked row {}", index);
                tui.contact_list.select(Some(index));
            }
            Effect::None
        }
        TuiEvent::InputChar(c) => match ShellCommand::from_shortcut(c) {
            Some(command) => run_command(app, tui, command),
            None => Effect::None,
        },
        TuiEvent::Escape => {
            tui.contact_list.select(None);
            Effect::None
        }
        other => {
            tui.contact_list.handle_event(&other);
            Effect::None
        }
    }
}

/// Turn a button press into an action, attaching the list selection.
fn run_command(app: &mut App, tui: &mut TuiState, command: ShellCommand) -> Effect {
    let selected = tui.contact_list.selected_index();
    let action = match command {
        ShellCommand::Add => Action::Add,
        ShellCommand::Update => Action::Update(selected),
        ShellCommand::Delete => Action::Delete(selected),
        ShellCommand::Exit => Action::Exit,
    };
    apply(app, tui, action)
}

/// Dispatch and, if the store changed, rebuild the list from it.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = app.dispatch(action);
    if effect == Effect::Persist {
        tui.contact_list.refresh(app.store.contacts());
    }
    effect
}
