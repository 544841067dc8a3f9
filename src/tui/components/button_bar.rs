//! # ButtonBar Component
//!
//! The command buttons under the list: Add, Update, Delete on one row and
//! Exit on its own row below. Each button also has a keyboard shortcut,
//! shown in its label.
//!
//! Button rectangles are recorded during render so a mouse click can be
//! mapped back to a command.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

const BUTTON_WIDTH: u16 = 14;

/// A command the main window can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Update,
    Delete,
    Exit,
}

impl ShellCommand {
    pub fn label(self) -> &'static str {
        match self {
            ShellCommand::Add => "Add",
            ShellCommand::Update => "Update",
            ShellCommand::Delete => "Delete",
            ShellCommand::Exit => "Exit",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            ShellCommand::Add => 'a',
            ShellCommand::Update => 'u',
            ShellCommand::Delete => 'd',
            ShellCommand::Exit => 'q',
        }
    }

    /// Case-insensitive lookup by shortcut key.
    pub fn from_shortcut(c: char) -> Option<Self> {
        [
            ShellCommand::Add,
            ShellCommand::Update,
            ShellCommand::Delete,
            ShellCommand::Exit,
        ]
        .into_iter()
        .find(|command| command.shortcut() == c.to_ascii_lowercase())
    }
}

/// Persistent state: where each button was drawn last frame.
#[derive(Default)]
pub struct ButtonBarState {
    pub hits: Vec<(Rect, ShellCommand)>,
}

impl ButtonBarState {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ShellCommand> {
        let position = Position { x: column, y: row };
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, command)| command)
    }
}

/// Transient render wrapper. Expects an area 6 rows tall.
pub struct ButtonBar<'a> {
    state: &'a mut ButtonBarState,
}

impl<'a> ButtonBar<'a> {
    pub const HEIGHT: u16 = 6;

    pub fn new(state: &'a mut ButtonBarState) -> Self {
        Self { state }
    }

    fn render_button(&mut self, frame: &mut Frame, area: Rect, command: ShellCommand) {
        let label = format!("{} [{}]", command.label(), command.shortcut());
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, area);
        self.state.hits.push((area, command));
    }
}

impl Component for ButtonBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.hits.clear();

        let [commands_row, exit_row] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area);

        let [add, update, delete] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 3])
            .flex(Flex::Center)
            .spacing(2)
            .areas(commands_row);
        self.render_button(frame, add, ShellCommand::Add);
        self.render_button(frame, update, ShellCommand::Update);
        self.render_button(frame, delete, ShellCommand::Delete);

        let [exit] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(exit_row);
        self.render_button(frame, exit, ShellCommand::Exit);
    }
}
