//! # TitleBar Component
//!
//! Top line of the window: application title, contact count and the
//! latest status message.
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.store.len(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Contact Manager | 3 contacts | 3 contacts saved to contacts.csv"`
//! 2. **Default**: `"Contact Manager | 3 contacts"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Contact Manager";

pub struct TitleBar {
    pub contact_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(contact_count: usize, status_message: String) -> Self {
        Self {
            contact_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.contact_count {
            1 => "1 contact".to_string(),
            n => format!("{n} contacts"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.count_label()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
