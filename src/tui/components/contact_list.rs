//! # ContactList Component
//!
//! The list view: one row per contact, in store order, with a scrollbar.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ContactListState` lives in `TuiState` (rows, selection, last viewport)
//! - `ContactList` is created each frame with borrowed state
//!
//! The rows are a pure projection of the store. After every mutation the
//! shell calls `refresh()`, which rebuilds them from scratch and drops the
//! selection.

use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, BorderType, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};

use crate::core::contact::Contact;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the list view.
pub struct ContactListState {
    pub rows: Vec<String>,
    pub list_state: ListState,
    /// Inner area from the last render, for click hit-testing and paging.
    pub viewport: Rect,
}

impl ContactListState {
    pub fn new(contacts: &[Contact]) -> Self {
        let mut state = Self {
            rows: Vec::new(),
            list_state: ListState::default(),
            viewport: Rect::default(),
        };
        state.refresh(contacts);
        state
    }

    /// Rebuild every row from `contacts`. Clears the selection.
    pub fn refresh(&mut self, contacts: &[Contact]) {
        self.rows = contacts.iter().map(Contact::display_line).collect();
        self.list_state = ListState::default();
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.rows.len())
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index.filter(|&i| i < self.rows.len()));
    }

    /// Map a screen position to a row index, if it lands on a row.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position { x: column, y: row }) {
            return None;
        }
        let index = self.list_state.offset() + (row - self.viewport.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    fn page_size(&self) -> usize {
        (self.viewport.height as usize).max(1)
    }

    /// Selection after moving `delta` rows. With nothing selected, moving
    /// down starts at the top and moving up starts at the bottom.
    fn moved(&self, delta: isize) -> Option<usize> {
        let last = self.rows.len().checked_sub(1)?;
        let next = match self.selected_index() {
            None if delta >= 0 => 0,
            None => last,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        Some(next)
    }
}

impl EventHandler for ContactListState {
    /// Newly selected row index.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<usize> {
        let page = self.page_size() as isize;
        let target = match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.moved(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.moved(1),
            TuiEvent::PageUp => self.moved(-page),
            TuiEvent::PageDown => self.moved(page),
            TuiEvent::Home => (!self.rows.is_empty()).then_some(0),
            TuiEvent::End => self.rows.len().checked_sub(1),
            _ => None,
        }?;
        if self.selected_index() == Some(target) {
            return None;
        }
        self.list_state.select(Some(target));
        Some(target)
    }
}

/// Transient render wrapper for the list view.
pub struct ContactList<'a> {
    state: &'a mut ContactListState,
}

impl<'a> ContactList<'a> {
    pub fn new(state: &'a mut ContactListState) -> Self {
        Self { state }
    }
}

impl Component for ContactList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Contacts ({}) ", self.state.rows.len()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        self.state.viewport = block.inner(area);

        if self.state.rows.is_empty() {
            let empty = Paragraph::new("No contacts yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .map(|row| ListItem::new(row.as_str()))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);

        // Scrollbar on the right border, between the corners
        let position = self
            .state
            .selected_index()
            .unwrap_or(self.state.list_state.offset());
        let mut scrollbar_state = ScrollbarState::new(self.state.rows.len()).position(position);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn contacts(n: usize) -> Vec<Contact> {
        (0..n)
            .map(|i| Contact::new(format!("Person {i}"), format!("555-01{i:02}"), format!("p{i}@x.com")))
            .collect()
    }

    fn render(state: &mut ContactListState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| ContactList::new(state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_refresh_formats_rows_in_store_order() {
        let state = ContactListState::new(&[
            Contact::new("Bob", "555-0200", "bob@x.com"),
            Contact::new("Ada", "555-0100", "ada@example.com"),
        ]);
        assert_eq!(
            state.rows,
            vec!["Bob - 555-0200 - bob@x.com", "Ada - 555-0100 - ada@example.com"]
        );
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_refresh_clears_selection() {
        let mut state = ContactListState::new(&contacts(3));
        state.select(Some(2));
        state.refresh(&contacts(2));
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn test_select_out_of_range_is_none() {
        let mut state = ContactListState::new(&contacts(2));
        state.select(Some(5));
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_navigation_from_no_selection() {
        let mut state = ContactListState::new(&contacts(3));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), Some(0));

        let mut state = ContactListState::new(&contacts(3));
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), Some(2));
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut state = ContactListState::new(&contacts(3));
        state.select(Some(2));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::Home), Some(0));
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.handle_event(&TuiEvent::End), Some(2));
    }

    #[test]
    fn test_navigation_on_empty_list_does_nothing() {
        let mut state = ContactListState::new(&[]);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::End), None);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_page_down_uses_viewport_height() {
        let mut state = ContactListState::new(&contacts(20));
        render(&mut state, 40, 7); // 5 inner rows
        state.select(Some(0));
        assert_eq!(state.handle_event(&TuiEvent::PageDown), Some(5));
        assert_eq!(state.handle_event(&TuiEvent::PageUp), Some(0));
    }

    #[test]
    fn test_render_shows_rows_and_count() {
        let mut state = ContactListState::new(&[Contact::new("Bob", "555-0200", "bob@x.com")]);
        let text = render(&mut state, 50, 5);
        assert!(text.contains("Contacts (1)"));
        assert!(text.contains("Bob - 555-0200 - bob@x.com"));
    }

    #[test]
    fn test_render_empty_hint() {
        let mut state = ContactListState::new(&[]);
        let text = render(&mut state, 50, 5);
        assert!(text.contains("No contacts yet"));
    }

    #[test]
    fn test_hit_test_maps_rows() {
        let mut state = ContactListState::new(&contacts(3));
        render(&mut state, 40, 10);
        // Border takes row 0 and column 0
        assert_eq!(state.hit_test(5, 1), Some(0));
        assert_eq!(state.hit_test(5, 3), Some(2));
        assert_eq!(state.hit_test(5, 4), None); // below the last row
        assert_eq!(state.hit_test(0, 1), None); // on the border
    }
}
