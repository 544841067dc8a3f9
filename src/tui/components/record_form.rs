//! # RecordForm Overlay
//!
//! Modal dialog for adding or editing a contact. Opened by Add/Update,
//! dismissed by Enter (submit) or Esc (cancel).
//!
//! The field buffers live in `core::form::RecordForm` (owned by `App`);
//! this wrapper only draws them and turns keystrokes into edits. Submitting
//! and cancelling are reported as `FormEvent`s so the shell can route them
//! through `update()`.
//!
//! Editing is append-only at the end of the focused field: type to add,
//! Backspace to remove. Long values scroll so the tail stays visible.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::form::{Field, RecordForm};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_fixed;
use crate::tui::event::TuiEvent;

const FORM_WIDTH: u16 = 52;
// 3 fields + 3 gaps + submit row + borders
const FORM_HEIGHT: u16 = 9;
const LABEL_WIDTH: u16 = 8;

/// Events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Edited,
}

/// Transient wrapper around the open form.
pub struct RecordFormView<'a> {
    form: &'a mut RecordForm,
}

impl<'a> RecordFormView<'a> {
    pub fn new(form: &'a mut RecordForm) -> Self {
        Self { form }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: Field) {
        let [label_area, input_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).areas(area);

        let focused = self.form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(format!("{}:", field.label())).style(label_style),
            label_area,
        );

        // Leave one column for the cursor after the last character
        let visible_width = input_area.width.saturating_sub(1) as usize;
        let visible = visible_tail(self.form.value(field), visible_width);
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
            input_area,
        );

        if focused {
            let x = input_area.x + visible.width() as u16;
            frame.set_cursor_position((x.min(input_area.right().saturating_sub(1)), input_area.y));
        }
    }
}

impl Component for RecordFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(FORM_WIDTH, FORM_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.form.title()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Tab Next  Enter Submit  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let rows = Layout::vertical([
            Constraint::Length(1), // Name
            Constraint::Length(1),
            Constraint::Length(1), // Phone
            Constraint::Length(1),
            Constraint::Length(1), // Email
            Constraint::Length(1),
            Constraint::Length(1), // Submit
        ])
        .split(inner);

        for (i, field) in Field::ALL.into_iter().enumerate() {
            self.render_field(frame, rows[i * 2], field);
        }

        let submit = Paragraph::new("[ Submit ]")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        frame.render_widget(submit, rows[6]);
    }
}

impl EventHandler for RecordFormView<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Submit => Some(FormEvent::Submit),
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.form.focus = self.form.focus.next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.form.focus = self.form.focus.prev();
                None
            }
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.form.value_mut(self.form.focus).push(*c);
                Some(FormEvent::Edited)
            }
            TuiEvent::Paste(text) => {
                // Fields are single-line; the file format has no room for newlines
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    return None;
                }
                self.form.value_mut(self.form.focus).push_str(&clean);
                Some(FormEvent::Edited)
            }
            TuiEvent::Backspace => {
                let focus = self.form.focus;
                self.form.value_mut(focus).pop().map(|_| FormEvent::Edited)
            }
            _ => None,
        }
    }
}

/// Longest suffix of `value` that fits in `width` terminal columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &value[index + c.len_utf8()..];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::Contact;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(view: &mut RecordFormView, text: &str) {
        for c in text.chars() {
            view.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field_and_tab_moves_on() {
        let mut form = RecordForm::create();
        let mut view = RecordFormView::new(&mut form);
        type_text(&mut view, "Bob");
        view.handle_event(&TuiEvent::NextField);
        type_text(&mut view, "555-0200");
        view.handle_event(&TuiEvent::NextField);
        type_text(&mut view, "bob@x.com");

        assert_eq!(
            form.submit().unwrap(),
            Contact::new("Bob", "555-0200", "bob@x.com")
        );
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut form = RecordForm::create();
        let mut view = RecordFormView::new(&mut form);
        assert_eq!(view.handle_event(&TuiEvent::Backspace), None);
        type_text(&mut view, "ab");
        assert_eq!(view.handle_event(&TuiEvent::Backspace), Some(FormEvent::Edited));
        assert_eq!(form.name, "a");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut form = RecordForm::create();
        let mut view = RecordFormView::new(&mut form);
        view.handle_event(&TuiEvent::Paste("Ada\nLovelace".to_string()));
        assert_eq!(form.name, "AdaLovelace");
    }

    #[test]
    fn test_enter_and_escape_are_reported() {
        let mut form = RecordForm::create();
        let mut view = RecordFormView::new(&mut form);
        assert_eq!(view.handle_event(&TuiEvent::Submit), Some(FormEvent::Submit));
        assert_eq!(view.handle_event(&TuiEvent::Escape), Some(FormEvent::Cancel));
    }

    #[test]
    fn test_up_wraps_to_last_field() {
        let mut form = RecordForm::create();
        RecordFormView::new(&mut form).handle_event(&TuiEvent::CursorUp);
        assert_eq!(form.focus, Field::Email);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello", 3), "llo");
        assert_eq!(visible_tail("hello", 0), "");
        // Wide characters count as two columns
        assert_eq!(visible_tail("日本語", 4), "本語");
    }

    #[test]
    fn test_render_edit_form_shows_title_and_values() {
        let contact = Contact::new("Bob", "555-0200", "bob@x.com");
        let mut form = RecordForm::edit(0, &contact);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| RecordFormView::new(&mut form).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Update Contact"));
        assert!(text.contains("Name:"));
        assert!(text.contains("555-0200"));
        assert!(text.contains("Submit"));
    }
}
