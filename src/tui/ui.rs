use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ButtonBar, ContactList, MessageDialog, RecordFormView, TitleBar};

const HELP_TEXT: &str = " ↑↓ Select  a Add  u Update  d Delete  q Exit ";

/// Draw the main window, then whichever overlay is open on top of it.
/// A notice sits above the form so validation errors stay readable.
pub fn draw_ui(frame: &mut Frame, app: &mut App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(3), Length(ButtonBar::HEIGHT), Length(1)]);
    let [title_area, list_area, button_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.store.len(), app.status_message.clone()).render(frame, title_area);
    ContactList::new(&mut tui.contact_list).render(frame, list_area);
    ButtonBar::new(&mut tui.buttons).render(frame, button_area);
    frame.render_widget(
        Line::from(HELP_TEXT)
            .centered()
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(form) = app.form.as_mut() {
        RecordFormView::new(form).render(frame, frame.area());
    }
    if let Some(notice) = app.notice.as_ref() {
        MessageDialog::new(notice).render(frame, frame.area());
    }
}
