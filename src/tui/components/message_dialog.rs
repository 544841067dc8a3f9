//! # MessageDialog Overlay
//!
//! Modal info/error box drawn on top of everything else. Any key or click
//! closes it; the shell does that by dispatching `Action::DismissNotice`.
//! Wheel scrolling and pastes are ignored while it is up.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;
use crate::tui::components::centered_fixed;

const DIALOG_WIDTH: u16 = 50;

pub struct MessageDialog<'a> {
    notice: &'a Notice,
}

impl<'a> MessageDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Component for MessageDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = match self.notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        };

        let paragraph = Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Borders + vertical padding around the wrapped message
        let inner_width = DIALOG_WIDTH.min(area.width).saturating_sub(4);
        let height = paragraph.line_count(inner_width) as u16 + 4;
        let overlay = centered_fixed(DIALOG_WIDTH, height, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notice.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::new(1, 1, 1, 1));

        frame.render_widget(Clear, overlay);
        frame.render_widget(paragraph.block(block), overlay);
    }
}
