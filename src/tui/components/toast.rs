//! # Toast Component
//!
//! One-line status message ("Task created", "Status changed to Done").
//! Renders nothing when there is no toast.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Toast<'a> {
    pub message: Option<&'a str>,
}

impl<'a> Toast<'a> {
    pub fn new(message: Option<&'a str>) -> Self {
        Self { message }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(message) = self.message else {
            return;
        };
        let style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled("✓ ", style), Span::styled(message, style)]);
        frame.render_widget(line.right_aligned(), area);
    }
}
