//! # HelpFooter Component
//!
//! Bottom line with the list-mode key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::tui::component::Component;

pub struct HelpFooter<'a> {
    pub text: &'a str,
}

impl<'a> HelpFooter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Component for HelpFooter<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Line::styled(self.text, Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
