//! # ConfirmDelete Component
//!
//! Small centered overlay drawn over the list while a delete is pending.
//! `y`/Enter confirms, `n`/Esc cancels.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ConfirmDelete<'a> {
    pub title: &'a str,
}

impl<'a> ConfirmDelete<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl Component for ConfirmDelete<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let danger = Style::default().fg(Color::Red);
        let block = Block::bordered()
            .border_style(danger)
            .title(" Delete Task ")
            .title_bottom(Line::from(" y Yes  n No ").centered());

        let lines = vec![
            Line::raw("Delete this task?"),
            Line::default(),
            Line::styled(
                format!("\"{}\"", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
