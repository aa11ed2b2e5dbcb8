//! # TaskDetail Component
//!
//! Full-screen read-only view of one task. Esc returns to the list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::view::DetailView;
use crate::tui::component::Component;
use crate::tui::ui::tone_style;

pub struct TaskDetail<'a> {
    pub detail: &'a DetailView,
}

impl<'a> TaskDetail<'a> {
    pub fn new(detail: &'a DetailView) -> Self {
        Self { detail }
    }
}

fn field<'a>(label: &'a str, value: &'a str, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<13}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, style),
    ])
}

impl Component for TaskDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let d = self.detail;
        let plain = Style::default();
        let muted = Style::default().fg(Color::DarkGray);

        let lines = vec![
            field("Title:", &d.title, plain.add_modifier(Modifier::BOLD)),
            field("Status:", &d.status, tone_style(d.status_tone)),
            field("Due:", &d.due, plain),
            Line::default(),
            field("Description:", &d.description, plain),
            Line::default(),
            field("Created:", &d.created, muted),
            field("Updated:", &d.updated, muted),
            field("ID:", &d.id, muted),
        ];

        let block = Block::bordered()
            .title(" Task Details ")
            .title_bottom(Line::from(" [Esc] Back to List ").centered())
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
