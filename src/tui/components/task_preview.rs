//! # TaskPreview Component
//!
//! A small bordered panel under the table with the selected task's full
//! title, description and timestamps, or a hint when nothing is selected.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::view::PreviewView;
use crate::tui::component::Component;

/// Rows the preview needs: border, title, description, timestamps, border.
pub const PREVIEW_HEIGHT: u16 = 5;

pub const NO_SELECTION: &str = "Select a task to view details";

pub struct TaskPreview<'a> {
    pub preview: Option<&'a PreviewView>,
}

impl<'a> TaskPreview<'a> {
    pub fn new(preview: Option<&'a PreviewView>) -> Self {
        Self { preview }
    }
}

impl Component for TaskPreview<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let block = Block::bordered().title(" Preview ").border_style(muted);

        let Some(preview) = self.preview else {
            frame.render_widget(Paragraph::new(Line::styled(NO_SELECTION, muted)).block(block), area);
            return;
        };
        let description = match &preview.description {
            Some(text) => Line::raw(text.as_str()),
            None => Line::styled("No description", muted),
        };
        let lines = vec![
            Line::styled(
                preview.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            description,
            Line::from(vec![
                Span::styled("Created: ", muted),
                Span::raw(preview.created.as_str()),
                Span::styled("  Updated: ", muted),
                Span::raw(preview.updated.as_str()),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
