//! # TaskFormView Component
//!
//! Renders the create/edit form draft. Input handling lives with the draft
//! in `core::form`; this is display only.
//!
//! ```text
//! ┌ New Task ─────────────────────────────┐
//! │ Title                                 │
//! │ Buy milk█                             │
//! │                                       │
//! │ Description                           │
//! │ [Optional]                            │
//! │ ...                                   │
//! │ Title is required                     │
//! └──── Tab Next  e Edit  s Save  Esc Cancel ┘
//! ```
//!
//! The focused field is highlighted. While editing, a block cursor follows
//! the text. Empty fields show their placeholder, dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::form::{FormField, FormKind, TaskForm};
use crate::tui::component::Component;

const CURSOR: &str = "█";
const NAVIGATE_HELP: &str = " Tab Next  e Edit  s Save  Esc Cancel ";
const EDITING_HELP: &str = " Enter Done  Tab Next field ";

pub struct TaskFormView<'a> {
    pub form: &'a TaskForm,
}

impl<'a> TaskFormView<'a> {
    pub fn new(form: &'a TaskForm) -> Self {
        Self { form }
    }

    fn field_lines(&self, field: FormField) -> [Line<'a>; 3] {
        let focused = self.form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let marker = if focused { "▸ " } else { "  " };

        let value = self.form.value(field);
        let mut value_spans = vec![Span::raw("  ")];
        if value.is_empty() && !(focused && self.form.editing) {
            value_spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            value_spans.push(Span::raw(value));
        }
        if focused && self.form.editing {
            value_spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }

        [
            Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(field.label(), label_style),
            ]),
            Line::from(value_spans),
            Line::default(),
        ]
    }
}

impl Component for TaskFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.form.kind {
            FormKind::Create => " New Task ",
            FormKind::Edit => " Edit Task ",
        };
        let help = if self.form.editing {
            EDITING_HELP
        } else {
            NAVIGATE_HELP
        };

        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .flat_map(|field| self.field_lines(*field))
            .collect();
        if let Some(error) = &self.form.error {
            lines.push(Line::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            ));
        }

        let block = Block::bordered()
            .title(title)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
