//! # TaskTable Component
//!
//! The task list. Column widths come straight from the `ColumnLayout` in
//! the view model, so the table itself does no width math:
//!
//! ```text
//! #   Title                 Status         Due           Created
//! ──────────────────────────────────────────────────────────────
//! 1   Buy milk              ⚪ Todo        today         01/10/2024
//! 2   Write report          🟡 In Progress 2 days overdue 01/09/2024
//! ```
//!
//! The created column is left out entirely when its width is zero, and the
//! rule under the header only appears when the band asks for it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::core::view::TableView;
use crate::tui::component::Component;
use crate::tui::ui::tone_style;

pub const EMPTY_MESSAGE: &str = "No tasks found";

pub struct TaskTable<'a> {
    pub table: &'a TableView,
}

impl<'a> TaskTable<'a> {
    pub fn new(table: &'a TableView) -> Self {
        Self { table }
    }

    fn widths(&self) -> Vec<Constraint> {
        let layout = &self.table.layout;
        let mut widths = vec![
            Constraint::Length(layout.id_width),
            Constraint::Length(layout.title_width),
            Constraint::Length(layout.status_width),
            Constraint::Length(layout.due_date_width),
        ];
        if layout.shows_created() {
            widths.push(Constraint::Length(layout.created_width));
        }
        widths
    }

    fn header(&self) -> Row<'static> {
        let mut cells = vec!["#", "Title", "Status", "Due"];
        if self.table.layout.shows_created() {
            cells.push("Created");
        }
        Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
    }
}

impl Component for TaskTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator_height = u16::from(self.table.separator_len.is_some());
        let [header_area, separator_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(separator_height),
            Constraint::Min(0),
        ])
        .areas(area);

        let widths = self.widths();
        frame.render_widget(
            Table::new(Vec::<Row>::new(), widths.clone())
                .header(self.header())
                .column_spacing(0),
            header_area,
        );

        if let Some(len) = self.table.separator_len {
            let rule = "─".repeat(usize::from(len.min(separator_area.width)));
            frame.render_widget(
                Line::styled(rule, Style::default().fg(Color::DarkGray)),
                separator_area,
            );
        }

        if self.table.rows.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, body_area);
            return;
        }

        let show_created = self.table.layout.shows_created();
        let rows = self.table.rows.iter().map(|row| {
            let mut cells = vec![
                Cell::from(row.number.to_string()),
                Cell::from(row.title.as_str()),
                Cell::from(row.status.as_str()).style(tone_style(row.status_tone)),
                Cell::from(row.due.as_str()).style(tone_style(row.due_tone)),
            ];
            if show_created {
                cells.push(Cell::from(row.created.as_str()));
            }
            Row::new(cells)
        });

        let mut state = TableState::default();
        state.select(self.table.rows.iter().position(|row| row.selected));

        let table = Table::new(rows, widths)
            .column_spacing(0)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, body_area, &mut state);
    }
}
