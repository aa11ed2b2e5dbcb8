//! # FilterBar Component
//!
//! One line above the table showing the active filter and sort:
//!
//! ```text
//! Filter: [All] [Todo] [In Progress] [Done]   Sort: [Created] ▲
//! ```
//!
//! The active filter is highlighted; the others are dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::query::Filter;
use crate::core::view::ControlsView;
use crate::tui::component::Component;

pub struct FilterBar<'a> {
    pub controls: &'a ControlsView,
}

impl<'a> FilterBar<'a> {
    pub fn new(controls: &'a ControlsView) -> Self {
        Self { controls }
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let active = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);

        let mut spans = vec![Span::raw("Filter: ")];
        for filter in Filter::CYCLE {
            let style = if filter == self.controls.filter {
                active
            } else {
                inactive
            };
            spans.push(Span::styled(format!("[{}]", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("  Sort: "));
        spans.push(Span::styled(
            format!("[{}]", self.controls.sort_key.label()),
            active,
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(self.controls.sort_order.symbol(), active));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{SortKey, SortOrder};
    use crate::test_support::render_text;

    #[test]
    fn test_shows_every_filter_and_sort() {
        let controls = ControlsView {
            filter: Filter::InProgress,
            sort_key: SortKey::DueDate,
            sort_order: SortOrder::Desc,
        };
        let text = render_text(80, 1, |f| FilterBar::new(&controls).render(f, f.area()));

        assert!(text.contains("Filter: [All] [Todo] [In Progress] [Done]"));
        assert!(text.contains("Sort: [Due Date] ▼"));
    }

    #[test]
    fn test_active_filter_is_highlighted() {
        let controls = ControlsView {
            filter: Filter::Todo,
            sort_key: SortKey::Created,
            sort_order: SortOrder::Asc,
        };
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| FilterBar::new(&controls).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();

        // "Filter: [All] [" puts the T of Todo at column 15
        assert_eq!(buffer[(15, 0)].symbol(), "T");
        assert_eq!(buffer[(15, 0)].fg, Color::Cyan);
        assert_eq!(buffer[(9, 0)].fg, Color::DarkGray);
    }
}
