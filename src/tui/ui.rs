//! Top-level frame layout. Picks components for the current `Screen` and
//! hands each its slice of the `ViewModel`.
//!
//! ```text
//! List / ConfirmDelete        Form / Detail
//! ┌──────────────────────┐    ┌──────────────────────┐
//! │ filter bar           │    │                      │
//! │ task table           │    │ form or detail       │
//! │ preview (if room)    │    │                      │
//! │ toast                │    │ toast                │
//! │ help footer          │    └──────────────────────┘
//! └──────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};

use crate::core::view::{Screen, Tone, ViewModel};
use crate::tui::component::Component;
use crate::tui::components::{
    ConfirmDelete, FilterBar, HelpFooter, PREVIEW_HEIGHT, TaskDetail, TaskFormView, TaskPreview,
    TaskTable, Toast,
};

/// Rows the table keeps before the preview panel is allowed to take space.
const MIN_TABLE_ROWS: u16 = 6;

pub fn tone_style(tone: Tone) -> Style {
    let style = Style::default();
    match tone {
        Tone::Normal => style,
        Tone::Muted => style.fg(Color::DarkGray),
        Tone::Warning => style.fg(Color::Yellow),
        Tone::Danger => style.fg(Color::Red),
        Tone::Success => style.fg(Color::Green),
    }
}

pub fn draw_ui(frame: &mut Frame, view: &ViewModel) {
    use Constraint::{Length, Min};

    let toast = view.toast.as_deref();
    match &view.screen {
        Screen::Form(form) => {
            let [main_area, toast_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
            TaskFormView::new(form).render(frame, main_area);
            Toast::new(toast).render(frame, toast_area);
        }
        Screen::Detail(detail) => {
            let [main_area, toast_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
            TaskDetail::new(detail).render(frame, main_area);
            Toast::new(toast).render(frame, toast_area);
        }
        Screen::List | Screen::ConfirmDelete { .. } => {
            let area = frame.area();
            let preview_height = if area.height >= PREVIEW_HEIGHT + MIN_TABLE_ROWS + 3 {
                PREVIEW_HEIGHT
            } else {
                0
            };
            let [filter_area, table_area, preview_area, toast_area, help_area] =
                Layout::vertical([Length(1), Min(0), Length(preview_height), Length(1), Length(1)])
                    .areas(area);

            FilterBar::new(&view.controls).render(frame, filter_area);
            TaskTable::new(&view.table).render(frame, table_area);
            if preview_height > 0 {
                TaskPreview::new(view.preview.as_ref()).render(frame, preview_area);
            }
            Toast::new(toast).render(frame, toast_area);
            HelpFooter::new(view.help).render(frame, help_area);

            if let Screen::ConfirmDelete { title } = &view.screen {
                ConfirmDelete::new(title).render(frame, area);
            }
        }
    }
}
