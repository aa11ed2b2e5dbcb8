//! # View Model
//!
//! A plain, derived snapshot of what the screen should show. The
//! controller builds one after every event and hands it to the surface;
//! the surface never sees `App` and never mutates anything.
//!
//! Colors are expressed as a semantic `Tone`. Mapping tones to actual
//! terminal colors is presentation policy and lives in the adapter.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::core::form::TaskForm;
use crate::core::keymap::LIST_HELP;
use crate::core::layout::{self, ColumnLayout};
use crate::core::query::{Filter, SortKey, SortOrder};
use crate::core::state::{App, Mode};
use crate::core::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Warning,
    Danger,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub size: TerminalSize,
    pub screen: Screen,
    pub controls: ControlsView,
    pub table: TableView,
    pub preview: Option<PreviewView>,
    pub toast: Option<String>,
    pub help: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Form(TaskForm),
    Detail(DetailView),
    /// List stays visible underneath the confirmation overlay.
    ConfirmDelete { title: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView {
    pub filter: Filter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub layout: ColumnLayout,
    /// Length of the header rule, `None` when the band hides it.
    pub separator_len: Option<u16>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// 1-based position in the visible list.
    pub number: usize,
    pub title: String,
    pub status: String,
    pub status_tone: Tone,
    pub due: String,
    pub due_tone: Tone,
    pub created: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub title: String,
    pub description: Option<String>,
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub status: String,
    pub status_tone: Tone,
    pub description: String,
    pub due: String,
    pub created: String,
    pub updated: String,
}

/// "today", "in 3 days", "2 days overdue".
pub fn relative_due_label(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        d if d > 0 => format!("in {d} days"),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    }
}

pub fn due_tone(due: NaiveDate, today: NaiveDate) -> Tone {
    if due == today {
        Tone::Warning
    } else if due < today {
        Tone::Danger
    } else {
        Tone::Normal
    }
}

/// `MM/DD/YYYY` in local time.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%m/%d/%Y").to_string()
}

/// `MM/DD/YYYY, HH:MM` in local time.
pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%m/%d/%Y, %H:%M").to_string()
}

pub fn build(app: &App, size: TerminalSize, now: DateTime<Utc>) -> ViewModel {
    let today = now.with_timezone(&Local).date_naive();
    let visible = app.visible_tasks();
    let selected = visible.get(app.selected_index).copied();
    let column_layout = layout::compute_layout(size.width);

    let rows = visible
        .iter()
        .enumerate()
        .map(|(index, task)| row_view(task, index, index == app.selected_index, &column_layout, today))
        .collect();

    let table = TableView {
        layout: column_layout,
        separator_len: column_layout
            .show_separator
            .then(|| layout::separator_len(size.width)),
        rows,
    };

    let screen = match &app.mode {
        Mode::List => Screen::List,
        Mode::Create { form } | Mode::Edit { form, .. } => Screen::Form(form.clone()),
        Mode::Detail => match selected {
            Some(task) => Screen::Detail(detail_view(task, today)),
            None => Screen::List,
        },
        Mode::ConfirmDelete { task_id } => Screen::ConfirmDelete {
            title: app
                .task(task_id)
                .map(|t| t.title.clone())
                .unwrap_or_default(),
        },
    };

    ViewModel {
        size,
        screen,
        controls: ControlsView {
            filter: app.filter,
            sort_key: app.sort_key,
            sort_order: app.sort_order,
        },
        table,
        preview: selected.map(preview_view),
        toast: app.toast.current().map(|t| t.message.clone()),
        help: LIST_HELP,
    }
}

fn row_view(
    task: &Task,
    index: usize,
    selected: bool,
    column_layout: &ColumnLayout,
    today: NaiveDate,
) -> RowView {
    let (due, due_tone) = match task.due_date {
        Some(date) => (relative_due_label(date, today), due_tone(date, today)),
        None => ("-".to_string(), Tone::Normal),
    };
    RowView {
        number: index + 1,
        title: layout::truncate_title(&task.title, column_layout.title_max_chars),
        status: task.status.display(),
        status_tone: task.status.tone(),
        due,
        due_tone,
        created: format_date(task.created_at),
        selected,
    }
}

fn preview_view(task: &Task) -> PreviewView {
    PreviewView {
        title: task.title.clone(),
        description: task.description.clone(),
        created: format_date_time(task.created_at),
        updated: format_date_time(task.updated_at),
    }
}

fn detail_view(task: &Task, today: NaiveDate) -> DetailView {
    DetailView {
        id: task.id.to_string(),
        title: task.title.clone(),
        status: task.status.display(),
        status_tone: task.status.tone(),
        description: task
            .description
            .clone()
            .unwrap_or_else(|| "No description provided".to_string()),
        due: task
            .due_date
            .map(|d| relative_due_label(d, today))
            .unwrap_or_else(|| "Not set".to_string()),
        created: format_date(task.created_at),
        updated: format_date(task.updated_at),
    }
}
