//! # Session State
//!
//! Everything the session controller owns, in one place.
//!
//! ```text
//! App
//! ├── tasks: Vec<Task>          // insertion order
//! ├── mode: Mode                // List | Create | Edit | Detail | ConfirmDelete
//! ├── filter: Filter            // All | Todo | InProgress | Done
//! ├── sort_key: SortKey         // Created | DueDate
//! ├── sort_order: SortOrder     // Asc | Desc
//! ├── selected_index: usize     // index into the visible list
//! ├── toast: ToastSlot          // at most one pending toast
//! └── toast_timeout: Duration
//! ```
//!
//! State changes only happen through `update(state, action, now)` in
//! action.rs. The visible list is never stored; it is derived on demand
//! from `tasks` + filter + sort, which is what `selected_index` points into.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::core::config::ResolvedConfig;
use crate::core::form::TaskForm;
use crate::core::query::{self, Filter, SortKey, SortOrder};
use crate::core::task::{Task, TaskId};
use crate::core::toast::{DEFAULT_TOAST_TIMEOUT_MS, ToastSlot};

/// Top-level screen. Modes that act on a specific task capture its id on
/// entry, so the id can't drift if the visible list changes underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Create { form: TaskForm },
    Edit { task_id: TaskId, form: TaskForm },
    Detail,
    ConfirmDelete { task_id: TaskId },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::List => "list",
            Mode::Create { .. } => "create",
            Mode::Edit { .. } => "edit",
            Mode::Detail => "detail",
            Mode::ConfirmDelete { .. } => "delete",
        }
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match self {
            Mode::Create { form } | Mode::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match self {
            Mode::Create { form } | Mode::Edit { form, .. } => Some(form),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub tasks: Vec<Task>,
    pub mode: Mode,
    pub filter: Filter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub selected_index: usize,
    pub toast: ToastSlot,
    pub toast_timeout: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            mode: Mode::List,
            filter: Filter::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            selected_index: 0,
            toast: ToastSlot::default(),
            toast_timeout: Duration::milliseconds(DEFAULT_TOAST_TIMEOUT_MS as i64),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            filter: config.filter,
            sort_key: config.sort_key,
            sort_order: config.sort_order,
            toast_timeout: Duration::milliseconds(
                i64::try_from(config.toast_timeout_ms).unwrap_or(i64::MAX),
            ),
            ..Self::new()
        }
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        query::visible_tasks(&self.tasks, self.filter, self.sort_key, self.sort_order)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    /// Pulls `selected_index` back inside `[0, max(0, len - 1)]`.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        let max = len.saturating_sub(1);
        if self.selected_index > max {
            debug!(
                "Clamping selection {} -> {} (visible {})",
                self.selected_index,
                max,
                len
            );
            self.selected_index = max;
        }
    }

    /// Set iff the mode is `Edit`.
    pub fn editing_task_id(&self) -> Option<&TaskId> {
        match &self.mode {
            Mode::Edit { task_id, .. } => Some(task_id),
            _ => None,
        }
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Swaps in `task` for the entry with the same id. Returns false if
    /// no such entry exists.
    pub fn replace_task(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.toast.show(message, now, self.toast_timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskStatus;
    use crate::test_support::{app_with, task_at};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.tasks.is_empty());
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.filter, Filter::All);
        assert_eq!(app.sort_key, SortKey::Created);
        assert_eq!(app.sort_order, SortOrder::Asc);
        assert_eq!(app.selected_index, 0);
        assert!(!app.toast.is_visible());
        assert_eq!(app.toast_timeout, Duration::milliseconds(2000));
        assert!(app.editing_task_id().is_none());
    }

    #[test]
    fn test_clamp_after_visible_list_shrinks() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1), task_at("c", 2)]);
        app.tasks[0].status = TaskStatus::Done;
        app.selected_index = 2;

        app.filter = Filter::Done;
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_task().map(|t| t.title.as_str()), Some("a"));
    }

    #[test]
    fn test_clamp_on_empty_list_is_zero() {
        let mut app = app_with(vec![task_at("a", 0)]);
        app.selected_index = 7;
        app.filter = Filter::InProgress;
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_task().is_none());
    }

    #[test]
    fn test_clamp_for_every_shrink() {
        for n in 1..6usize {
            for m in 0..n {
                for selected in 0..n {
                    let tasks = (0..n).map(|i| task_at(&format!("t{i}"), i as i64)).collect();
                    let mut app = app_with(tasks);
                    for task in app.tasks.iter_mut().skip(m) {
                        task.status = TaskStatus::Done;
                    }
                    app.selected_index = selected;
                    app.filter = Filter::Todo;
                    app.clamp_selection();
                    assert!(app.selected_index <= m.saturating_sub(1));
                }
            }
        }
    }

    #[test]
    fn test_replace_and_remove() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1)]);
        let mut renamed = app.tasks[1].clone();
        renamed.title = "B".to_string();
        assert!(app.replace_task(renamed));
        assert_eq!(app.tasks[1].title, "B");

        let id = app.tasks[0].id.clone();
        assert_eq!(app.remove_task(&id).map(|t| t.title), Some("a".to_string()));
        assert!(app.remove_task(&id).is_none());
        assert_eq!(app.tasks.len(), 1);
    }
}
