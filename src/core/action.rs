//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses `s`? That's `Action::AdvanceStatus`.
//! The form reports a valid draft? That's `Action::SubmitForm(input)`.
//!
//! `update()` takes the current state, an action and the current time,
//! mutates the state and returns an `Effect` for the caller to carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action + now  →  update()  →  New State + Effect
//! ```
//!
//! Preconditions from the dispatch table (e.g. "visible list non-empty")
//! are checked here, so an action that doesn't apply is a no-op rather
//! than an error. Selection is re-clamped after every action.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::core::form::{FormEvent, TaskForm};
use crate::core::keymap::Key;
use crate::core::state::{App, Mode};
use crate::core::task::{Task, TaskInput, TaskPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NewTask,
    EditSelected,
    DeleteSelected,
    ConfirmDelete,
    CancelDelete,
    AdvanceStatus,
    SelectPrevious,
    SelectNext,
    CycleFilter,
    ToggleSortKey,
    ToggleSortOrder,
    OpenDetail,
    CloseDetail,
    DismissToast,
    /// A key for the create/edit form.
    FormInput(Key),
    SubmitForm(TaskInput),
    CancelForm,
}

/// Work the caller must do after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action, now: DateTime<Utc>) -> Effect {
    debug!("update: {:?} (mode={})", action, app.mode.name());
    let effect = apply(app, action, now);
    app.clamp_selection();
    effect
}

fn apply(app: &mut App, action: Action, now: DateTime<Utc>) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::FormInput(key) => return form_input(app, key, now),
        Action::SubmitForm(input) => submit_form(app, input, now),
        Action::CancelForm => {
            if app.mode.form().is_some() {
                debug!("Form cancelled, draft discarded");
                app.mode = Mode::List;
            }
        }
        Action::CloseDetail => {
            if app.mode == Mode::Detail {
                app.mode = Mode::List;
            }
        }
        Action::ConfirmDelete => confirm_delete(app, now),
        Action::CancelDelete => {
            if matches!(app.mode, Mode::ConfirmDelete { .. }) {
                app.mode = Mode::List;
            }
        }
        list_action => {
            if app.mode != Mode::List {
                debug!("Ignoring {:?} outside list mode", list_action);
                return Effect::None;
            }
            list_update(app, list_action, now);
        }
    }
    Effect::None
}

fn list_update(app: &mut App, action: Action, now: DateTime<Utc>) {
    let selected = app.selected_task().cloned();
    match action {
        Action::NewTask => {
            app.mode = Mode::Create {
                form: TaskForm::create(),
            };
        }
        Action::EditSelected => {
            if let Some(task) = selected {
                app.mode = Mode::Edit {
                    form: TaskForm::edit(&task),
                    task_id: task.id,
                };
            }
        }
        Action::DeleteSelected => {
            if let Some(task) = selected {
                app.mode = Mode::ConfirmDelete { task_id: task.id };
            }
        }
        Action::AdvanceStatus => {
            if let Some(task) = selected {
                let next = task.status.next();
                let updated = task.update(TaskPatch::status(next), now);
                info!("Task {} status {:?} -> {:?}", task.id, task.status, next);
                app.replace_task(updated);
                app.show_toast(format!("Status changed to {}", next.label()), now);
            }
        }
        Action::SelectPrevious => {
            app.selected_index = app.selected_index.saturating_sub(1);
        }
        Action::SelectNext => {
            let len = app.visible_tasks().len();
            if len > 0 {
                app.selected_index = (app.selected_index + 1).min(len - 1);
            }
        }
        Action::CycleFilter => {
            app.filter = app.filter.next();
            app.selected_index = 0;
        }
        Action::ToggleSortKey => {
            app.sort_key = app.sort_key.toggle();
            app.selected_index = 0;
        }
        Action::ToggleSortOrder => {
            app.sort_order = app.sort_order.toggle();
            app.selected_index = 0;
        }
        Action::OpenDetail => {
            if selected.is_some() {
                app.mode = Mode::Detail;
            }
        }
        Action::DismissToast => {
            app.toast.dismiss();
        }
        other => debug!("No list handler for {:?}", other),
    }
}

fn form_input(app: &mut App, key: Key, now: DateTime<Utc>) -> Effect {
    let Some(form) = app.mode.form_mut() else {
        debug!("Form key {:?} with no open form", key);
        return Effect::None;
    };
    match form.handle_key(&key) {
        Some(FormEvent::Submit(input)) => apply(app, Action::SubmitForm(input), now),
        Some(FormEvent::Cancel) => apply(app, Action::CancelForm, now),
        None => Effect::None,
    }
}

fn submit_form(app: &mut App, input: TaskInput, now: DateTime<Utc>) {
    match std::mem::replace(&mut app.mode, Mode::List) {
        Mode::Create { mut form } => match Task::create(input, now) {
            Ok(task) => {
                info!("Created task {} ({:?})", task.id, task.title);
                app.tasks.push(task);
                app.show_toast("Task created", now);
            }
            Err(e) => {
                form.reject(e);
                app.mode = Mode::Create { form };
            }
        },
        Mode::Edit { task_id, mut form } => {
            let patch = match TaskPatch::from_input(input) {
                Ok(patch) => patch,
                Err(e) => {
                    form.reject(e);
                    app.mode = Mode::Edit { task_id, form };
                    return;
                }
            };
            match app.task(&task_id).map(|task| task.update(patch, now)) {
                Some(updated) => {
                    info!("Updated task {} ({:?})", task_id, updated.title);
                    app.replace_task(updated);
                    app.show_toast("Task updated", now);
                }
                None => warn!("Edited task {} no longer exists", task_id),
            }
        }
        other => {
            debug!("Submit ignored in {} mode", other.name());
            app.mode = other;
        }
    }
}

fn confirm_delete(app: &mut App, now: DateTime<Utc>) {
    let Mode::ConfirmDelete { task_id } = &app.mode else {
        return;
    };
    let task_id = task_id.clone();
    app.mode = Mode::List;
    match app.remove_task(&task_id) {
        Some(task) => {
            info!("Deleted task {} ({:?})", task.id, task.title);
            app.show_toast("Task deleted", now);
        }
        None => warn!("Task {} already gone", task_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{Filter, SortKey, SortOrder};
    use crate::core::task::{TaskStatus, ValidationError};
    use crate::test_support::{app_with, at, input, task_at, task_due};
    use chrono::NaiveDate;

    fn create(app: &mut App, title: &str, now: DateTime<Utc>) {
        update(app, Action::NewTask, now);
        update(app, Action::SubmitForm(input(title)), now);
    }

    #[test]
    fn test_quit_returns_effect() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit, at(0)), Effect::Quit);
    }

    #[test]
    fn test_create_flow() {
        let mut app = App::new();
        update(&mut app, Action::NewTask, at(0));
        assert!(matches!(app.mode, Mode::Create { .. }));

        update(&mut app, Action::SubmitForm(input("Buy milk")), at(10));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].status, TaskStatus::Todo);
        assert_eq!(
            app.toast.current().map(|t| t.message.as_str()),
            Some("Task created")
        );
    }

    #[test]
    fn test_submit_with_blank_title_keeps_form_open() {
        let mut app = App::new();
        update(&mut app, Action::NewTask, at(0));
        update(&mut app, Action::SubmitForm(input("   ")), at(0));

        assert!(app.tasks.is_empty());
        let form = app.mode.form().expect("form still open");
        assert_eq!(form.error, Some(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_cancel_create_leaves_tasks_untouched() {
        let mut app = app_with(vec![task_at("keep", 0)]);
        let before = app.tasks.clone();
        update(&mut app, Action::NewTask, at(0));
        update(&mut app, Action::FormInput(Key::Escape), at(0));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks, before);
    }

    #[test]
    fn test_edit_flow_patches_captured_task() {
        let mut app = app_with(vec![task_at("first", 0), task_at("second", 1)]);
        update(&mut app, Action::SelectNext, at(0));
        update(&mut app, Action::EditSelected, at(0));

        let second_id = app.tasks[1].id.clone();
        assert_eq!(app.editing_task_id(), Some(&second_id));

        let edited = TaskInput {
            title: "Second (renamed)".to_string(),
            description: Some("now with notes".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        update(&mut app, Action::SubmitForm(edited), at(500));

        assert_eq!(app.mode, Mode::List);
        assert!(app.editing_task_id().is_none());
        assert_eq!(app.tasks[1].title, "Second (renamed)");
        assert_eq!(app.tasks[1].description.as_deref(), Some("now with notes"));
        assert_eq!(app.tasks[1].updated_at, at(500));
        assert_eq!(app.tasks[0].title, "first");
    }

    #[test]
    fn test_edit_cancel_restores_nothing_because_nothing_changed() {
        let mut app = app_with(vec![task_at("stable", 0)]);
        let before = app.tasks.clone();
        update(&mut app, Action::EditSelected, at(0));
        update(&mut app, Action::FormInput(Key::Char('e')), at(0));
        update(&mut app, Action::FormInput(Key::Char('!')), at(0));
        update(&mut app, Action::FormInput(Key::Enter), at(0));
        update(&mut app, Action::FormInput(Key::Char('c')), at(0));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks, before);
    }

    #[test]
    fn test_guards_on_empty_list_are_noops() {
        let mut app = App::new();
        for action in [
            Action::EditSelected,
            Action::DeleteSelected,
            Action::AdvanceStatus,
            Action::OpenDetail,
            Action::SelectNext,
            Action::SelectPrevious,
        ] {
            assert_eq!(update(&mut app, action, at(0)), Effect::None);
            assert_eq!(app.mode, Mode::List);
            assert_eq!(app.selected_index, 0);
        }
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_advance_status_cycles_and_toasts() {
        let mut app = App::new();
        create(&mut app, "Buy milk", at(0));

        update(&mut app, Action::AdvanceStatus, at(1));
        assert_eq!(app.tasks[0].status, TaskStatus::InProgress);
        assert_eq!(
            app.toast.current().map(|t| t.message.as_str()),
            Some("Status changed to In Progress")
        );

        update(&mut app, Action::AdvanceStatus, at(2));
        assert_eq!(app.tasks[0].status, TaskStatus::Done);
        update(&mut app, Action::AdvanceStatus, at(3));
        assert_eq!(app.tasks[0].status, TaskStatus::Todo);
        assert_eq!(app.tasks[0].updated_at, at(3));
    }

    #[test]
    fn test_advance_status_under_filter_clamps_selection() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1)]);
        app.filter = Filter::Todo;
        app.selected_index = 1;

        update(&mut app, Action::AdvanceStatus, at(5));
        assert_eq!(app.tasks[1].status, TaskStatus::InProgress);
        assert_eq!(app.visible_tasks().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1), task_at("c", 2)]);
        update(&mut app, Action::SelectPrevious, at(0));
        assert_eq!(app.selected_index, 0);
        for _ in 0..5 {
            update(&mut app, Action::SelectNext, at(0));
        }
        assert_eq!(app.selected_index, 2);
        update(&mut app, Action::SelectPrevious, at(0));
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_filter_and_sort_reset_selection() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1)]);
        app.selected_index = 1;
        update(&mut app, Action::CycleFilter, at(0));
        assert_eq!(app.filter, Filter::Todo);
        assert_eq!(app.selected_index, 0);

        app.selected_index = 1;
        update(&mut app, Action::ToggleSortKey, at(0));
        assert_eq!(app.sort_key, SortKey::DueDate);
        assert_eq!(app.selected_index, 0);

        app.selected_index = 1;
        update(&mut app, Action::ToggleSortOrder, at(0));
        assert_eq!(app.sort_order, SortOrder::Desc);
        assert_eq!(app.selected_index, 0);

        for _ in 0..3 {
            update(&mut app, Action::CycleFilter, at(0));
        }
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn test_detail_open_and_close() {
        let mut app = app_with(vec![task_at("a", 0)]);
        update(&mut app, Action::OpenDetail, at(0));
        assert_eq!(app.mode, Mode::Detail);

        update(&mut app, Action::AdvanceStatus, at(0));
        assert_eq!(app.tasks[0].status, TaskStatus::Todo, "list keys inert in detail");

        update(&mut app, Action::CloseDetail, at(0));
        assert_eq!(app.mode, Mode::List);
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let mut app = app_with(vec![task_at("a", 0), task_at("b", 1)]);
        app.selected_index = 1;

        update(&mut app, Action::DeleteSelected, at(0));
        assert!(matches!(app.mode, Mode::ConfirmDelete { .. }));
        update(&mut app, Action::CancelDelete, at(0));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks.len(), 2);

        update(&mut app, Action::DeleteSelected, at(0));
        update(&mut app, Action::ConfirmDelete, at(0));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "a");
        assert_eq!(app.selected_index, 0, "selection clamped after delete");
        assert_eq!(
            app.toast.current().map(|t| t.message.as_str()),
            Some("Task deleted")
        );
    }

    #[test]
    fn test_due_date_sort_through_state() {
        let mut app = app_with(vec![
            task_due("undated", None),
            task_due("dated", Some((2024, 1, 15))),
        ]);
        update(&mut app, Action::ToggleSortKey, at(0));
        let titles: Vec<&str> = app.visible_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["dated", "undated"]);

        update(&mut app, Action::ToggleSortOrder, at(0));
        let titles: Vec<&str> = app.visible_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["dated", "undated"]);
    }

    #[test]
    fn test_dismiss_toast() {
        let mut app = App::new();
        create(&mut app, "x", at(0));
        assert!(app.toast.is_visible());
        update(&mut app, Action::DismissToast, at(1));
        assert!(!app.toast.is_visible());
    }
}
