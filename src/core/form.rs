//! # Task Form
//!
//! The create/edit form collaborator. It owns the draft (three text
//! buffers) and reports either a validated `TaskInput` or a cancel. The
//! task collection is never touched from here.
//!
//! The form has two sub-modes, like a modal editor:
//!
//! ```text
//!   navigate ──(e / Enter)──▶ editing
//!      ▲                        │
//!      └──(Enter / Esc)─────────┘
//!
//!   navigate: Tab/BackTab move focus, s submits, Esc/c cancels
//!   editing:  characters append, Backspace deletes, Tab moves focus
//! ```

use chrono::NaiveDate;
use log::warn;

use crate::core::keymap::Key;
use crate::core::task::{Task, TaskInput, ValidationError};

/// Text format of the due-date buffer.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    DueDate,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::DueDate];

    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::DueDate,
            FormField::Description => FormField::Title,
            FormField::DueDate => FormField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::DueDate => "Due Date",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "[Enter title]",
            FormField::Description => "[Optional]",
            FormField::DueDate => "[YYYY-MM-DD]",
        }
    }
}

/// What the form reports back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(TaskInput),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub kind: FormKind,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub focus: FormField,
    pub editing: bool,
    /// Last rejected submission, shown under the fields.
    pub error: Option<ValidationError>,
}

impl TaskForm {
    pub fn create() -> Self {
        Self {
            kind: FormKind::Create,
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            focus: FormField::Title,
            editing: false,
            error: None,
        }
    }

    /// Pre-populates the buffers from an existing task.
    pub fn edit(task: &Task) -> Self {
        Self {
            kind: FormKind::Edit,
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .map(|d| d.format(DUE_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            focus: FormField::Title,
            editing: false,
            error: None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::DueDate => &self.due_date,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::DueDate => &mut self.due_date,
        }
    }

    pub fn handle_key(&mut self, key: &Key) -> Option<FormEvent> {
        if self.editing {
            match key {
                Key::Enter | Key::Escape => self.editing = false,
                Key::Backspace | Key::Delete => {
                    self.buffer_mut().pop();
                }
                Key::Tab => self.focus = self.focus.next(),
                Key::BackTab => self.focus = self.focus.prev(),
                Key::Char(c) if !c.is_control() => self.buffer_mut().push(*c),
                _ => {}
            }
            return None;
        }

        match key {
            Key::Tab | Key::Down => self.focus = self.focus.next(),
            Key::BackTab | Key::Up => self.focus = self.focus.prev(),
            Key::Char('e') | Key::Enter => self.editing = true,
            Key::Char('s') => {
                return match self.to_input() {
                    Ok(input) => {
                        self.error = None;
                        Some(FormEvent::Submit(input))
                    }
                    Err(e) => {
                        self.reject(e);
                        None
                    }
                };
            }
            Key::Char('c') | Key::Escape => return Some(FormEvent::Cancel),
            _ => {}
        }
        None
    }

    /// Parses the draft. Blank optional fields become `None`.
    pub fn to_input(&self) -> Result<TaskInput, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let due_text = self.due_date.trim();
        let due_date = if due_text.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(due_text, DUE_DATE_FORMAT)
                    .map_err(|_| ValidationError::InvalidDueDate(due_text.to_string()))?,
            )
        };

        Ok(TaskInput {
            title: title.to_string(),
            description,
            due_date,
        })
    }

    /// Keeps the form open with `error` shown.
    pub fn reject(&mut self, error: ValidationError) {
        warn!("Form submission rejected: {}", error);
        self.error = Some(error);
    }
}
