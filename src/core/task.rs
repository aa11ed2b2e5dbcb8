//! # Task Model
//!
//! The `Task` entity and the only two ways it changes: `Task::create` and
//! `Task::update`. Both are pure; the caller supplies `now`.
//!
//! ```text
//! Task
//! ├── id: TaskId                  // opaque, unique per process, immutable
//! ├── title: String               // trimmed, never empty
//! ├── description: Option<String>
//! ├── status: TaskStatus          // Todo → InProgress → Done → Todo
//! ├── due_date: Option<NaiveDate>
//! ├── created_at: DateTime<Utc>   // immutable
//! └── updated_at: DateTime<Utc>   // always >= created_at
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::view::Tone;

/// Process-wide sequence mixed into every generated id.
static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque task identifier.
///
/// There is deliberately no `From<String>`: ids only come from
/// `TaskId::generate`, so they can't be mixed up with titles or other text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Composite of creation millis, a monotonic sequence and a random suffix.
    /// The sequence alone guarantees uniqueness within the process; the
    /// random part keeps ids from different runs apart.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "task-{}-{}-{}",
            now.timestamp_millis(),
            seq,
            &random[..8]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The status-advance cycle.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            TaskStatus::Todo => "⚪",
            TaskStatus::InProgress => "🟡",
            TaskStatus::Done => "✅",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TaskStatus::Todo => Tone::Normal,
            TaskStatus::InProgress => Tone::Warning,
            TaskStatus::Done => Tone::Success,
        }
    }

    /// Emoji and label, e.g. "🟡 In Progress".
    pub fn display(self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }
}

/// Rejected form or constructor input. Never fatal: the form stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty after trimming.
    EmptyTitle,
    /// Due date text was not `YYYY-MM-DD`.
    InvalidDueDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title is required"),
            ValidationError::InvalidDueDate(text) => {
                write!(f, "Due date '{text}' must be YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Field values submitted by the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update. Outer `None` leaves a field alone; for the optional
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Full replacement of the form-editable fields. Status is untouched.
    pub fn from_input(input: TaskInput) -> Result<Self, ValidationError> {
        let title = validate_title(&input.title)?;
        Ok(Self {
            title: Some(title),
            description: Some(input.description),
            status: None,
            due_date: Some(input.due_date),
        })
    }
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn create(input: TaskInput, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let title = validate_title(&input.title)?;
        Ok(Self {
            id: TaskId::generate(now),
            title,
            description: input.description,
            status: TaskStatus::Todo,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a new task with the patch applied and `updated_at` bumped.
    /// `self` is left untouched.
    pub fn update(&self, patch: TaskPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            status: patch.status.unwrap_or(self.status),
            due_date: patch.due_date.unwrap_or(self.due_date),
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        }
    }
}
