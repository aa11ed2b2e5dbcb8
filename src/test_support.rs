//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

use crate::core::clock::ManualClock;
use crate::core::controller::{Controller, Surface};
use crate::core::form::TaskForm;
use crate::core::keymap::Key;
use crate::core::state::App;
use crate::core::task::{Task, TaskInput};
use crate::core::view::{TerminalSize, ViewModel};

/// A fixed instant plus `ms` milliseconds. Keeps tests independent of the
/// wall clock.
pub fn at(ms: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
        .single()
        .expect("valid base instant");
    base + Duration::milliseconds(ms)
}

pub fn input(title: &str) -> TaskInput {
    TaskInput {
        title: title.to_string(),
        description: None,
        due_date: None,
    }
}

/// A Todo task created `ms` after the base instant.
pub fn task_at(title: &str, ms: i64) -> Task {
    Task::create(input(title), at(ms)).expect("non-empty title")
}

pub fn task_due(title: &str, due: Option<(i32, u32, u32)>) -> Task {
    let due_date = due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid date"));
    Task::create(
        TaskInput {
            due_date,
            ..input(title)
        },
        at(0),
    )
    .expect("non-empty title")
}

pub fn app_with(tasks: Vec<Task>) -> App {
    App {
        tasks,
        ..App::new()
    }
}

/// Feeds each character of `text` to the form as a key press.
pub fn type_text(form: &mut TaskForm, text: &str) {
    for c in text.chars() {
        form.handle_key(&Key::Char(c));
    }
}

pub fn type_text_keys<S: Surface>(controller: &mut Controller<S, ManualClock>, text: &str) {
    for c in text.chars() {
        controller.handle_key(Key::Char(c)).expect("render succeeds");
    }
}

/// Keeps every view model it is asked to render.
pub struct RecordingSurface {
    pub size: TerminalSize,
    pub frames: Vec<ViewModel>,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: TerminalSize::new(width, height),
            frames: Vec::new(),
        }
    }

    pub fn last(&self) -> &ViewModel {
        self.frames.last().expect("at least one frame rendered")
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> io::Result<TerminalSize> {
        Ok(self.size)
    }

    fn render(&mut self, view: &ViewModel) -> io::Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }
}

/// An empty session on a `width`x24 recording surface with a manual clock
/// at `at(0)`. The returned clock handle drives the controller's time.
pub fn test_controller(width: u16) -> (Controller<RecordingSurface, ManualClock>, ManualClock) {
    let clock = ManualClock::new(at(0));
    let controller = Controller::new(
        App::new(),
        RecordingSurface::new(width, 24),
        clock.clone(),
        Box::new(|| {}),
    );
    (controller, clock)
}

/// Renders with a `TestBackend` and returns the buffer as text, one line
/// per row.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal.draw(draw).expect("draw succeeds");
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
