use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::keymap::Key;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    Paste(String), // Bracketed paste, delivered to forms as typed characters
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            to_key(key_event).map(TuiEvent::Key)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Maps a crossterm key press onto the backend-independent `Key`.
/// Releases and repeats are dropped.
pub fn to_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::Interrupt,
        (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => return None,
        (_, KeyCode::Char(c)) => Key::Char(c),
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        (_, KeyCode::Left) => Key::Left,
        (_, KeyCode::Right) => Key::Right,
        (_, KeyCode::Enter) => Key::Enter,
        (_, KeyCode::Esc) => Key::Escape,
        (_, KeyCode::Tab) => Key::Tab,
        (_, KeyCode::BackTab) => Key::BackTab,
        (_, KeyCode::Backspace) => Key::Backspace,
        (_, KeyCode::Delete) => Key::Delete,
        _ => return None,
    };
    Some(key)
}

/// Pasted text as key presses. Line breaks are dropped since every form
/// field is single-line.
pub fn paste_keys(text: &str) -> impl Iterator<Item = Key> + '_ {
    text.chars()
        .filter(|c| !c.is_control())
        .map(Key::Char)
}
