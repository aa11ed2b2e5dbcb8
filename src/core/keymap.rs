//! # Keymap
//!
//! The dispatch table from key events to `Action`s. Which table applies
//! depends on the current mode; form modes hand every key to the form.
//!
//! ```text
//! List            Detail        ConfirmDelete     Create / Edit
//! q   Quit        Esc  Back     y/Enter Delete    * → FormInput(key)
//! n   New                       n/Esc   Cancel
//! e   Edit
//! d   Delete
//! s   Status
//! ↑k  Up   ↓j Down
//! f   Filter
//! o   Sort key
//! r   Sort order
//! Enter Detail
//! Esc Dismiss toast
//! ```
//!
//! `Interrupt` (Ctrl+C) quits from every mode.

use crate::core::action::Action;
use crate::core::state::Mode;

/// A discrete key event, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    /// Ctrl+C or an external interrupt.
    Interrupt,
}

/// Key hints shown in the list footer.
pub const LIST_HELP: &str =
    "[N]ew [E]dit [D]elete [S]tatus [F]ilter [O]rder [R]everse [Enter] Details [Q]uit [↑/↓] Navigate";

pub fn action_for(mode: &Mode, key: Key) -> Option<Action> {
    if key == Key::Interrupt {
        return Some(Action::Quit);
    }

    match mode {
        Mode::List => list_action(key),
        Mode::Detail => match key {
            Key::Escape => Some(Action::CloseDetail),
            _ => None,
        },
        Mode::ConfirmDelete { .. } => match key {
            Key::Char('y') | Key::Enter => Some(Action::ConfirmDelete),
            Key::Char('n') | Key::Escape => Some(Action::CancelDelete),
            _ => None,
        },
        Mode::Create { .. } | Mode::Edit { .. } => Some(Action::FormInput(key)),
    }
}

fn list_action(key: Key) -> Option<Action> {
    let action = match key {
        Key::Char('q') => Action::Quit,
        Key::Char('n') => Action::NewTask,
        Key::Char('e') => Action::EditSelected,
        Key::Char('d') => Action::DeleteSelected,
        Key::Char('s') => Action::AdvanceStatus,
        Key::Up | Key::Char('k') => Action::SelectPrevious,
        Key::Down | Key::Char('j') => Action::SelectNext,
        Key::Char('f') => Action::CycleFilter,
        Key::Char('o') => Action::ToggleSortKey,
        Key::Char('r') => Action::ToggleSortOrder,
        Key::Enter => Action::OpenDetail,
        Key::Escape => Action::DismissToast,
        _ => return None,
    };
    Some(action)
}
