//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders view models,
//! and translates crossterm events into `core::keymap::Key` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws when something changed:
//!
//! - **Input**: every key goes through the controller, which renders once.
//! - **Resize**: a fresh render at the new size.
//! - **Toast deadline**: the poll timeout is cut to the time left on the
//!   pending toast, so it disappears on schedule without busy-waiting.
//!   Otherwise the loop sleeps up to 500ms per poll.

mod component;
mod components;
mod event;
mod surface;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::Effect;
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Controller, Surface};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, paste_keys, poll_event_immediate, poll_event_timeout};
use crate::tui::surface::TerminalSurface;

/// Longest the loop blocks on input when no toast is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let app = App::from_config(&config);
    info!(
        "Starting with filter={:?} sort={:?} order={:?} toast={}ms",
        app.filter, app.sort_key, app.sort_order, config.toast_timeout_ms
    );

    let terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Dropped before the guard, so the terminal is restored on every exit path.
    let mut controller = Controller::new(
        app,
        TerminalSurface::new(terminal),
        SystemClock,
        Box::new(|| {
            ratatui::restore();
            info!("Terminal restored");
        }),
    );
    controller.render()?;

    'session: while controller.is_running() {
        let timeout = controller
            .time_until_next_tick()
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

        // Process the first event, then drain everything already queued.
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next.take() {
            if handle_event(&mut controller, event)? == Effect::Quit {
                break 'session;
            }
            next = poll_event_immediate()?;
        }

        controller.tick()?;
    }

    controller.shutdown();
    Ok(())
}

fn handle_event<S: Surface, C: Clock>(
    controller: &mut Controller<S, C>,
    event: TuiEvent,
) -> io::Result<Effect> {
    match event {
        TuiEvent::Key(key) => controller.handle_key(key),
        TuiEvent::Resize => {
            controller.render()?;
            Ok(Effect::None)
        }
        TuiEvent::Paste(text) => {
            let editing = controller
                .app()
                .mode
                .form()
                .is_some_and(|form| form.editing);
            if !editing {
                debug!("Ignoring paste outside an editing form field");
                return Ok(Effect::None);
            }
            for key in paste_keys(&text) {
                controller.handle_key(key)?;
            }
            Ok(Effect::None)
        }
    }
}
