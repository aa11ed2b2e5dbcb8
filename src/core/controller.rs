//! # Session Controller
//!
//! Orchestrates one interactive session:
//!
//! ```text
//! Key ─▶ keymap::action_for ─▶ update(app, action, now) ─▶ view::build ─▶ Surface::render
//!                                     ▲
//! tick() ── toast deadline ───────────┘
//! ```
//!
//! Everything external is injected: the surface (rendering + terminal
//! size), the clock, and a shutdown hook. Nothing reads process globals.
//!
//! The toast deadline is the only timer. The caller's event loop waits at
//! most `time_until_next_tick()` for input and then calls `tick()`.
//! `shutdown()` cancels the pending toast and runs the hook exactly once;
//! `Drop` calls it too, so a dropped controller can't leave a deadline
//! pending.

use std::io;
use std::time::Duration;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::clock::Clock;
use crate::core::keymap::{self, Key};
use crate::core::state::App;
use crate::core::view::{self, TerminalSize, ViewModel};

/// Something that can show a `ViewModel` and report its own size.
pub trait Surface {
    /// Current terminal dimensions. Queried on every render.
    fn size(&self) -> io::Result<TerminalSize>;

    fn render(&mut self, view: &ViewModel) -> io::Result<()>;
}

/// Runs once when the session ends.
pub type ShutdownHook = Box<dyn FnOnce()>;

pub struct Controller<S: Surface, C: Clock> {
    app: App,
    surface: S,
    clock: C,
    on_shutdown: Option<ShutdownHook>,
    running: bool,
}

impl<S: Surface, C: Clock> Controller<S, C> {
    pub fn new(app: App, surface: S, clock: C, on_shutdown: ShutdownHook) -> Self {
        Self {
            app,
            surface,
            clock,
            on_shutdown: Some(on_shutdown),
            running: true,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Processes one key and renders the result.
    pub fn handle_key(&mut self, key: Key) -> io::Result<Effect> {
        if !self.running {
            return Ok(Effect::Quit);
        }
        debug!("Key {:?} in {} mode", key, self.app.mode.name());

        let Some(action) = keymap::action_for(&self.app.mode, key) else {
            return Ok(Effect::None);
        };
        self.dispatch(action)
    }

    /// Applies an action directly, bypassing the keymap.
    pub fn dispatch(&mut self, action: Action) -> io::Result<Effect> {
        if !self.running {
            return Ok(Effect::Quit);
        }
        let now = self.clock.now();
        self.app.toast.expire(now);
        let effect = update(&mut self.app, action, now);

        if effect == Effect::Quit {
            info!("Quit requested");
            self.shutdown();
            return Ok(effect);
        }
        self.render()?;
        Ok(effect)
    }

    /// Clears an expired toast. Renders only when something changed.
    pub fn tick(&mut self) -> io::Result<bool> {
        if !self.running {
            return Ok(false);
        }
        if self.app.toast.expire(self.clock.now()).is_some() {
            self.render()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// How long the event loop may block before the next `tick` is due.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.app.toast.remaining(self.clock.now())
    }

    /// Derives a fresh view model at the surface's current size and
    /// renders it. Also used after a resize.
    pub fn render(&mut self) -> io::Result<()> {
        if !self.running {
            return Ok(());
        }
        let size = self.surface.size()?;
        self.app.clamp_selection();
        let view = view::build(&self.app, size, self.clock.now());
        self.surface.render(&view)
    }

    /// Ends the session: cancels the pending toast, runs the hook. Safe to
    /// call more than once.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(toast) = self.app.toast.cancel() {
            debug!("Cancelled pending toast {:?} on shutdown", toast.message);
        }
        if let Some(hook) = self.on_shutdown.take() {
            hook();
        }
        info!("Session ended with {} task(s)", self.app.tasks.len());
    }
}

impl<S: Surface, C: Clock> Drop for Controller<S, C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
