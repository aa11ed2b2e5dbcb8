//! # Core Application Logic
//!
//! Taskdeck's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Task, query, layout  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ViewModel            │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │ Surface trait
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: The `Task` entity, its status cycle and validation
//! - [`query`]: Filtering and sorting into the visible list
//! - [`layout`]: Responsive column widths and title truncation
//! - [`toast`]: The single-deadline status message
//! - [`form`]: The create/edit form draft
//! - [`keymap`]: Key events → actions, per mode
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: The derived `ViewModel` handed to the surface
//! - [`controller`]: Ties it together behind the `Surface` seam
//! - [`config`]: Settings from file, env and CLI

pub mod action;
pub mod clock;
pub mod config;
pub mod controller;
pub mod form;
pub mod keymap;
pub mod layout;
pub mod query;
pub mod state;
pub mod task;
pub mod toast;
pub mod view;
