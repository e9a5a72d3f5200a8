//! # Sortscope TUI
//!
//! Terminal front end for the Sortscope sorting visualizer.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  AppRunner ── SortscopeTerminal (raw mode, restore)  │
//! │      │                                               │
//! │  EventLoop ── tokio::select! { keys, sort events,    │
//! │      │                         frame tick }          │
//! │      ├── ActionMapper  (key → KeyAction)             │
//! │      ├── Controller    (settings, array, runner)     │
//! │      └── AppState      (prompt, help, status, run)   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Main Components
//!
//! - [`AppRunner`] - High-level runner for starting the TUI
//! - [`EventLoop`] - Main event loop
//! - [`Controller`] - Applies user requests to the array and runner
//! - [`ActionMapper`] - Key binding configuration

pub mod actions;
pub mod app;
pub mod controller;
pub mod error;
pub mod prompt;
pub mod runner;
pub mod views;

pub use actions::{ActionContext, ActionMapper, KeyAction, KeyBinding};
pub use app::{AppState, StatusLevel, StatusMessage};
pub use controller::Controller;
pub use error::{ControlError, InputError};
pub use prompt::{PromptKind, PromptState, PromptValue};
pub use runner::{AppExitInfo, AppRunner, EventLoop, SortscopeTerminal, TerminalOptions};
