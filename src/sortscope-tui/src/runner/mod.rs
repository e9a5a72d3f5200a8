//! Runner module for TUI execution.
//!
//! - [`AppRunner`]: sets up the terminal and runs the session
//! - [`SortscopeTerminal`]: terminal setup and restore
//! - [`EventLoop`]: input, sort events and redraws via `tokio::select!`

pub mod app_runner;
pub mod event_loop;
pub mod terminal;

pub use app_runner::{AppExitInfo, AppRunner};
pub use event_loop::EventLoop;
pub use terminal::{SortscopeTerminal, TerminalOptions, restore_terminal};
