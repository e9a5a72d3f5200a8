//! Main event loop for the Sortscope TUI.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        EventLoop                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐  │
//! │  │ EventStream │  │ SortEvents  │  │   Frame ticker   │  │
//! │  │ (crossterm) │  │  (runner)   │  │ (redraw if dirty)│  │
//! │  └──────┬──────┘  └──────┬──────┘  └────────┬─────────┘  │
//! │         └────────── tokio::select! ─────────┘            │
//! │                          ▼                               │
//! │      ActionMapper ─▶ Controller / AppState ─▶ views      │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod core;
mod input;
mod rendering;


pub use self::core::{DEFAULT_FPS, EventLoop};
