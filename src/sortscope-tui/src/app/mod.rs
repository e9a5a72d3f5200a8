//! Application state module.

mod state;

pub use state::{ActiveRun, AppState, StatusLevel, StatusMessage};
