//! Key action mapping.
//!
//! - `key_action` - every action a key can trigger
//! - `context` - where a binding applies
//! - `binding` - a single key binding
//! - `mapper` - lookup from key events to actions
//! - `key_utils` - key formatting for the help overlay

mod binding;
mod context;
mod key_action;
mod key_utils;
mod mapper;

pub use binding::KeyBinding;
pub use context::ActionContext;
pub use key_action::KeyAction;
pub use key_utils::format_key;
pub use mapper::ActionMapper;
