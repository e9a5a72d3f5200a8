//! Sortscope CLI library.
//!
//! - `cli` - argument parsing and command dispatch
//! - `config` - config file and settings resolution
//! - `logging` - tracing subscriber setup
//! - `sort_cmd` - headless `sort` command

pub mod cli;
pub mod config;
pub mod logging;
pub mod sort_cmd;

pub use cli::{Cli, Commands, dispatch_command};
pub use config::{ConfigError, FileConfig, Validation};
