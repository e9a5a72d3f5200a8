//! CLI styling and formatting.
//!
//! Defines ANSI colors and formatting for the CLI help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Sortscope CLI styled help theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        // Headers (USAGE, COMMANDS, OPTIONS) - Bold cyan
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        // Usage line - Green
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        // Literals (command names, flag names) - Bold green
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        // Placeholders (<VALUE>, [ARGS]) - Yellow
        .placeholder(AnsiColor::Yellow.on_default())
        // Errors - Bold red
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        // Valid values - Cyan
        .valid(AnsiColor::Cyan.on_default())
        // Invalid values - Yellow
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with examples and environment variables.
pub const AFTER_HELP: &str = "\
QUICK START
    sortscope                              Start the visualizer
    sortscope --size 80 --delay 20         Bigger array, faster steps
    sortscope sort merge --values 9,1,8,2  Sort once and print the result

ENVIRONMENT VARIABLES
    SORTSCOPE_CONFIG    Config file path (default: <config dir>/sortscope/config.toml)
    SORTSCOPE_LOG       Log filter, e.g. debug or sortscope_core=trace
    RUST_LOG            Fallback log filter";
