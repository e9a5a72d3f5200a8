//! Terminal setup, teardown, and management.
//!
//! The terminal is restored by an RAII guard when [`SortscopeTerminal`] is
//! dropped, and by a panic hook if the application panics while the TUI
//! owns the screen.

use std::io::{IsTerminal, Stdout, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};
use crossterm::{
    cursor, execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Track whether the panic hook has been installed to avoid installing it multiple times.
static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// RAII guard that restores the terminal on drop.
///
/// Only the features enabled during initialization are disabled again.
pub struct TerminalGuard {
    /// Whether we're using alternate screen
    alternate_screen: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal_impl(self.alternate_screen);
    }
}

/// Configuration options for terminal initialization.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Use alternate screen buffer (preserves scrollback)
    pub alternate_screen: bool,
    /// Terminal title
    pub title: Option<String>,
    /// Clear screen on start
    pub clear_on_start: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            title: Some("Sortscope".to_string()),
            clear_on_start: true,
        }
    }
}

impl TerminalOptions {
    /// Create a new `TerminalOptions` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to use the alternate screen buffer.
    pub fn alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    /// Set the terminal title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set whether to clear the screen on start.
    pub fn clear_on_start(mut self, enabled: bool) -> Self {
        self.clear_on_start = enabled;
        self
    }
}

/// Wrapper around the ratatui terminal with Sortscope setup.
pub struct SortscopeTerminal {
    /// The underlying ratatui terminal
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    /// RAII guard for cleanup
    _guard: TerminalGuard,
}

impl SortscopeTerminal {
    /// Create a new terminal with default full-screen mode.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not a terminal or raw mode cannot be
    /// enabled.
    pub fn new() -> Result<Self> {
        Self::with_options(TerminalOptions::default())
    }

    /// Create a terminal with custom options.
    pub fn with_options(options: TerminalOptions) -> Result<Self> {
        if !is_terminal() {
            bail!("sortscope needs an interactive terminal; use `sortscope sort` for headless runs");
        }
        // Build the guard first so a failure halfway through still restores.
        let guard = TerminalGuard {
            alternate_screen: options.alternate_screen,
        };
        init_terminal(&options)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Draw a frame to the terminal.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

/// Initialize the terminal with the given options.
///
/// Enables raw mode and installs a panic hook to restore the terminal on panic.
fn init_terminal(options: &TerminalOptions) -> Result<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = stdout();

    if options.alternate_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }

    if options.clear_on_start {
        execute!(stdout, Clear(ClearType::All))?;
    }

    execute!(stdout, cursor::Hide)?;

    if let Some(ref title) = options.title {
        execute!(stdout, SetTitle(title))?;
    }

    Ok(())
}

/// Restore terminal to normal state.
///
/// Called by the `TerminalGuard` drop implementation and by the panic hook.
fn restore_terminal_impl(alternate_screen: bool) -> Result<()> {
    let mut stdout = stdout();

    execute!(stdout, cursor::Show)?;

    if alternate_screen {
        execute!(stdout, LeaveAlternateScreen)?;
    }

    disable_raw_mode()?;

    Ok(())
}

/// Restore terminal to normal state (public API).
///
/// Assumes the alternate screen was entered.
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl(true)
}

/// Install a panic hook that restores the terminal.
///
/// The hook is only installed once, even if called multiple times.
fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();

        original_hook(panic_info);

        if std::env::var("RUST_BACKTRACE").is_err() {
            eprintln!();
            eprintln!("\x1b[1;33mTip:\x1b[0m For a full backtrace, run with RUST_BACKTRACE=1");
        }
    }));
}

/// Check if stdout is connected to a terminal.
pub fn is_terminal() -> bool {
    stdout().is_terminal()
}
