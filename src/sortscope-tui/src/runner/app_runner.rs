//! High-level application runner for the Sortscope TUI.
//!
//! ```rust,ignore
//! use sortscope_tui::runner::AppRunner;
//!
//! let exit_info = AppRunner::new(settings).with_seed(Some(7)).run().await?;
//! println!("last run: {:?}", exit_info.last_outcome);
//! ```

use anyhow::{Context, Result};
use sortscope_core::{Settings, SortOutcome};

use super::event_loop::{DEFAULT_FPS, EventLoop};
use super::terminal::{SortscopeTerminal, TerminalOptions};
use crate::controller::Controller;

/// What the session ended with.
#[derive(Debug, Clone)]
pub struct AppExitInfo {
    /// Settings at exit, including changes made with keys and prompts.
    pub settings: Settings,
    /// Last run that finished during the session.
    pub last_outcome: Option<SortOutcome>,
}

/// Sets up the terminal, runs the event loop and restores the terminal.
#[derive(Debug, Clone)]
pub struct AppRunner {
    settings: Settings,
    seed: Option<u64>,
    fps: u32,
    terminal_options: TerminalOptions,
}

impl AppRunner {
    /// Creates a runner for `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            seed: None,
            fps: DEFAULT_FPS,
            terminal_options: TerminalOptions::default(),
        }
    }

    /// Seeds array generation.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the redraw rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Sets terminal options.
    pub fn with_terminal_options(mut self, options: TerminalOptions) -> Self {
        self.terminal_options = options;
        self
    }

    /// Runs the TUI until the user quits.
    pub async fn run(self) -> Result<AppExitInfo> {
        let controller = Controller::new(self.settings, self.seed)
            .context("failed to generate the initial array")?;
        let mut event_loop = EventLoop::new(controller).with_fps(self.fps);

        tracing::info!(
            size = event_loop.controller().settings().size,
            seed = ?self.seed,
            "starting TUI"
        );

        let mut terminal = SortscopeTerminal::with_options(self.terminal_options)?;
        let result = event_loop.run(&mut terminal).await;
        drop(terminal);

        result?;
        tracing::info!("TUI exited");
        Ok(AppExitInfo {
            settings: event_loop.controller().settings().clone(),
            last_outcome: event_loop.state.last_outcome.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_builder() {
        let runner = AppRunner::new(Settings::default())
            .with_seed(Some(3))
            .with_fps(30)
            .with_terminal_options(TerminalOptions::new().title("test"));
        assert_eq!(runner.seed, Some(3));
        assert_eq!(runner.fps, 30);
        assert_eq!(runner.terminal_options.title.as_deref(), Some("test"));
    }
}
