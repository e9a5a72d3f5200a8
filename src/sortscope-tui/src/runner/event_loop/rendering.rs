//! Rendering logic: drawing the UI to the terminal.

use anyhow::Result;
use ratatui::Frame;

use crate::runner::terminal::SortscopeTerminal;
use crate::views::{HelpView, MainView, PromptView};

use super::core::EventLoop;

impl EventLoop {
    /// Draws a frame and records the array version it shows.
    pub(super) fn render(&mut self, terminal: &mut SortscopeTerminal) -> Result<()> {
        let version = self.controller.array().version();
        terminal.draw(|frame| self.draw(frame))?;
        self.state.mark_drawn(version);
        Ok(())
    }

    /// Draws the main view and any open overlay.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let values = self.controller.snapshot();
        let sorted = self.active_run_finished();

        let main = MainView::new(&values, self.controller.settings(), &self.state)
            .with_sorted(sorted);
        frame.render_widget(main, area);

        if let Some(prompt) = self.state.prompt.as_ref() {
            frame.render_widget(PromptView::new(prompt), area);
        } else if self.state.show_help {
            frame.render_widget(HelpView::new(&self.mapper), area);
        }
    }

    /// Whether the shown array is the result of a completed run.
    fn active_run_finished(&self) -> bool {
        self.state.active.is_none()
            && self
                .state
                .last_outcome
                .as_ref()
                .is_some_and(|outcome| outcome.is_completed())
    }
}
