//! Keyboard handling and action dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::{ActionContext, KeyAction};
use crate::error::ControlError;
use crate::prompt::{PromptState, PromptValue};

use super::core::EventLoop;

impl EventLoop {
    /// Context used to resolve the next key.
    pub(super) fn current_context(&self) -> ActionContext {
        if self.state.prompt.is_some() {
            ActionContext::Prompt
        } else if self.state.show_help {
            ActionContext::Help
        } else {
            ActionContext::Global
        }
    }

    /// Maps a key press to an action and runs it.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let context = self.current_context();
        let action = self.mapper.get_action(key, context);
        tracing::trace!(?key, %context, ?action, "key");

        if action.is_none() {
            if context == ActionContext::Prompt
                && let KeyCode::Char(c) = key.code
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && let Some(prompt) = self.state.prompt.as_mut()
            {
                prompt.insert_char(c);
                self.state.dirty = true;
            }
            return;
        }

        self.handle_action(action).await;
    }

    /// Runs a resolved action.
    pub(super) async fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.state.set_quit(),
            KeyAction::Help => self.state.toggle_help(),
            KeyAction::Cancel => self.cancel(),

            KeyAction::Sort(algorithm) => {
                match self.controller.start(algorithm).await {
                    Ok(run) => self.last_started = Some(run),
                    Err(e) => self.report(e),
                }
            }
            KeyAction::Stop => {
                if !self.controller.stop() {
                    self.state.info("Nothing to stop");
                }
            }

            KeyAction::NewArray => {
                let prompt = PromptState::range(self.controller.settings());
                self.state.open_prompt(prompt);
            }
            KeyAction::EnterSize => {
                let prompt = PromptState::size(self.controller.settings());
                self.state.open_prompt(prompt);
            }
            KeyAction::GrowSize => {
                let size = self.controller.settings().grown_size();
                self.apply_size(size).await;
            }
            KeyAction::ShrinkSize => {
                let size = self.controller.settings().shrunk_size();
                self.apply_size(size).await;
            }

            KeyAction::Slower => {
                let delay = self.controller.settings().slower_delay();
                self.apply_speed(delay);
            }
            KeyAction::Faster => {
                let delay = self.controller.settings().faster_delay();
                self.apply_speed(delay);
            }
            KeyAction::ToggleOrder => {
                let order = self.controller.toggle_order();
                self.state.info(format!("Next run sorts {order}"));
            }
            KeyAction::ToggleScale => {
                let scale = self.state.toggle_scale();
                self.state.info(format!("Bar scale: {scale}"));
            }

            KeyAction::Submit => self.submit_prompt().await,
            KeyAction::NextField => self.edit_prompt(PromptState::next_field),
            KeyAction::PrevField => self.edit_prompt(PromptState::prev_field),
            KeyAction::Backspace => self.edit_prompt(PromptState::backspace),

            KeyAction::None => {}
        }
    }

    /// Closes the topmost overlay, otherwise stops the running sort.
    fn cancel(&mut self) {
        if self.state.prompt.is_some() {
            self.state.close_prompt();
        } else if self.state.show_help {
            self.state.toggle_help();
        } else if self.controller.stop() {
            self.state.info("Stopping...");
        }
    }

    fn edit_prompt(&mut self, edit: fn(&mut PromptState)) {
        if let Some(prompt) = self.state.prompt.as_mut() {
            edit(prompt);
            self.state.dirty = true;
        }
    }

    /// Applies the prompt. Invalid input keeps it open with the error shown.
    async fn submit_prompt(&mut self) {
        let Some(prompt) = self.state.prompt.as_mut() else {
            return;
        };
        self.state.dirty = true;
        let value = match prompt.submit() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("prompt rejected: {}", e);
                return;
            }
        };
        self.state.close_prompt();

        match value {
            PromptValue::Range { min, max } => match self.controller.set_range(min, max).await {
                Ok(()) => self.array_replaced(format!("New array with values in {min}..={max}")),
                Err(e) => self.report(e),
            },
            PromptValue::Size(size) => self.apply_size(size).await,
        }
    }

    async fn apply_size(&mut self, size: usize) {
        match self.controller.set_size(size).await {
            Ok(()) => self.array_replaced(format!("Array size: {size}")),
            Err(e) => self.report(e),
        }
    }

    fn apply_speed(&mut self, delay_ms: u64) {
        match self.controller.set_speed(delay_ms) {
            Ok(()) => self.state.info(format!("Delay: {delay_ms} ms")),
            Err(e) => self.state.error(e.to_string()),
        }
    }

    /// Resets run display state after the array was regenerated.
    fn array_replaced(&mut self, message: String) {
        self.state.array_replaced(self.last_started, message);
    }

    fn report(&mut self, error: ControlError) {
        tracing::warn!("request failed: {}", error);
        self.state.error(error.to_string());
    }
}
