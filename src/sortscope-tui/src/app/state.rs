//! UI state that lives next to the controller.

use sortscope_core::{Algorithm, BarScale, Completion, RunId, SortEvent, SortOutcome};

use crate::prompt::PromptState;

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Neutral information.
    Info,
    /// A run completed.
    Success,
    /// A run was cancelled or a request was refused.
    Warning,
    /// Input was rejected.
    Error,
}

/// Message shown in the status line until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Severity.
    pub level: StatusLevel,
}

impl StatusMessage {
    /// Creates a message.
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Run currently shown as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRun {
    /// Run identifier.
    pub run: RunId,
    /// Algorithm being animated.
    pub algorithm: Algorithm,
    /// Steps seen so far.
    pub steps: u64,
}

/// Application state for the TUI.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Open prompt, if any. Takes all keyboard input.
    pub prompt: Option<PromptState>,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Bar scaling mode.
    pub scale: BarScale,
    /// Status line content.
    pub status: Option<StatusMessage>,
    /// Run currently animating.
    pub active: Option<ActiveRun>,
    /// Indices touched by the latest step.
    pub highlight: (Option<usize>, Option<usize>),
    /// Last run that finished.
    pub last_outcome: Option<SortOutcome>,
    /// Runs up to this id belong to a replaced array; their events are dropped.
    pub retired_through: Option<RunId>,
    /// Array version at the last draw.
    pub drawn_version: Option<u64>,
    /// Whether something other than the array changed since the last draw.
    pub dirty: bool,
    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state with the given scale.
    pub fn new(scale: BarScale) -> Self {
        Self {
            prompt: None,
            show_help: false,
            scale,
            status: None,
            active: None,
            highlight: (None, None),
            last_outcome: None,
            retired_through: None,
            drawn_version: None,
            dirty: true,
            should_quit: false,
        }
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage::new(text, level));
        self.dirty = true;
    }

    /// Shows an info message.
    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Info);
    }

    /// Shows an error message.
    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusLevel::Error);
    }

    /// Opens a prompt, closing help.
    pub fn open_prompt(&mut self, prompt: PromptState) {
        self.prompt = Some(prompt);
        self.show_help = false;
        self.dirty = true;
    }

    /// Closes the prompt.
    pub fn close_prompt(&mut self) -> Option<PromptState> {
        self.dirty = true;
        self.prompt.take()
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.dirty = true;
    }

    /// Flips the bar scale and returns it.
    pub fn toggle_scale(&mut self) -> BarScale {
        self.scale = match self.scale {
            BarScale::Fit => BarScale::Absolute,
            BarScale::Absolute => BarScale::Fit,
        };
        self.dirty = true;
        self.scale
    }

    /// Requests exit.
    pub fn set_quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a redraw is due for an array at `version`.
    pub fn needs_redraw(&self, version: u64) -> bool {
        self.dirty || self.drawn_version != Some(version)
    }

    /// Records a completed draw.
    pub fn mark_drawn(&mut self, version: u64) {
        self.drawn_version = Some(version);
        self.dirty = false;
    }

    /// Clears run display state after the array was replaced.
    ///
    /// Events of `last_run` and older arrive late and are ignored from now on.
    pub fn array_replaced(&mut self, last_run: Option<RunId>, message: impl Into<String>) {
        if let Some(run) = last_run {
            self.retired_through = Some(self.retired_through.map_or(run, |r| r.max(run)));
        }
        self.active = None;
        self.highlight = (None, None);
        self.last_outcome = None;
        self.info(message);
    }

    /// Whether events of `run` should no longer touch the display.
    pub fn is_retired(&self, run: RunId) -> bool {
        self.retired_through.is_some_and(|r| run <= r)
    }

    /// Folds a sort event into the display state.
    pub fn apply_event(&mut self, event: &SortEvent) {
        if self.is_retired(event.run()) {
            return;
        }
        match event {
            SortEvent::Started { run, algorithm, .. } => {
                self.active = Some(ActiveRun {
                    run: *run,
                    algorithm: *algorithm,
                    steps: 0,
                });
                self.highlight = (None, None);
                self.info(format!("{} running...", algorithm.display_name()));
            }
            SortEvent::Step { run, step } => {
                if let Some(active) = self.active.as_mut().filter(|a| a.run == *run) {
                    active.steps = step.seq;
                    let (first, second) = step.kind.touched();
                    self.highlight = (Some(first), second);
                    self.dirty = true;
                }
            }
            SortEvent::Finished(outcome) => {
                if self.active.is_some_and(|a| a.run == outcome.run) {
                    self.active = None;
                }
                self.highlight = (None, None);
                let name = outcome.algorithm.display_name();
                match outcome.completion {
                    Completion::Completed => self.set_status(
                        format!(
                            "{name} finished: {} steps, {} comparisons in {} ms",
                            outcome.stats.steps, outcome.stats.comparisons, outcome.elapsed_ms
                        ),
                        StatusLevel::Success,
                    ),
                    Completion::Cancelled => self.set_status(
                        format!("{name} stopped after {} steps", outcome.stats.steps),
                        StatusLevel::Warning,
                    ),
                }
                self.last_outcome = Some(outcome.clone());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BarScale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::{SortOrder, SortStats, Step, StepKind};

    fn outcome(run: RunId, completion: Completion) -> SortOutcome {
        SortOutcome {
            run,
            algorithm: Algorithm::Bubble,
            order: SortOrder::Descending,
            completion,
            stats: SortStats {
                comparisons: 6,
                swaps: 2,
                writes: 0,
                steps: 6,
            },
            elapsed_ms: 30,
        }
    }

    #[test]
    fn test_event_sequence_updates_state() {
        let mut state = AppState::default();
        state.apply_event(&SortEvent::Started {
            run: 1,
            algorithm: Algorithm::Bubble,
            order: SortOrder::Descending,
            len: 4,
        });
        assert_eq!(state.active.map(|a| a.algorithm), Some(Algorithm::Bubble));

        state.apply_event(&SortEvent::Step {
            run: 1,
            step: Step {
                seq: 3,
                kind: StepKind::Compare {
                    left: 2,
                    right: 3,
                    swapped: true,
                },
            },
        });
        assert_eq!(state.highlight, (Some(2), Some(3)));
        assert_eq!(state.active.map(|a| a.steps), Some(3));

        state.apply_event(&SortEvent::Finished(outcome(1, Completion::Completed)));
        assert!(state.active.is_none());
        assert_eq!(state.highlight, (None, None));
        let status = state.status.clone().unwrap();
        assert_eq!(status.level, StatusLevel::Success);
        assert!(status.text.starts_with("Bubble Sort finished: 6 steps"));
    }

    #[test]
    fn test_stale_steps_are_ignored() {
        let mut state = AppState::default();
        state.apply_event(&SortEvent::Started {
            run: 2,
            algorithm: Algorithm::Merge,
            order: SortOrder::Ascending,
            len: 4,
        });
        state.apply_event(&SortEvent::Step {
            run: 1,
            step: Step {
                seq: 9,
                kind: StepKind::Write { index: 0, value: 1 },
            },
        });
        assert_eq!(state.highlight, (None, None));
        assert_eq!(state.active.map(|a| a.steps), Some(0));
    }

    #[test]
    fn test_cancelled_outcome_warns() {
        let mut state = AppState::default();
        state.apply_event(&SortEvent::Finished(outcome(1, Completion::Cancelled)));
        let status = state.status.unwrap();
        assert_eq!(status.level, StatusLevel::Warning);
        assert_eq!(status.text, "Bubble Sort stopped after 6 steps");
    }

    #[test]
    fn test_late_finish_after_replacement_is_ignored() {
        let mut state = AppState::default();
        state.apply_event(&SortEvent::Started {
            run: 3,
            algorithm: Algorithm::Bubble,
            order: SortOrder::Descending,
            len: 50,
        });
        state.array_replaced(Some(3), "Array size: 55");
        state.apply_event(&SortEvent::Finished(outcome(3, Completion::Cancelled)));

        assert_eq!(state.status.clone().unwrap().text, "Array size: 55");
        assert!(state.last_outcome.is_none());
        assert!(state.active.is_none());

        state.apply_event(&SortEvent::Finished(outcome(4, Completion::Completed)));
        assert_eq!(state.last_outcome.map(|o| o.run), Some(4));
    }

    #[test]
    fn test_redraw_tracking() {
        let mut state = AppState::default();
        assert!(state.needs_redraw(0));
        state.mark_drawn(0);
        assert!(!state.needs_redraw(0));
        assert!(state.needs_redraw(1));
        state.toggle_help();
        assert!(state.needs_redraw(0));
    }

    #[test]
    fn test_toggle_scale() {
        let mut state = AppState::default();
        assert_eq!(state.toggle_scale(), BarScale::Absolute);
        assert_eq!(state.toggle_scale(), BarScale::Fit);
    }
}
