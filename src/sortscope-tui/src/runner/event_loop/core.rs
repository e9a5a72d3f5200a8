//! Core EventLoop struct definition and main run loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use sortscope_core::RunId;
use tokio::time::MissedTickBehavior;

use crate::actions::ActionMapper;
use crate::app::AppState;
use crate::controller::Controller;
use crate::runner::terminal::SortscopeTerminal;

/// Frames per second used when none is configured.
pub const DEFAULT_FPS: u32 = 60;

// ============================================================================
// EVENT LOOP STRUCT
// ============================================================================

/// Main event loop for the Sortscope TUI.
///
/// Owns the controller and the display state. Keys are mapped to actions,
/// sort events are folded into [`AppState`], and the screen is redrawn on a
/// fixed tick whenever the array or the state changed.
pub struct EventLoop {
    /// Application state shown by the views.
    pub state: AppState,

    /// Settings, array and runner.
    pub(super) controller: Controller,

    /// Action mapper for keybindings.
    pub(super) mapper: ActionMapper,

    /// Time between frame ticks.
    pub(super) frame_interval: Duration,

    /// Most recent run started from this loop.
    pub(super) last_started: Option<RunId>,
}

impl EventLoop {
    /// Creates an event loop around `controller`.
    pub fn new(controller: Controller) -> Self {
        let state = AppState::new(controller.settings().scale);
        Self {
            state,
            controller,
            mapper: ActionMapper::default_bindings(),
            frame_interval: frame_interval(DEFAULT_FPS),
            last_started: None,
        }
    }

    /// Sets the redraw rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.frame_interval = frame_interval(fps);
        self
    }

    /// The controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Runs until the user quits, then stops any running sort.
    pub async fn run(&mut self, terminal: &mut SortscopeTerminal) -> Result<()> {
        let mut sort_events = self.controller.take_events();
        let mut input = EventStream::new();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.render(terminal)?;

        while !self.state.should_quit {
            tokio::select! {
                // Branch 1: terminal input (keys, resize)
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event).await,
                    Some(Err(e)) => {
                        tracing::error!("Terminal input error: {}", e);
                        self.state.set_quit();
                    }
                    None => self.state.set_quit(),
                },

                // Branch 2: sort worker events
                Some(event) = async {
                    match sort_events.as_mut() {
                        Some(rx) => rx.recv().await,
                        None => std::future::pending().await,
                    }
                } => {
                    self.state.apply_event(&event);
                }

                // Branch 3: frame tick
                _ = ticker.tick() => {
                    if self.state.needs_redraw(self.controller.array().version())
                        && let Err(e) = self.render(terminal)
                    {
                        tracing::error!("Error rendering frame: {}", e);
                    }
                }
            }
        }

        if let Some(outcome) = self.controller.shutdown().await {
            tracing::debug!(run = outcome.run, "sort stopped on exit");
        }
        Ok(())
    }

    /// Dispatches one terminal event.
    pub(super) async fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            Event::Resize(..) => self.state.dirty = true,
            _ => {}
        }
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
