//! Events emitted by a sort run.
//!
//! A run produces exactly one [`SortEvent::Started`], then one
//! [`SortEvent::Step`] per observable mutation in algorithm order, and
//! finally one [`SortEvent::Finished`] carrying the [`SortOutcome`].

use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::order::{Algorithm, SortOrder};

/// Identifier of one sort invocation, increasing per runner.
pub type RunId = u64;

/// What happened during a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// Bubble sort compared two neighbours and possibly swapped them.
    Compare {
        /// Left index of the pair
        left: usize,
        /// Right index of the pair
        right: usize,
        /// Whether the pair was exchanged
        swapped: bool,
    },
    /// Selection sort placed the extreme element of the suffix.
    Place {
        /// Position being filled
        target: usize,
        /// Where the extreme element was found
        source: usize,
    },
    /// Merge sort wrote one merged element back into the array.
    Write {
        /// Position written
        index: usize,
        /// Value written
        value: i32,
    },
}

impl StepKind {
    /// Indices touched by this step, for highlighting.
    pub fn touched(&self) -> (usize, Option<usize>) {
        match *self {
            Self::Compare { left, right, .. } => (left, Some(right)),
            Self::Place { target, source } => (target, (source != target).then_some(source)),
            Self::Write { index, .. } => (index, None),
        }
    }
}

/// A numbered step of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position of the step within its run.
    pub seq: u64,
    /// What the step did.
    pub kind: StepKind,
}

/// Counters collected while a run executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Element comparisons performed.
    pub comparisons: u64,
    /// Element exchanges performed.
    pub swaps: u64,
    /// Single-element overwrites performed.
    pub writes: u64,
    /// Steps emitted.
    pub steps: u64,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// The algorithm ran to the end.
    Completed,
    /// The cancellation token stopped the algorithm early.
    Cancelled,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    /// Run identifier.
    pub run: RunId,
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Direction used.
    pub order: SortOrder,
    /// Whether the run completed or was cancelled.
    pub completion: Completion,
    /// Counters.
    pub stats: SortStats,
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: u64,
}

impl SortOutcome {
    /// Returns true when the run was not cancelled.
    pub fn is_completed(&self) -> bool {
        self.completion == Completion::Completed
    }
}

/// Events published by a running sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// A run began.
    Started {
        /// Run identifier
        run: RunId,
        /// Algorithm being run
        algorithm: Algorithm,
        /// Direction used
        order: SortOrder,
        /// Array length at start
        len: usize,
    },
    /// A mutation was applied; the display should refresh.
    Step {
        /// Run identifier
        run: RunId,
        /// The step
        step: Step,
    },
    /// A run ended.
    Finished(SortOutcome),
}

impl SortEvent {
    /// The run this event belongs to.
    pub fn run(&self) -> RunId {
        match self {
            Self::Started { run, .. } | Self::Step { run, .. } => *run,
            Self::Finished(outcome) => outcome.run,
        }
    }
}

// ============================================================
// SINKS
// ============================================================

/// Receives the events of a run, called from the worker thread.
pub trait EventSink: Send + Sync {
    /// Handles one event. Must not block for long.
    fn emit(&self, event: SortEvent);
}

impl EventSink for mpsc::UnboundedSender<SortEvent> {
    fn emit(&self, event: SortEvent) {
        // A dropped receiver only means nobody is watching anymore.
        let _ = self.send(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: SortEvent) {}
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SortEvent>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the recorded events.
    pub fn take(&self) -> Vec<SortEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Recorded steps, in order.
    pub fn steps(&self) -> Vec<Step> {
        self.take()
            .into_iter()
            .filter_map(|event| match event {
                SortEvent::Step { step, .. } => Some(step),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: SortEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
