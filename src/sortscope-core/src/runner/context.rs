//! The algorithm's window onto the shared array.

use std::ops::RangeInclusive;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::events::{EventSink, RunId, SortEvent, SortStats, Step, StepKind};
use super::pacer::{Pause, Pacer};
use crate::array::SharedArray;
use crate::order::SortOrder;

/// Everything an algorithm needs for one run.
///
/// Mutations go through the shared array and are counted; [`SortContext::step`]
/// publishes the step and then waits out the pacing delay.
pub struct SortContext<'a> {
    run: RunId,
    array: &'a SharedArray,
    order: SortOrder,
    cancel: &'a CancellationToken,
    pacer: &'a Pacer,
    sink: &'a dyn EventSink,
    stats: SortStats,
    interrupted: bool,
}

impl<'a> SortContext<'a> {
    /// Creates a context for run `run`.
    pub fn new(
        run: RunId,
        array: &'a SharedArray,
        order: SortOrder,
        cancel: &'a CancellationToken,
        pacer: &'a Pacer,
        sink: &'a dyn EventSink,
    ) -> Self {
        Self {
            run,
            array,
            order,
            cancel,
            pacer,
            sink,
            stats: SortStats::default(),
            interrupted: false,
        }
    }

    /// Array length.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns true when the array is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Direction of this run.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Polls the cancellation token. Once it reports true the run counts
    /// as cancelled.
    pub fn is_cancelled(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            self.interrupted = true;
        }
        self.interrupted
    }

    /// Whether the algorithm observed cancellation.
    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Reads one element.
    pub fn get(&self, index: usize) -> i32 {
        self.array.get(index)
    }

    /// Copies an inclusive index range.
    pub fn read_range(&self, range: RangeInclusive<usize>) -> Vec<i32> {
        self.array.read_range(range)
    }

    /// Counted direction predicate, see [`SortOrder::precedes`].
    pub fn precedes(&mut self, a: i32, b: i32) -> bool {
        self.stats.comparisons += 1;
        self.order.precedes(a, b)
    }

    /// Adds comparisons performed outside [`SortContext::precedes`].
    pub fn record_comparisons(&mut self, count: u64) {
        self.stats.comparisons += count;
    }

    /// Exchanges two elements.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.stats.swaps += 1;
    }

    /// Overwrites one element.
    pub fn write(&mut self, index: usize, value: i32) {
        self.array.set(index, value);
        self.stats.writes += 1;
    }

    /// Publishes a step and waits for the pacing delay.
    pub fn step(&mut self, kind: StepKind) {
        self.stats.steps += 1;
        let step = Step {
            seq: self.stats.steps,
            kind,
        };
        self.sink.emit(SortEvent::Step {
            run: self.run,
            step,
        });

        if self.pacer.pause(self.cancel) == Pause::Interrupted {
            debug!(run = self.run, seq = step.seq, "pacing wait interrupted");
        }
    }

    /// Counters collected so far.
    pub fn stats(&self) -> SortStats {
        self.stats
    }
}
