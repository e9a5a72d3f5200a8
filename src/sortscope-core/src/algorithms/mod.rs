//! The animated sorting algorithms.
//!
//! Each algorithm drives a [`SortContext`]: it reads and mutates the shared
//! array through the context, calls [`SortContext::step`] after every
//! observable mutation and returns as soon as
//! [`SortContext::is_cancelled`] reports true. None of them can fail;
//! arrays of length 0 or 1 are left untouched.

mod bubble;
mod merge;
mod selection;

pub use bubble::bubble_sort;
pub use merge::{merge_runs, merge_sort};
pub use selection::selection_sort;

use crate::order::Algorithm;
use crate::runner::SortContext;

/// Runs `algorithm` to completion or cancellation.
pub fn run(algorithm: Algorithm, ctx: &mut SortContext<'_>) {
    match algorithm {
        Algorithm::Bubble => bubble_sort(ctx),
        Algorithm::Selection => selection_sort(ctx),
        Algorithm::Merge => merge_sort(ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio_util::sync::CancellationToken;

    use crate::array::SharedArray;
    use crate::order::{Algorithm, SortOrder};
    use crate::runner::{
        EventSink, NullSink, Pacer, RecordingSink, SortContext, SortEvent, SortStats, Step,
    };

    /// Sorts `values` with zero delay and returns the result, counters and steps.
    pub fn sort(values: &[i32], order: SortOrder, algorithm: Algorithm) -> (Vec<i32>, SortStats, Vec<Step>) {
        let array = SharedArray::from_values(values.to_vec());
        let cancel = CancellationToken::new();
        let pacer = Pacer::new(0);
        let sink = RecordingSink::new();
        let mut ctx = SortContext::new(1, &array, order, &cancel, &pacer, &sink);
        super::run(algorithm, &mut ctx);
        assert!(!ctx.was_interrupted());
        let stats = ctx.stats();
        (array.snapshot(), stats, sink.steps())
    }

    /// Runs with a token that is already cancelled.
    pub fn sort_cancelled(values: &[i32], algorithm: Algorithm) -> (Vec<i32>, SortStats) {
        let array = SharedArray::from_values(values.to_vec());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let pacer = Pacer::new(0);
        let mut ctx = SortContext::new(1, &array, SortOrder::Descending, &cancel, &pacer, &NullSink);
        super::run(algorithm, &mut ctx);
        (array.snapshot(), ctx.stats())
    }

    /// Cancels `token` as soon as the `k`-th step is published.
    pub struct CancelAfter<'a> {
        token: &'a CancellationToken,
        remaining: AtomicUsize,
    }

    impl<'a> CancelAfter<'a> {
        pub fn new(token: &'a CancellationToken, k: usize) -> Self {
            Self {
                token,
                remaining: AtomicUsize::new(k),
            }
        }
    }

    impl EventSink for CancelAfter<'_> {
        fn emit(&self, event: SortEvent) {
            if matches!(event, SortEvent::Step { .. })
                && self.remaining.fetch_sub(1, Ordering::SeqCst) == 1
            {
                self.token.cancel();
            }
        }
    }

    /// Runs with zero delay and cancels right after the `k`-th step.
    ///
    /// Returns the array as left behind, the counters and whether the
    /// algorithm observed the cancellation.
    pub fn sort_cancelled_after(
        values: &[i32],
        order: SortOrder,
        algorithm: Algorithm,
        k: usize,
    ) -> (Vec<i32>, SortStats, bool) {
        let array = SharedArray::from_values(values.to_vec());
        let cancel = CancellationToken::new();
        let pacer = Pacer::new(0);
        let sink = CancelAfter::new(&cancel, k);
        let mut ctx = SortContext::new(1, &array, order, &cancel, &pacer, &sink);
        super::run(algorithm, &mut ctx);
        (array.snapshot(), ctx.stats(), ctx.was_interrupted())
    }

    /// Multiset comparison.
    pub fn same_elements(a: &[i32], b: &[i32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}
