//! A single cancellable sort invocation.

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::context::SortContext;
use super::events::{Completion, EventSink, RunId, SortEvent, SortOutcome};
use super::pacer::Pacer;
use crate::algorithms;
use crate::array::SharedArray;
use crate::error::{Result, SortError};
use crate::order::{Algorithm, SortOrder};

/// What to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRequest {
    /// Algorithm to animate.
    pub algorithm: Algorithm,
    /// Comparison direction for the whole run.
    pub order: SortOrder,
}

impl SortRequest {
    /// Creates a request.
    pub fn new(algorithm: Algorithm, order: SortOrder) -> Self {
        Self { algorithm, order }
    }
}

/// Runs one sort synchronously on the calling thread.
///
/// Emits `Started`, the steps and `Finished` to `sink`, pausing after each
/// step as configured by `pacer`.
pub fn run_sort(
    run: RunId,
    request: SortRequest,
    array: &SharedArray,
    pacer: &Pacer,
    cancel: &CancellationToken,
    sink: &dyn EventSink,
) -> SortOutcome {
    let started = Instant::now();
    let len = array.len();
    info!(
        run,
        algorithm = request.algorithm.id(),
        order = %request.order,
        len,
        delay_ms = pacer.delay_ms(),
        "sort started"
    );
    sink.emit(SortEvent::Started {
        run,
        algorithm: request.algorithm,
        order: request.order,
        len,
    });

    let mut ctx = SortContext::new(run, array, request.order, cancel, pacer, sink);
    algorithms::run(request.algorithm, &mut ctx);

    let completion = if ctx.was_interrupted() {
        Completion::Cancelled
    } else {
        Completion::Completed
    };
    let outcome = SortOutcome {
        run,
        algorithm: request.algorithm,
        order: request.order,
        completion,
        stats: ctx.stats(),
        elapsed_ms: started.elapsed().as_millis() as u64,
    };

    match completion {
        Completion::Completed => info!(
            run,
            steps = outcome.stats.steps,
            elapsed_ms = outcome.elapsed_ms,
            "sort finished"
        ),
        Completion::Cancelled => debug!(run, steps = outcome.stats.steps, "sort cancelled"),
    }
    sink.emit(SortEvent::Finished(outcome.clone()));
    outcome
}

/// Handle to a sort running on a blocking worker.
///
/// Dropping the handle detaches the worker; call [`SortTask::cancel`] and
/// [`SortTask::join`] to stop it deterministically.
#[derive(Debug)]
pub struct SortTask {
    run: RunId,
    request: SortRequest,
    cancel: CancellationToken,
    handle: JoinHandle<SortOutcome>,
}

impl SortTask {
    /// Spawns the worker. Must be called from within a tokio runtime.
    pub fn spawn(
        run: RunId,
        request: SortRequest,
        array: SharedArray,
        pacer: Pacer,
        events: mpsc::UnboundedSender<SortEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::task::spawn_blocking(move || {
            run_sort(run, request, &array, &pacer, &token, &events)
        });
        Self {
            run,
            request,
            cancel,
            handle,
        }
    }

    /// Run identifier.
    pub fn run(&self) -> RunId {
        self.run
    }

    /// The request being executed.
    pub fn request(&self) -> SortRequest {
        self.request
    }

    /// Requests cancellation; the worker stops at its next check.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns true when the worker has returned.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the worker and returns its outcome.
    pub async fn join(self) -> Result<SortOutcome> {
        self.handle
            .await
            .map_err(|e| SortError::Worker(e.to_string()))
    }
}
