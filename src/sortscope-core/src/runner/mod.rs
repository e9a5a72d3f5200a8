//! Sort execution: one cancellable worker per run.
//!
//! ```text
//!            start()                completion / cancellation
//!   Idle ──────────────▶ Running ──────────────────────────▶ Idle
//!                          │  ▲
//!                          └──┘ start() under StartPolicy::Preempt
//!                               cancels, awaits, then starts anew
//! ```
//!
//! The [`SortRunner`] owns the only writer of its [`SharedArray`]. A second
//! `start` never races the first: depending on [`StartPolicy`] it either
//! preempts (cancel + await) or is rejected.

mod context;
mod events;
mod pacer;
mod task;

pub use context::SortContext;
pub use events::{
    Completion, EventSink, NullSink, RecordingSink, RunId, SortEvent, SortOutcome, SortStats,
    Step, StepKind,
};
pub use pacer::{PAUSE_SLICE, Pacer, Pause};
pub use task::{SortRequest, SortTask, run_sort};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::array::SharedArray;
use crate::error::{Result, SortError};
use crate::order::{Algorithm, SortOrder};
use crate::settings::Settings;

/// What `start` does while another run is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPolicy {
    /// Cancel the active run, wait for it, then start.
    #[default]
    Preempt,
    /// Refuse with [`SortError::AlreadyRunning`].
    Reject,
}

/// Observable runner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStatus {
    /// No worker is mutating the array.
    Idle,
    /// A worker is active.
    Running {
        /// Active run
        run: RunId,
        /// Its algorithm
        algorithm: Algorithm,
    },
}

impl RunnerStatus {
    /// Returns true for [`RunnerStatus::Running`].
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// Starts, stops and tracks sort runs against one shared array.
#[derive(Debug)]
pub struct SortRunner {
    array: SharedArray,
    pacer: Pacer,
    policy: StartPolicy,
    order: SortOrder,
    next_run: RunId,
    current: Option<SortTask>,
    last_outcome: Option<SortOutcome>,
    events_tx: mpsc::UnboundedSender<SortEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<SortEvent>>,
}

impl SortRunner {
    /// Creates an idle runner.
    pub fn new(array: SharedArray, delay_ms: u64) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            array,
            pacer: Pacer::new(delay_ms),
            policy: StartPolicy::default(),
            order: SortOrder::default(),
            next_run: 1,
            current: None,
            last_outcome: None,
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Creates an idle runner configured from `settings`.
    pub fn from_settings(array: SharedArray, settings: &Settings) -> Self {
        Self::new(array, settings.delay_ms)
            .with_policy(settings.start_policy)
            .with_order(settings.order)
    }

    /// Sets the policy applied when `start` finds an active run.
    pub fn with_policy(mut self, policy: StartPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the order used by [`SortRunner::request`].
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Takes the event receiver. Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<SortEvent>> {
        self.events_rx.take()
    }

    /// The array this runner sorts.
    pub fn array(&self) -> &SharedArray {
        &self.array
    }

    /// Active start policy.
    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// Order applied to the next run.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Changes the order of the next run. An active run keeps its order.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Builds a request for `algorithm` using the current order.
    pub fn request(&self, algorithm: Algorithm) -> SortRequest {
        SortRequest::new(algorithm, self.order)
    }

    /// Current step delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.pacer.delay_ms()
    }

    /// Changes the step delay, including for the active run.
    pub fn set_delay(&self, delay_ms: u64) {
        self.pacer.set_delay_ms(delay_ms);
    }

    /// Current status.
    pub fn status(&self) -> RunnerStatus {
        match &self.current {
            Some(task) if !task.is_finished() => RunnerStatus::Running {
                run: task.run(),
                algorithm: task.request().algorithm,
            },
            _ => RunnerStatus::Idle,
        }
    }

    /// Returns true while a worker is active.
    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Outcome of the most recently joined run.
    pub fn last_outcome(&self) -> Option<&SortOutcome> {
        self.last_outcome.as_ref()
    }

    /// Starts a run on a blocking worker.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(&mut self, request: SortRequest) -> Result<RunId> {
        self.reap().await?;

        if let Some(task) = &self.current {
            match self.policy {
                StartPolicy::Reject => return Err(SortError::AlreadyRunning(task.run())),
                StartPolicy::Preempt => {
                    debug!(run = task.run(), "preempting active sort");
                    self.stop_and_wait().await?;
                }
            }
        }

        let run = self.next_run;
        self.next_run += 1;
        self.current = Some(SortTask::spawn(
            run,
            request,
            self.array.clone(),
            self.pacer.clone(),
            self.events_tx.clone(),
        ));
        Ok(run)
    }

    /// Requests cancellation of the active run without waiting.
    ///
    /// Returns true when there was a run to cancel.
    pub fn stop(&self) -> bool {
        match &self.current {
            Some(task) if !task.is_finished() => {
                debug!(run = task.run(), "stop requested");
                task.cancel();
                true
            }
            _ => false,
        }
    }

    /// Cancels the active run and waits for its worker.
    pub async fn stop_and_wait(&mut self) -> Result<Option<SortOutcome>> {
        if let Some(task) = &self.current {
            task.cancel();
        }
        self.wait().await
    }

    /// Waits for the active run to end on its own.
    pub async fn wait(&mut self) -> Result<Option<SortOutcome>> {
        let Some(task) = self.current.take() else {
            return Ok(None);
        };
        let outcome = task.join().await.inspect_err(|e| {
            warn!("sort worker did not finish cleanly: {e}");
        })?;
        self.last_outcome = Some(outcome.clone());
        Ok(Some(outcome))
    }

    /// Runs a sort on the calling thread, bypassing the worker.
    ///
    /// Fails with [`SortError::Busy`] while a worker is active.
    pub fn run_blocking(
        &mut self,
        request: SortRequest,
        sink: &dyn EventSink,
    ) -> Result<SortOutcome> {
        if self.is_running() {
            return Err(SortError::Busy);
        }
        let run = self.next_run;
        self.next_run += 1;
        let cancel = CancellationToken::new();
        let outcome = run_sort(run, request, &self.array, &self.pacer, &cancel, sink);
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Replaces the array contents. Fails with [`SortError::Busy`] while running.
    pub fn regenerate(&mut self, length: usize, min: i32, max: i32) -> Result<()> {
        if self.is_running() {
            return Err(SortError::Busy);
        }
        self.array.regenerate(length, min, max)?;
        Ok(())
    }

    /// Like [`SortRunner::regenerate`], drawing values from `rng`.
    pub fn regenerate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
        min: i32,
        max: i32,
    ) -> Result<()> {
        if self.is_running() {
            return Err(SortError::Busy);
        }
        self.array.regenerate_with(rng, length, min, max)?;
        Ok(())
    }

    /// Joins a worker that already returned, keeping its outcome.
    async fn reap(&mut self) -> Result<()> {
        if self.current.as_ref().is_some_and(SortTask::is_finished) {
            self.wait().await?;
        }
        Ok(())
    }
}

impl Drop for SortRunner {
    fn drop(&mut self) {
        if let Some(task) = &self.current {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::SortOrder;
    use std::time::Duration;

    fn runner(values: Vec<i32>, delay_ms: u64) -> SortRunner {
        SortRunner::new(SharedArray::from_values(values), delay_ms)
    }

    #[tokio::test]
    async fn test_start_and_wait_completes() {
        let mut runner = runner(vec![5, 3, 8, 1], 0);
        let mut events = runner.take_events().unwrap();

        let run = runner
            .start(SortRequest::new(Algorithm::Bubble, SortOrder::Descending))
            .await
            .unwrap();
        let outcome = runner.wait().await.unwrap().unwrap();

        assert_eq!(outcome.run, run);
        assert!(outcome.is_completed());
        assert_eq!(runner.array().snapshot(), vec![8, 5, 3, 1]);
        assert_eq!(runner.status(), RunnerStatus::Idle);

        let first = events.recv().await.unwrap();
        assert!(matches!(first, SortEvent::Started { len: 4, .. }));
        let mut steps = 0;
        let mut finished = None;
        while let Ok(event) = events.try_recv() {
            match event {
                SortEvent::Step { .. } => steps += 1,
                SortEvent::Finished(outcome) => finished = Some(outcome),
                SortEvent::Started { .. } => panic!("unexpected second start"),
            }
        }
        assert_eq!(steps, 6);
        assert_eq!(finished.unwrap().stats.steps, 6);
    }

    #[tokio::test]
    async fn test_stop_and_wait_cancels() {
        let values: Vec<i32> = (0..200).collect();
        let mut runner = runner(values, 20);
        runner
            .start(SortRequest::new(Algorithm::Bubble, SortOrder::Descending))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        let outcome = runner.stop_and_wait().await.unwrap().unwrap();
        assert_eq!(outcome.completion, Completion::Cancelled);
        assert!(outcome.stats.steps < 19_900);
        assert!(!runner.is_running());
        assert_eq!(runner.last_outcome(), Some(&outcome));
    }

    #[tokio::test]
    async fn test_preempt_policy_replaces_run() {
        let values: Vec<i32> = (0..100).collect();
        let mut runner = runner(values, 20);
        let first = runner
            .start(SortRequest::new(Algorithm::Bubble, SortOrder::Descending))
            .await
            .unwrap();
        let second = runner
            .start(SortRequest::new(Algorithm::Merge, SortOrder::Ascending))
            .await
            .unwrap();
        assert_eq!(second, first + 1);

        let previous = runner.last_outcome().unwrap();
        assert_eq!(previous.run, first);
        assert_eq!(previous.completion, Completion::Cancelled);

        runner.set_delay(0);
        let outcome = runner.wait().await.unwrap().unwrap();
        assert!(outcome.is_completed());
        assert!(SortOrder::Ascending.is_sorted(&runner.array().snapshot()));
    }

    #[tokio::test]
    async fn test_reject_policy_refuses_second_start() {
        let values: Vec<i32> = (0..100).collect();
        let mut runner = runner(values, 20).with_policy(StartPolicy::Reject);
        let first = runner
            .start(SortRequest::new(Algorithm::Selection, SortOrder::Descending))
            .await
            .unwrap();
        let err = runner
            .start(SortRequest::new(Algorithm::Merge, SortOrder::Descending))
            .await
            .unwrap_err();
        assert!(matches!(err, SortError::AlreadyRunning(run) if run == first));
        runner.stop_and_wait().await.unwrap();
    }

    #[tokio::test]
    async fn test_regenerate_while_running_is_busy() {
        let values: Vec<i32> = (0..100).collect();
        let mut runner = runner(values, 20);
        runner
            .start(SortRequest::new(Algorithm::Bubble, SortOrder::Descending))
            .await
            .unwrap();
        assert!(matches!(runner.regenerate(10, 0, 5), Err(SortError::Busy)));

        runner.stop_and_wait().await.unwrap();
        runner.regenerate(10, 0, 5).unwrap();
        assert_eq!(runner.array().len(), 10);
    }

    #[test]
    fn test_run_blocking_uses_runner_order() {
        let mut runner = runner(vec![4, 2, 2, 5], 0).with_order(SortOrder::Ascending);
        let sink = RecordingSink::new();
        let outcome = runner
            .run_blocking(runner.request(Algorithm::Selection), &sink)
            .unwrap();
        assert_eq!(outcome.order, SortOrder::Ascending);
        assert_eq!(runner.array().snapshot(), vec![2, 2, 4, 5]);
        assert_eq!(sink.steps().len(), 3);

        runner.set_order(SortOrder::Descending);
        let outcome = runner
            .run_blocking(runner.request(Algorithm::Bubble), &NullSink)
            .unwrap();
        assert_eq!(outcome.run, 2);
        assert_eq!(runner.array().snapshot(), vec![5, 4, 2, 2]);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            delay_ms: 120,
            order: SortOrder::Ascending,
            start_policy: StartPolicy::Reject,
            ..Settings::default()
        };
        let runner = SortRunner::from_settings(SharedArray::from_values(vec![1]), &settings);
        assert_eq!(runner.delay_ms(), 120);
        assert_eq!(runner.order(), SortOrder::Ascending);
        assert_eq!(runner.policy(), StartPolicy::Reject);
    }

    #[tokio::test]
    async fn test_stop_when_idle_is_noop() {
        let mut runner = runner(vec![1, 2], 0);
        assert!(!runner.stop());
        assert_eq!(runner.stop_and_wait().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_finished_run_is_reaped_on_next_start() {
        let mut runner = runner(vec![3, 1, 2], 0);
        let first = runner
            .start(SortRequest::new(Algorithm::Selection, SortOrder::Ascending))
            .await
            .unwrap();
        while runner.is_running() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        runner
            .start(SortRequest::new(Algorithm::Merge, SortOrder::Descending))
            .await
            .unwrap();
        let reaped = runner.last_outcome().unwrap();
        assert_eq!(reaped.run, first);
        assert!(reaped.is_completed());
        runner.wait().await.unwrap();
        assert_eq!(runner.array().snapshot(), vec![3, 2, 1]);
    }
}
