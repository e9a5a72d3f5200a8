//! Wires user requests to the array and the sort runner.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sortscope_core::settings::{MAX_DELAY_MS, SIZE_ENTRY_RANGE};
use sortscope_core::{
    Algorithm, RunId, RunnerStatus, Settings, SharedArray, SortEvent, SortOrder, SortOutcome,
    SortRunner,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::{ControlError, InputError};

/// Owns the settings, the shared array and the runner.
///
/// Every change that replaces the array first stops and awaits the active
/// sort. Rejected input leaves all state untouched.
#[derive(Debug)]
pub struct Controller {
    runner: SortRunner,
    settings: Settings,
    rng: Option<StdRng>,
}

impl Controller {
    /// Builds the initial array from `settings`.
    ///
    /// With a `seed`, every generated array is reproducible.
    pub fn new(settings: Settings, seed: Option<u64>) -> Result<Self, ControlError> {
        let (size, min, max) = (settings.size, settings.min, settings.max);
        let array = SharedArray::from_values(Vec::new());
        let runner = SortRunner::from_settings(array, &settings);
        let mut controller = Self {
            runner,
            settings,
            rng: seed.map(StdRng::seed_from_u64),
        };
        controller.regenerate(size, min, max)?;
        Ok(controller)
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The shared array.
    pub fn array(&self) -> &SharedArray {
        self.runner.array()
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<i32> {
        self.runner.array().snapshot()
    }

    /// Runner status.
    pub fn status(&self) -> RunnerStatus {
        self.runner.status()
    }

    /// Returns true while a sort runs.
    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    /// Outcome of the last joined run.
    pub fn last_outcome(&self) -> Option<&SortOutcome> {
        self.runner.last_outcome()
    }

    /// Takes the sort event receiver. Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<SortEvent>> {
        self.runner.take_events()
    }

    /// Regenerates the array with `size` elements.
    pub async fn set_size(&mut self, size: usize) -> Result<(), ControlError> {
        if !SIZE_ENTRY_RANGE.contains(&size) {
            return Err(InputError::OutOfRange {
                field: "size",
                value: size as i64,
                min: *SIZE_ENTRY_RANGE.start() as i64,
                max: *SIZE_ENTRY_RANGE.end() as i64,
            }
            .into());
        }
        self.runner.stop_and_wait().await?;
        self.regenerate(size, self.settings.min, self.settings.max)?;
        self.settings.size = size;
        info!(size, "array resized");
        Ok(())
    }

    /// Regenerates the array with values in `[min, max]`.
    pub async fn set_range(&mut self, min: i32, max: i32) -> Result<(), ControlError> {
        if min > max {
            return Err(InputError::MinGreaterThanMax { min, max }.into());
        }
        self.runner.stop_and_wait().await?;
        self.regenerate(self.settings.size, min, max)?;
        self.settings.min = min;
        self.settings.max = max;
        info!(min, max, "array regenerated with new range");
        Ok(())
    }

    /// Regenerates the array with the current size and range.
    pub async fn new_array(&mut self) -> Result<(), ControlError> {
        self.set_range(self.settings.min, self.settings.max).await
    }

    /// Changes the step delay, also for the running sort.
    pub fn set_speed(&mut self, delay_ms: u64) -> Result<(), InputError> {
        if delay_ms > MAX_DELAY_MS {
            return Err(InputError::OutOfRange {
                field: "delay",
                value: delay_ms as i64,
                min: 0,
                max: MAX_DELAY_MS as i64,
            });
        }
        self.settings.delay_ms = delay_ms;
        self.runner.set_delay(delay_ms);
        debug!(delay_ms, "delay changed");
        Ok(())
    }

    /// Sets the order of the next run.
    pub fn set_order(&mut self, descending: bool) {
        let order = SortOrder::from_descending(descending);
        self.settings.order = order;
        self.runner.set_order(order);
    }

    /// Flips the order of the next run and returns it.
    pub fn toggle_order(&mut self) -> SortOrder {
        let order = self.settings.order.toggled();
        self.set_order(order.is_descending());
        order
    }

    /// Starts `algorithm` with the current order.
    pub async fn start(&mut self, algorithm: Algorithm) -> Result<RunId, ControlError> {
        let request = self.runner.request(algorithm);
        let run = self.runner.start(request).await?;
        Ok(run)
    }

    /// Requests cancellation of the running sort.
    pub fn stop(&self) -> bool {
        self.runner.stop()
    }

    /// Stops and awaits the running sort, if any.
    pub async fn shutdown(&mut self) -> Option<SortOutcome> {
        match self.runner.stop_and_wait().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("sort worker failed during shutdown: {e}");
                None
            }
        }
    }

    fn regenerate(&mut self, size: usize, min: i32, max: i32) -> Result<(), ControlError> {
        match self.rng.as_mut() {
            Some(rng) => self.runner.regenerate_with(rng, size, min, max)?,
            None => self.runner.regenerate(size, min, max)?,
        }
        Ok(())
    }
}
