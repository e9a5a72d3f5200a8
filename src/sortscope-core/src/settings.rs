//! Defaults and bounds for the user-adjustable parameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::array::{ArrayModel, MAX_ARRAY_LEN};
use crate::error::SettingsError;
use crate::order::SortOrder;
use crate::runner::StartPolicy;
use crate::widgets::BarScale;

// ============================================================
// BOUNDS
// ============================================================

/// Sizes reachable with the size keys.
pub const SIZE_RANGE: RangeInclusive<usize> = 10..=100;

/// Sizes accepted by direct entry.
pub const SIZE_ENTRY_RANGE: RangeInclusive<usize> = 1..=MAX_ARRAY_LEN;

/// Initial array length.
pub const DEFAULT_SIZE: usize = 50;

/// Size change per key press.
pub const SIZE_STEP: usize = 5;

/// Delays reachable with the speed keys, in milliseconds.
pub const SPEED_RANGE: RangeInclusive<u64> = 10..=200;

/// Initial step delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Delay change per key press, in milliseconds.
pub const SPEED_STEP: u64 = 10;

/// Longest delay accepted from the command line or config file.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Initial lower bound of generated values.
pub const DEFAULT_MIN: i32 = 50;

/// Initial upper bound of generated values.
pub const DEFAULT_MAX: i32 = 400;

/// User-adjustable parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Array length.
    pub size: usize,
    /// Lower bound of generated values.
    pub min: i32,
    /// Upper bound of generated values.
    pub max: i32,
    /// Pause after each step, in milliseconds.
    pub delay_ms: u64,
    /// Sort direction.
    pub order: SortOrder,
    /// Bar scaling mode.
    pub scale: BarScale,
    /// Behavior of a start while a sort runs.
    pub start_policy: StartPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            delay_ms: DEFAULT_DELAY_MS,
            order: SortOrder::default(),
            scale: BarScale::default(),
            start_policy: StartPolicy::default(),
        }
    }
}

impl Settings {
    /// Checks that an array can be generated from these settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        ArrayModel::validate(self.size, self.min, self.max)?;
        self.validate_delay()
    }

    /// Checks only the step delay, for runs that bring their own array.
    pub fn validate_delay(&self) -> Result<(), SettingsError> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(SettingsError::DelayTooLong {
                delay_ms: self.delay_ms,
                max: MAX_DELAY_MS,
            });
        }
        Ok(())
    }

    /// Size after one press of the grow key.
    pub fn grown_size(&self) -> usize {
        step_up(self.size, SIZE_STEP, SIZE_RANGE)
    }

    /// Size after one press of the shrink key.
    pub fn shrunk_size(&self) -> usize {
        step_down(self.size, SIZE_STEP, SIZE_RANGE)
    }

    /// Delay after one press of the slower key.
    pub fn slower_delay(&self) -> u64 {
        step_up(self.delay_ms, SPEED_STEP, SPEED_RANGE)
    }

    /// Delay after one press of the faster key.
    pub fn faster_delay(&self) -> u64 {
        step_down(self.delay_ms, SPEED_STEP, SPEED_RANGE)
    }
}

/// Adds `step`, snapping into `range`. Values below the range jump to its start.
fn step_up<T>(value: T, step: T, range: RangeInclusive<T>) -> T
where
    T: Copy + Ord + std::ops::Add<Output = T>,
{
    let (lo, hi) = range.into_inner();
    if value < lo { lo } else { (value + step).min(hi) }
}

/// Subtracts `step`, snapping into `range`. Values above the range jump to its end.
fn step_down<T>(value: T, step: T, range: RangeInclusive<T>) -> T
where
    T: Copy + Ord + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    let (lo, hi) = range.into_inner();
    if value > hi {
        hi
    } else if value < lo + step {
        lo
    } else {
        value - step
    }
}
