//! Step pacing for the sort worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Longest uninterrupted sleep inside one pause.
pub const PAUSE_SLICE: Duration = Duration::from_millis(5);

/// Result of one [`Pacer::pause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// The delay is zero, nothing was waited.
    Skipped,
    /// The full delay elapsed.
    Elapsed,
    /// Cancellation cut the wait short.
    Interrupted,
}

/// Shared step delay, adjustable while a run is in progress.
///
/// Clones share the same delay, so the controller can change the speed
/// of a running worker.
#[derive(Debug, Clone, Default)]
pub struct Pacer {
    delay_ms: Arc<AtomicU64>,
}

impl Pacer {
    /// Creates a pacer with the given delay in milliseconds.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms: Arc::new(AtomicU64::new(delay_ms)),
        }
    }

    /// Current delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.load(Ordering::Relaxed)
    }

    /// Current delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    /// Changes the delay; takes effect at the next pause.
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Relaxed);
    }

    /// Blocks the calling (worker) thread for the current delay.
    ///
    /// Sleeps in [`PAUSE_SLICE`] slices and returns early once `cancel`
    /// fires.
    pub fn pause(&self, cancel: &CancellationToken) -> Pause {
        let delay = self.delay();
        if delay.is_zero() {
            return Pause::Skipped;
        }

        let deadline = Instant::now() + delay;
        loop {
            if cancel.is_cancelled() {
                return Pause::Interrupted;
            }
            let now = Instant::now();
            if now >= deadline {
                return Pause::Elapsed;
            }
            std::thread::sleep((deadline - now).min(PAUSE_SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_skips() {
        let pacer = Pacer::new(0);
        assert_eq!(pacer.pause(&CancellationToken::new()), Pause::Skipped);
    }

    #[test]
    fn test_pause_elapses() {
        let pacer = Pacer::new(10);
        let start = Instant::now();
        assert_eq!(pacer.pause(&CancellationToken::new()), Pause::Elapsed);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_cancelled_pause_is_interrupted() {
        let pacer = Pacer::new(10_000);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let start = Instant::now();
        assert_eq!(pacer.pause(&cancel), Pause::Interrupted);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let pacer = Pacer::new(10_000);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            trigger.cancel();
        });
        assert_eq!(pacer.pause(&cancel), Pause::Interrupted);
        handle.join().unwrap();
    }

    #[test]
    fn test_clones_share_delay() {
        let pacer = Pacer::new(50);
        let other = pacer.clone();
        other.set_delay_ms(120);
        assert_eq!(pacer.delay_ms(), 120);
        assert_eq!(pacer.delay(), Duration::from_millis(120));
    }
}
