use crate::{TWITTER_EPOCH, TimeSource};
use core::time::Duration;
use std::{
    sync::{
        Arc, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    thread::{self, JoinHandle},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

/// Millisecond counter shared with the ticker thread.
#[derive(Debug)]
struct TickerShared {
    elapsed_ms: AtomicU64,
    _handle: OnceLock<JoinHandle<()>>,
}

/// A monotonic time source that returns elapsed time since process start,
/// offset from a user-defined epoch.
///
/// Reading the system clock on every call would expose generated timestamps
/// to wall-clock adjustments (NTP corrections, manual changes). This clock
/// instead anchors itself to the wall clock **once**, at construction, and
/// from then on advances a shared counter from a monotonic timer
/// ([`Instant`]) on a background ticker thread. Readings never move
/// backward, so generators built on this clock never observe regression.
///
/// The ticker thread exits on its own once the last clone of the clock is
/// dropped.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    shared: Arc<TickerShared>,
    epoch_offset: u64, // in milliseconds
}

impl Default for MonotonicClock {
    /// Constructs a monotonic clock aligned to [`TWITTER_EPOCH`].
    ///
    /// Panics if the system time is earlier than that epoch.
    fn default() -> Self {
        Self::with_epoch(TWITTER_EPOCH)
    }
}

impl MonotonicClock {
    /// Constructs a monotonic clock using a custom epoch as the origin
    /// (t = 0), specified as a [`Duration`] since 1970-01-01 UTC.
    ///
    /// On each call to [`current_millis`], the clock returns the ticker's
    /// current value plus a fixed offset: the difference between the wall
    /// clock at construction and the given epoch. There is no syscall on
    /// the read path.
    ///
    /// # Panics
    ///
    /// Panics if the current system time is earlier than the given epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use snowmint::{MonotonicClock, TWITTER_EPOCH, TimeSource};
    ///
    /// let clock = MonotonicClock::with_epoch(TWITTER_EPOCH);
    /// let before: u64 = clock.current_millis();
    ///
    /// std::thread::sleep(std::time::Duration::from_millis(5));
    ///
    /// let after: u64 = clock.current_millis();
    /// assert!(after >= before);
    /// ```
    ///
    /// [`current_millis`]: TimeSource::current_millis
    pub fn with_epoch(epoch: Duration) -> Self {
        let start = Instant::now();
        let system_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH");
        let offset = system_now
            .checked_sub(epoch)
            .expect("System clock before configured epoch")
            .as_millis() as u64;

        let shared = Arc::new(TickerShared {
            elapsed_ms: AtomicU64::new(0),
            _handle: OnceLock::new(),
        });

        // The ticker holds only a weak reference so that dropping every
        // clock clone lets the thread observe the upgrade failure and stop.
        let weak = Arc::downgrade(&shared);
        let handle = thread::spawn(move || {
            let mut tick = 0;

            loop {
                let Some(shared) = weak.upgrade() else {
                    break;
                };

                // Absolute target time of the next tick
                let target = start + Duration::from_millis(tick);

                // Sleep if we are early
                let now = Instant::now();
                if now < target {
                    thread::sleep(target - now);
                }

                // After waking, recompute how far we actually are from the
                // start. The store stays monotonic because `elapsed()` is.
                let now_ms = start.elapsed().as_millis() as u64;
                shared.elapsed_ms.store(now_ms, Ordering::Relaxed);

                // Align to the next tick after the current actual time
                tick = now_ms + 1;
            }
        });

        shared
            ._handle
            .set(handle)
            .expect("failed to set ticker thread handle");

        Self {
            shared,
            epoch_offset: offset,
        }
    }
}

impl TimeSource<u64> for MonotonicClock {
    /// Returns the number of milliseconds since the configured epoch, based
    /// on the monotonic time elapsed since construction.
    fn current_millis(&self) -> u64 {
        self.epoch_offset + self.shared.elapsed_ms.load(Ordering::Relaxed)
    }
}
