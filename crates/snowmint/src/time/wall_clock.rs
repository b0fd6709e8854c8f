use crate::{TWITTER_EPOCH, TimeSource};
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A time source that reads the system wall clock on every call.
///
/// This is the classic snowflake arrangement: each reading is
/// `SystemTime::now()` minus the configured epoch, truncated to whole
/// milliseconds. It requires no background thread, but the operating
/// system may step the wall clock backward (NTP corrections, manual
/// changes), in which case a reading can be smaller than an earlier one.
/// The generators in this crate respond to such a reading by reporting
/// [`IdGenStatus::Pending`] until the clock catches back up, so generated
/// IDs still never decrease.
///
/// Prefer [`MonotonicClock`] unless you specifically need timestamps that
/// follow wall-clock adjustments.
///
/// [`IdGenStatus::Pending`]: crate::IdGenStatus::Pending
/// [`MonotonicClock`]: crate::MonotonicClock
#[derive(Clone, Debug)]
pub struct WallClock {
    epoch: Duration,
}

impl Default for WallClock {
    /// Constructs a wall clock aligned to [`TWITTER_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(TWITTER_EPOCH)
    }
}

impl WallClock {
    /// Constructs a wall clock using a custom epoch as the origin (t = 0),
    /// specified as a [`Duration`] since 1970-01-01 UTC.
    pub const fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }
}

impl TimeSource<u64> for WallClock {
    /// Returns the number of milliseconds between the configured epoch and
    /// the current system time. Saturates to zero if the system clock reads
    /// earlier than the epoch.
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .saturating_sub(self.epoch)
            .as_millis() as u64
    }
}
