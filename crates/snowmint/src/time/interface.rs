use core::time::Duration;

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
///
/// The origin used by the classic Snowflake layout, and the default epoch
/// for [`SnowflakeMintId`] timestamps.
///
/// [`SnowflakeMintId`]: crate::SnowflakeMintId
pub const TWITTER_EPOCH: Duration = Duration::from_millis(1_288_834_974_657);

/// The Unix epoch itself: Thursday, January 1, 1970 00:00:00 UTC
pub const UNIX_EPOCH_MS: Duration = Duration::from_millis(0);

/// A trait for time sources that return milliseconds elapsed since a
/// configured epoch.
///
/// This abstraction allows plugging in a real clock, a monotonic ticker, or
/// a mocked time source in tests.
///
/// The timestamp type `T` is generic (typically `u64`), and the unit is
/// expected to be **milliseconds** relative to a configurable origin.
///
/// # Example
///
/// ```
/// use snowmint::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> T;
}
