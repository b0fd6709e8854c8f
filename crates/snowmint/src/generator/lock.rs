use crate::{Error, IdGenStatus, Result, SnowflakeGenerator, SnowflakeId, TimeSource, ToU64};
use core::cmp::Ordering;
use std::sync::{Arc, Mutex};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The generator state lives behind an [`Arc<Mutex<_>>`], so clones share
/// one sequence and calls from any number of threads are fully serialized:
/// each generation step runs under the lock from the state read to the
/// state write, which is what makes the per-instance monotonicity guarantee
/// hold under contention.
///
/// ## Recommended When
/// - Multiple threads mint from the same node ID
///
/// ## See Also
/// - [`BasicSnowflakeGenerator`]
///
/// [`BasicSnowflakeGenerator`]: crate::BasicSnowflakeGenerator
#[derive(Clone)]
pub struct LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    state: Arc<Mutex<ID>>,
    time: T,
}

impl<ID, T> LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    /// Creates a new [`LockSnowflakeGenerator`] bound to the given node ID.
    ///
    /// The initial timestamp and sequence are zero; the provided `time`
    /// source is consulted on every subsequent generation call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node field.
    ///
    /// # Example
    /// ```
    /// use snowmint::{LockSnowflakeGenerator, MonotonicClock, SnowflakeMintId};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeMintId, _>::new(0, MonotonicClock::default()).unwrap();
    /// let id = generator.next_id();
    ///
    /// // Out-of-range node IDs are a configuration error.
    /// let err = LockSnowflakeGenerator::<SnowflakeMintId, _>::new(1024, MonotonicClock::default());
    /// assert!(err.is_err());
    /// ```
    pub fn new(node_id: ID::Ty, time: T) -> Result<Self> {
        if node_id > ID::max_node_id() {
            return Err(Error::NodeIdOutOfRange {
                node_id: node_id.to_u64(),
                max: ID::max_node_id().to_u64(),
            });
        }
        Ok(Self::from_components(ID::ZERO, node_id, ID::ZERO, time))
    }

    /// Creates a new generator from explicit component values, without
    /// validating them.
    ///
    /// Primarily useful for restoring state or for driving the generator
    /// from a known starting point in tests. In typical use, prefer
    /// [`Self::new`].
    pub fn from_components(timestamp: ID::Ty, node_id: ID::Ty, sequence: ID::Ty, time: T) -> Self {
        let id = ID::from_components(timestamp, node_id, sequence);
        Self {
            state: Arc::new(Mutex::new(id)),
            time,
        }
    }

    /// Generates the next ID.
    ///
    /// If the sequence for the current millisecond is exhausted, or the
    /// time source reads behind the recorded timestamp, this yields the
    /// thread and retries until the clock advances. The wait is
    /// sub-millisecond in practice.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned. For explicitly fallible behavior,
    /// use [`Self::try_next_id`].
    pub fn next_id(&self) -> ID {
        loop {
            match self.poll_id() {
                IdGenStatus::Ready { id } => break id,
                IdGenStatus::Pending { .. } => std::thread::yield_now(),
            }
        }
    }

    /// Generates the next ID and renders it in decimal.
    ///
    /// Always equal to the decimal string form of what [`Self::next_id`]
    /// would have returned for the same call.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    ///
    /// # Example
    /// ```
    /// use snowmint::{LockSnowflakeGenerator, MonotonicClock, SnowflakeMintId};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeMintId, _>::new(3, MonotonicClock::default()).unwrap();
    /// let text = generator.next_id_string();
    /// assert!(text.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn next_id_string(&self) -> String {
        self.next_id().to_string()
    }

    /// A fallible version of [`Self::next_id`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if another thread panicked while
    /// holding the generator lock.
    pub fn try_next_id(&self) -> Result<ID> {
        loop {
            match self.try_poll_id()? {
                IdGenStatus::Ready { id } => break Ok(id),
                IdGenStatus::Pending { .. } => std::thread::yield_now(),
            }
        }
    }

    /// Attempts to generate the next ID without blocking.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned. For explicitly fallible behavior,
    /// use [`Self::try_poll_id`].
    ///
    /// # Example
    /// ```
    /// use snowmint::{IdGenStatus, LockSnowflakeGenerator, MonotonicClock, SnowflakeMintId};
    ///
    /// let generator =
    ///     LockSnowflakeGenerator::<SnowflakeMintId, _>::new(0, MonotonicClock::default()).unwrap();
    ///
    /// match generator.poll_id() {
    ///     IdGenStatus::Ready { id } => println!("minted: {id}"),
    ///     IdGenStatus::Pending { yield_for } => println!("wait {yield_for} ms"),
    /// }
    /// ```
    pub fn poll_id(&self) -> IdGenStatus<ID> {
        self.try_poll_id().unwrap()
    }

    /// A fallible version of [`Self::poll_id`].
    ///
    /// One generation step: reads the time source, then updates the state
    /// under the lock according to how the reading compares to the recorded
    /// timestamp.
    ///
    /// # Returns
    /// - `Ok(IdGenStatus::Ready { id })`: a new ID is available
    /// - `Ok(IdGenStatus::Pending { yield_for })`: wait for the clock to
    ///   advance by `yield_for` milliseconds
    /// - `Err(e)`: the lock was poisoned
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if another thread panicked while
    /// holding the generator lock.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<IdGenStatus<ID>> {
        let now = self.time.current_millis();
        let mut id = self.state.lock()?;
        let current_ts = id.timestamp();

        let status = match now.cmp(&current_ts) {
            Ordering::Equal => {
                if id.has_sequence_room() {
                    *id = id.increment_sequence();
                    IdGenStatus::Ready { id: *id }
                } else {
                    IdGenStatus::Pending { yield_for: ID::ONE }
                }
            }
            Ordering::Greater => {
                *id = id.rollover_to_timestamp(now);
                IdGenStatus::Ready { id: *id }
            }
            Ordering::Less => {
                // Clock regression: never mint against a stale reading,
                // wait for the clock to catch up instead.
                IdGenStatus::Pending {
                    yield_for: current_ts - now,
                }
            }
        };

        Ok(status)
    }
}

impl<ID, T> SnowflakeGenerator<ID, T> for LockSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    fn new(node_id: ID::Ty, time: T) -> Result<Self> {
        Self::new(node_id, time)
    }

    fn next_id(&self) -> ID {
        self.next_id()
    }

    fn try_next_id(&self) -> Result<ID> {
        self.try_next_id()
    }

    fn poll_id(&self) -> IdGenStatus<ID> {
        self.poll_id()
    }

    fn try_poll_id(&self) -> Result<IdGenStatus<ID>> {
        self.try_poll_id()
    }
}
