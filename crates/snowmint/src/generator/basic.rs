use crate::{Error, IdGenStatus, Result, SnowflakeGenerator, SnowflakeId, TimeSource, ToU64};
use core::{cell::Cell, cmp::Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A non-concurrent Snowflake ID generator suitable for single-threaded
/// environments.
///
/// This generator is lightweight and fast, but **not thread-safe**: the
/// state lives in a [`Cell`] with no lock around it.
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want generation without any locking overhead
///
/// ## See Also
/// - [`LockSnowflakeGenerator`]
///
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
#[derive(Debug)]
pub struct BasicSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    state: Cell<ID>,
    time: T,
}

impl<ID, T> BasicSnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    /// Creates a new [`BasicSnowflakeGenerator`] bound to the given node ID.
    ///
    /// The initial timestamp and sequence are zero; the provided `time`
    /// source is consulted on every subsequent generation call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node field. Node IDs are what keeps concurrently running
    /// generators from colliding, so an aliasing value is rejected rather
    /// than masked.
    ///
    /// # Example
    /// ```
    /// use snowmint::{BasicSnowflakeGenerator, MonotonicClock, SnowflakeMintId};
    ///
    /// let generator =
    ///     BasicSnowflakeGenerator::<SnowflakeMintId, _>::new(0, MonotonicClock::default()).unwrap();
    /// let id = generator.next_id();
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
    /// This constructor is primarily useful for restoring state or for
    /// driving the generator from a known starting point in tests. In
    /// typical use, prefer [`Self::new`].
    pub fn from_components(timestamp: ID::Ty, node_id: ID::Ty, sequence: ID::Ty, time: T) -> Self {
        let id = ID::from_components(timestamp, node_id, sequence);
        Self {
            state: Cell::new(id),
            time,
        }
    }

    /// Generates the next ID.
    ///
    /// If the sequence for the current millisecond is exhausted, or the
    /// time source reads behind the recorded timestamp, this spins -
    /// re-reading the time source - until the clock advances. The wait is
    /// sub-millisecond in practice.
    pub fn next_id(&self) -> ID {
        loop {
            match self.poll_id() {
                IdGenStatus::Ready { id } => break id,
                IdGenStatus::Pending { .. } => core::hint::spin_loop(),
            }
        }
    }

    /// Generates the next ID and renders it in decimal.
    ///
    /// Equivalent to calling [`Self::next_id`] and formatting the result
    /// with [`core::fmt::Display`].
    pub fn next_id_string(&self) -> String {
        self.next_id().to_string()
    }

    /// A fallible version of [`Self::next_id`].
    ///
    /// # Errors
    ///
    /// This generator is infallible after construction; the `Result` exists
    /// for interface parity with [`LockSnowflakeGenerator`].
    ///
    /// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
    pub fn try_next_id(&self) -> Result<ID> {
        Ok(self.next_id())
    }

    /// Attempts to generate the next ID without blocking.
    ///
    /// # Example
    /// ```
    /// use snowmint::{BasicSnowflakeGenerator, IdGenStatus, MonotonicClock, SnowflakeMintId};
    ///
    /// let generator =
    ///     BasicSnowflakeGenerator::<SnowflakeMintId, _>::new(0, MonotonicClock::default()).unwrap();
    ///
    /// let id = loop {
    ///     match generator.poll_id() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn poll_id(&self) -> IdGenStatus<ID> {
        let now = self.time.current_millis();
        let state = self.state.get();
        let current_ts = state.timestamp();

        match now.cmp(&current_ts) {
            Ordering::Equal => {
                if state.has_sequence_room() {
                    let updated = state.increment_sequence();
                    self.state.set(updated);
                    IdGenStatus::Ready { id: updated }
                } else {
                    IdGenStatus::Pending { yield_for: ID::ONE }
                }
            }
            Ordering::Greater => {
                let updated = state.rollover_to_timestamp(now);
                self.state.set(updated);
                IdGenStatus::Ready { id: updated }
            }
            Ordering::Less => Self::cold_clock_behind(now, current_ts),
        }
    }

    /// A fallible version of [`Self::poll_id`]; infallible here, present
    /// for interface parity.
    ///
    /// # Errors
    ///
    /// Never returns an error for this generator.
    pub fn try_poll_id(&self) -> Result<IdGenStatus<ID>> {
        Ok(self.poll_id())
    }

    // The clock reading behind the recorded timestamp is the rare path: a
    // wall clock stepped backward, or a mock driving the edge case. Waiting
    // it out preserves monotonicity.
    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: ID::Ty, current_ts: ID::Ty) -> IdGenStatus<ID> {
        IdGenStatus::Pending {
            yield_for: current_ts - now,
        }
    }
}

impl<ID, T> SnowflakeGenerator<ID, T> for BasicSnowflakeGenerator<ID, T>
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
