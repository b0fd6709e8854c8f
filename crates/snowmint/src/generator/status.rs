use crate::SnowflakeId;

/// The result of one non-blocking attempt to generate an ID.
///
/// - [`IdGenStatus::Ready`] carries a newly generated ID.
/// - [`IdGenStatus::Pending`] means the generator cannot mint right now:
///   either the sequence for the current millisecond is exhausted, or the
///   time source read a value behind the last recorded timestamp. Either
///   way the caller should wait roughly `yield_for` milliseconds and poll
///   again.
///
/// Blocking callers can just use `next_id`, which loops on this status
/// internally; `poll_id` exposes it for non-blocking generation loops and
/// custom backoff strategies.
///
/// # Example
///
/// ```
/// use snowmint::{BasicSnowflakeGenerator, IdGenStatus, SnowflakeId, SnowflakeMintId, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1
///     }
/// }
///
/// let generator = BasicSnowflakeGenerator::<SnowflakeMintId, _>::new(0, FixedTime).unwrap();
/// match generator.poll_id() {
///     IdGenStatus::Ready { id } => println!("minted: {id}"),
///     IdGenStatus::Pending { yield_for } => println!("wait {yield_for} ms"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus<T: SnowflakeId> {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated ID.
        id: T,
    },
    /// No ID could be generated for the current tick.
    Pending {
        /// How many milliseconds the clock must advance before a new ID
        /// can be minted.
        yield_for: T::Ty,
    },
}
