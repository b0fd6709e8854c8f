use crate::{IdGenStatus, Result, SnowflakeId, TimeSource};

/// A minimal interface for Snowflake-style ID generators.
///
/// The concrete generators ([`BasicSnowflakeGenerator`],
/// [`LockSnowflakeGenerator`]) expose the same methods inherently; this
/// trait exists so that code and tests can be written once against any
/// generator and any [`SnowflakeId`] layout.
///
/// [`BasicSnowflakeGenerator`]: crate::BasicSnowflakeGenerator
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
pub trait SnowflakeGenerator<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource<ID::Ty>,
{
    /// Creates a new generator bound to `node_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeIdOutOfRange`] if `node_id` does not fit the
    /// layout's node field.
    ///
    /// [`Error::NodeIdOutOfRange`]: crate::Error::NodeIdOutOfRange
    fn new(node_id: ID::Ty, time: T) -> Result<Self>
    where
        Self: Sized;

    /// Generates the next ID, waiting out sequence exhaustion or a
    /// backward clock reading by spinning on the time source.
    fn next_id(&self) -> ID;

    /// Generates the next ID and renders it in decimal.
    fn next_id_string(&self) -> String {
        self.next_id().to_string()
    }

    /// A fallible version of [`Self::next_id`].
    ///
    /// # Errors
    ///
    /// May return an error if the underlying implementation uses a lock
    /// and it is poisoned.
    fn try_next_id(&self) -> Result<ID>;

    /// Attempts to generate an ID without blocking.
    fn poll_id(&self) -> IdGenStatus<ID>;

    /// A fallible version of [`Self::poll_id`].
    ///
    /// # Errors
    ///
    /// May return an error if the underlying implementation uses a lock
    /// and it is poisoned.
    fn try_poll_id(&self) -> Result<IdGenStatus<ID>>;
}
