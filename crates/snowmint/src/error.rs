use std::sync::{MutexGuard, PoisonError};

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `snowmint` can emit.
///
/// ID generation itself never fails: once a generator is constructed, every
/// call either returns an ID or reports that the caller must wait for the
/// clock. Errors only arise from misconfiguration or from a poisoned lock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The node ID passed to a generator constructor does not fit the ID
    /// layout's node field.
    ///
    /// Node IDs are assigned out of band by the operator; a value outside
    /// the field range would silently alias another node, so it is rejected
    /// up front.
    #[error("node id {node_id} exceeds the layout maximum of {max}")]
    NodeIdOutOfRange { node_id: u64, max: u64 },

    /// The operation failed because another thread panicked while holding
    /// the generator lock.
    #[error("generator lock poisoned")]
    LockPoisoned,
}

// Collapse all poisoned lock errors into `LockPoisoned`.
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
