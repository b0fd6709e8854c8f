use core::fmt;
use core::hash::Hash;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A trait for converting numeric field values into a `u64`.
///
/// Used to normalize a layout's scalar type for error reporting and test
/// assertions without caring which backing integer the layout chose.
pub trait ToU64 {
    fn to_u64(self) -> u64;
}

impl ToU64 for u8 {
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl ToU64 for u16 {
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl ToU64 for u32 {
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl ToU64 for u64 {
    fn to_u64(self) -> u64 {
        self
    }
}

/// A trait representing a layout-compatible Snowflake-style identifier.
///
/// A snowflake ID packs three fields into one integer, MSB to LSB: a
/// millisecond timestamp measured from a fixed epoch, a node ID identifying
/// the generator instance, and a per-millisecond sequence counter.
///
/// Types implementing this trait can define custom bit layouts; the
/// generators in this crate work against the trait rather than a concrete
/// layout.
///
/// # Example
///
/// ```
/// use snowmint::{SnowflakeId, SnowflakeMintId};
///
/// let id = SnowflakeMintId::from(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.node_id(), 2);
/// assert_eq!(id.sequence(), 1);
/// ```
pub trait SnowflakeId:
    Sized + Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// Scalar type for all bit fields (typically `u64`)
    type Ty: Copy
        + Clone
        + Default
        + Add<Output = Self::Ty>
        + AddAssign
        + Sub<Output = Self::Ty>
        + SubAssign
        + Ord
        + PartialOrd
        + Eq
        + PartialEq
        + Hash
        + ToU64
        + fmt::Debug
        + fmt::Display;

    /// Zero value (used for resetting the sequence)
    const ZERO: Self::Ty;

    /// One value (used for incrementing the sequence)
    const ONE: Self::Ty;

    /// Returns the timestamp portion of the ID.
    fn timestamp(&self) -> Self::Ty;

    /// Returns the maximum possible value for the timestamp field.
    fn max_timestamp() -> Self::Ty;

    /// Returns the node ID portion of the ID.
    fn node_id(&self) -> Self::Ty;

    /// Returns the maximum possible value for the node ID field.
    fn max_node_id() -> Self::Ty;

    /// Returns the sequence portion of the ID.
    fn sequence(&self) -> Self::Ty;

    /// Returns the maximum possible value for the sequence field.
    fn max_sequence() -> Self::Ty;

    /// Constructs a new ID from its components.
    #[must_use]
    fn from_components(timestamp: Self::Ty, node_id: Self::Ty, sequence: Self::Ty) -> Self;

    /// Converts this type into its raw integer representation
    fn to_raw(&self) -> Self::Ty;

    /// Converts a raw integer into this type
    fn from_raw(raw: Self::Ty) -> Self;

    /// Returns `true` if the ID's internal structure is valid, i.e. any
    /// reserved bits are unset.
    fn is_valid(&self) -> bool;

    /// Returns a normalized version of the ID with reserved bits cleared.
    #[must_use]
    fn into_valid(self) -> Self;

    /// Returns true if the current sequence value can be incremented without
    /// wrapping.
    fn has_sequence_room(&self) -> bool {
        self.sequence() < Self::max_sequence()
    }

    /// Returns the next sequence value.
    fn next_sequence(&self) -> Self::Ty {
        self.sequence() + Self::ONE
    }

    /// Returns a new ID with the sequence incremented.
    #[must_use]
    fn increment_sequence(&self) -> Self {
        Self::from_components(self.timestamp(), self.node_id(), self.next_sequence())
    }

    /// Returns a new ID for a newer timestamp with sequence reset to zero.
    #[must_use]
    fn rollover_to_timestamp(&self, ts: Self::Ty) -> Self {
        Self::from_components(ts, self.node_id(), Self::ZERO)
    }
}
