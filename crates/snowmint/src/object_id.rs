use crate::{RandSource, ThreadRandom};
use core::fmt;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A MongoDB-style 12-byte object identifier.
///
/// The first four bytes hold the creation time in whole seconds since the
/// Unix epoch, big-endian, so ObjectIds sort roughly by creation time; the
/// remaining eight bytes are random. Rendered as 24 lowercase hex digits.
///
/// # Example
///
/// ```
/// use snowmint::ObjectId;
///
/// let id = ObjectId::new();
/// assert_eq!(id.to_string().len(), 24);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    bytes: [u8; 12],
}

impl ObjectId {
    /// Generates an ObjectId stamped with the current system time, using
    /// the built-in [`ThreadRandom`] source.
    #[must_use]
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs() as u32;
        Self::from_parts(secs, &ThreadRandom)
    }

    /// Generates an ObjectId from an explicit timestamp and a custom
    /// [`RandSource`].
    #[must_use]
    pub fn from_parts<R>(secs: u32, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&rng.rand().to_be_bytes());
        Self { bytes }
    }

    /// Returns the raw big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.bytes
    }

    /// Extracts the embedded creation time in seconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    /// Renders 24 lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRand(u64);
    impl RandSource<u64> for FixedRand {
        fn rand(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn timestamp_prefix_round_trips() {
        let id = ObjectId::from_parts(1_725_000_000, &FixedRand(0xdead_beef));
        assert_eq!(id.timestamp_secs(), 1_725_000_000);
    }

    #[test]
    fn display_is_24_hex_digits() {
        let id = ObjectId::from_parts(0, &FixedRand(u64::MAX));
        let text = id.to_string();
        assert_eq!(text, "00000000ffffffffffffffff");
        assert_eq!(ObjectId::new().to_string().len(), 24);
    }

    #[test]
    fn new_stamps_current_time() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as u32;
        let id = ObjectId::new();
        assert!(id.timestamp_secs() >= before);
        assert!(id.timestamp_secs() <= before + 2);
    }

    #[test]
    fn sorts_by_creation_second() {
        let older = ObjectId::from_parts(100, &FixedRand(u64::MAX));
        let newer = ObjectId::from_parts(101, &FixedRand(0));
        assert!(older < newer);
    }
}
