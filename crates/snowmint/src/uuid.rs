use crate::{RandSource, ThreadRandom};
use core::fmt;

/// A random (version 4) UUID per RFC 4122.
///
/// Unlike the snowflake generators, UUIDs carry no ordering or node
/// information: uniqueness rests entirely on 122 bits of randomness, which
/// makes them the right choice when IDs must not reveal creation order or
/// volume.
///
/// # Example
///
/// ```
/// use snowmint::Uuid;
///
/// let id = Uuid::new_v4();
/// assert_eq!(id.version(), 4);
/// assert_eq!(id.to_string().len(), 36);
/// assert_eq!(id.to_simple().len(), 32);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

impl Uuid {
    /// Generates a random UUID using the built-in [`ThreadRandom`] source.
    #[must_use]
    pub fn new_v4() -> Self {
        Self::from_rand(&ThreadRandom)
    }

    /// Generates a random UUID from a custom [`RandSource`].
    #[must_use]
    pub fn from_rand<R>(rng: &R) -> Self
    where
        R: RandSource<u128>,
    {
        let mut bytes = rng.rand().to_be_bytes();
        // RFC 4122: version 4 in the high nibble of byte 6, variant 10 in
        // the two high bits of byte 8.
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self { bytes }
    }

    /// Returns the raw big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the UUID version field (always `4` for generated values).
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.bytes[6] >> 4
    }

    /// Renders the UUID as 32 lowercase hex digits without hyphens.
    #[must_use]
    pub fn to_simple(&self) -> String {
        let mut out = String::with_capacity(32);
        for b in self.bytes {
            use fmt::Write;
            write!(out, "{b:02x}").expect("writing to a String cannot fail");
        }
        out
    }
}

impl fmt::Display for Uuid {
    /// Renders the canonical hyphenated `8-4-4-4-12` lowercase hex form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.bytes;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15]
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid").field(&self.to_string()).finish()
    }
}
