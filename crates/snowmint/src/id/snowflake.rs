/// Declares a packed Snowflake ID type from four required components:
/// `reserved`, `timestamp`, `node`, and `sequence`.
///
/// The components are always laid out from **most significant bit (MSB)** to
/// **least significant bit (LSB)** - in that exact order.
///
/// - The first field (`reserved`) occupies the highest bits and is kept
///   zero, so raw values stay representable as a non-negative signed
///   integer of the same width.
/// - The last field (`sequence`) occupies the lowest bits.
/// - The total number of bits **must exactly equal** the size of the backing
///   integer type (`u64`, `u128`, etc.), otherwise the macro triggers a
///   compile-time assertion failure.
///
/// ```text
/// define_snowflake_id!(
///     <TypeName>, <IntegerType>,
///     reserved: <bits>,
///     timestamp: <bits>,
///     node: <bits>,
///     sequence: <bits>
/// );
/// ```
///
/// ## Example
/// ```rust
/// use snowmint::define_snowflake_id;
///
/// define_snowflake_id!(
///     MyId, u64,
///     reserved: 1,
///     timestamp: 41,
///     node: 10,
///     sequence: 12
/// );
///
/// let id = MyId::from(1_725_000_000, 7, 42);
/// assert_eq!(id.timestamp(), 1_725_000_000);
/// assert_eq!(id.node_id(), 7);
/// assert_eq!(id.sequence(), 42);
/// ```
#[macro_export]
macro_rules! define_snowflake_id {
    (
        $(#[$meta:meta])*
        $name:ident, $int:ty,
        reserved: $reserved_bits:expr,
        timestamp: $timestamp_bits:expr,
        node: $node_bits:expr,
        sequence: $sequence_bits:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name {
            id: $int,
        }

        const _: () = {
            // Compile-time check: total bit width _must_ equal the backing
            // type. This is to avoid aliasing surprises.
            assert!(
                $reserved_bits + $timestamp_bits + $node_bits + $sequence_bits == <$int>::BITS,
                "Layout must match underlying type width"
            );
        };

        impl $name {
            pub const RESERVED_BITS: u32 = $reserved_bits;
            pub const TIMESTAMP_BITS: u32 = $timestamp_bits;
            pub const NODE_BITS: u32 = $node_bits;
            pub const SEQUENCE_BITS: u32 = $sequence_bits;

            pub const SEQUENCE_SHIFT: u32 = 0;
            pub const NODE_SHIFT: u32 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;
            pub const TIMESTAMP_SHIFT: u32 = Self::NODE_SHIFT + Self::NODE_BITS;
            pub const RESERVED_SHIFT: u32 = Self::TIMESTAMP_SHIFT + Self::TIMESTAMP_BITS;

            pub const TIMESTAMP_MASK: $int = ((1 << Self::TIMESTAMP_BITS) - 1);
            pub const NODE_MASK: $int = ((1 << Self::NODE_BITS) - 1);
            pub const SEQUENCE_MASK: $int = ((1 << Self::SEQUENCE_BITS) - 1);

            const fn valid_mask() -> $int {
                (Self::TIMESTAMP_MASK << Self::TIMESTAMP_SHIFT)
                    | (Self::NODE_MASK << Self::NODE_SHIFT)
                    | (Self::SEQUENCE_MASK << Self::SEQUENCE_SHIFT)
            }

            #[must_use]
            pub const fn from(timestamp: $int, node_id: $int, sequence: $int) -> Self {
                let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
                let n = (node_id & Self::NODE_MASK) << Self::NODE_SHIFT;
                let s = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
                Self { id: t | n | s }
            }

            /// Extracts the timestamp from the packed ID.
            #[must_use]
            pub const fn timestamp(&self) -> $int {
                (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
            }

            /// Extracts the node ID from the packed ID.
            #[must_use]
            pub const fn node_id(&self) -> $int {
                (self.id >> Self::NODE_SHIFT) & Self::NODE_MASK
            }

            /// Extracts the sequence number from the packed ID.
            #[must_use]
            pub const fn sequence(&self) -> $int {
                (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
            }

            /// Returns the maximum representable timestamp value based on
            /// `Self::TIMESTAMP_BITS`.
            #[must_use]
            pub const fn max_timestamp() -> $int {
                Self::TIMESTAMP_MASK
            }

            /// Returns the maximum representable node ID based on
            /// `Self::NODE_BITS`.
            #[must_use]
            pub const fn max_node_id() -> $int {
                Self::NODE_MASK
            }

            /// Returns the maximum representable sequence value based on
            /// `Self::SEQUENCE_BITS`.
            #[must_use]
            pub const fn max_sequence() -> $int {
                Self::SEQUENCE_MASK
            }

            /// Converts this type into its raw integer representation
            #[must_use]
            pub const fn to_raw(&self) -> $int {
                self.id
            }

            /// Converts a raw integer into this type
            #[must_use]
            pub const fn from_raw(raw: $int) -> Self {
                Self { id: raw }
            }

            /// Returns the ID as a zero-padded decimal string wide enough for
            /// the backing integer, so the textual form sorts like the
            /// numeric one.
            #[must_use]
            pub fn to_padded_string(&self) -> String {
                let mut n = <$int>::MAX;
                let mut digits = 1;
                while n >= 10 {
                    n /= 10;
                    digits += 1;
                }
                format!("{:0width$}", self.id, width = digits)
            }
        }

        impl $crate::SnowflakeId for $name {
            type Ty = $int;

            const ZERO: $int = 0;
            const ONE: $int = 1;

            fn timestamp(&self) -> Self::Ty {
                self.timestamp()
            }

            fn max_timestamp() -> Self::Ty {
                Self::TIMESTAMP_MASK
            }

            fn node_id(&self) -> Self::Ty {
                self.node_id()
            }

            fn max_node_id() -> Self::Ty {
                Self::NODE_MASK
            }

            fn sequence(&self) -> Self::Ty {
                self.sequence()
            }

            fn max_sequence() -> Self::Ty {
                Self::SEQUENCE_MASK
            }

            fn from_components(timestamp: $int, node_id: $int, sequence: $int) -> Self {
                debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
                debug_assert!(node_id <= Self::NODE_MASK, "node_id overflow");
                debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
                Self::from(timestamp, node_id, sequence)
            }

            fn to_raw(&self) -> Self::Ty {
                self.id
            }

            fn from_raw(raw: Self::Ty) -> Self {
                Self { id: raw }
            }

            fn is_valid(&self) -> bool {
                (self.id & !Self::valid_mask()) == 0
            }

            fn into_valid(self) -> Self {
                Self {
                    id: self.id & Self::valid_mask(),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.id)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let full = core::any::type_name::<Self>();
                let name = full.rsplit("::").next().unwrap_or(full);
                f.debug_struct(name)
                    .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
                    .field("timestamp", &self.timestamp())
                    .field("node_id", &self.node_id())
                    .field("sequence", &self.sequence())
                    .finish()
            }
        }
    };
}

define_snowflake_id!(
    /// A 64-bit snowflake ID using the classic layout
    ///
    /// - 1 bit reserved (always zero, keeps the value non-negative as `i64`)
    /// - 41 bits timestamp (ms since [`TWITTER_EPOCH`])
    /// - 10 bits node ID
    /// - 12 bits sequence
    ///
    /// ```text
    ///  Bit Index:  63           63 62            22 21          12 11             0
    ///              +--------------+----------------+--------------+---------------+
    ///  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
    ///              +--------------+----------------+--------------+---------------+
    ///              |<---------- MSB ---------- 64 bits ---------- LSB ----------->|
    /// ```
    /// [`TWITTER_EPOCH`]: crate::TWITTER_EPOCH
    SnowflakeMintId, u64,
    reserved: 1,
    timestamp: 41,
    node: 10,
    sequence: 12
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnowflakeId;

    #[test]
    fn mint_id_fields_and_bounds() {
        let ts = SnowflakeMintId::max_timestamp();
        let node = SnowflakeMintId::max_node_id();
        let seq = SnowflakeMintId::max_sequence();

        let id = SnowflakeMintId::from(ts, node, seq);
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.node_id(), node);
        assert_eq!(id.sequence(), seq);
        assert_eq!(SnowflakeMintId::from_components(ts, node, seq), id);
    }

    #[test]
    fn mint_id_field_widths() {
        assert_eq!(SnowflakeMintId::max_node_id(), 1023);
        assert_eq!(SnowflakeMintId::max_sequence(), 4095);
        assert_eq!(SnowflakeMintId::max_timestamp(), (1 << 41) - 1);
    }

    #[test]
    fn mint_id_low_bit_fields() {
        let id = SnowflakeMintId::from_components(0, 0, 0);
        assert_eq!(id.to_raw(), 0);

        let id = SnowflakeMintId::from_components(1, 1, 1);
        assert_eq!(id.timestamp(), 1);
        assert_eq!(id.node_id(), 1);
        assert_eq!(id.sequence(), 1);
    }

    #[test]
    fn mint_id_compose_matches_manual_packing() {
        // ((ms - epoch) << 22) | (node << 12) | seq, straight from the
        // classic layout.
        let id = SnowflakeMintId::from_components(123_456, 7, 89);
        assert_eq!(id.to_raw(), (123_456u64 << 22) | (7 << 12) | 89);
    }

    #[test]
    fn mint_id_fits_i64() {
        let id = SnowflakeMintId::from_components(
            SnowflakeMintId::max_timestamp(),
            SnowflakeMintId::max_node_id(),
            SnowflakeMintId::max_sequence(),
        );
        assert!(i64::try_from(id.to_raw()).is_ok());
    }

    #[test]
    fn mint_id_display_is_decimal() {
        let id = SnowflakeMintId::from_raw(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.to_padded_string(), format!("{:020}", 42));
    }

    #[test]
    fn mint_id_validity() {
        let id = SnowflakeMintId::from_raw(u64::MAX);
        assert!(!id.is_valid());

        let valid = id.into_valid();
        assert!(valid.is_valid());
        assert_eq!(valid.timestamp(), SnowflakeMintId::max_timestamp());
    }

    #[test]
    #[should_panic(expected = "timestamp overflow")]
    fn mint_id_timestamp_overflow_panics() {
        let ts = SnowflakeMintId::max_timestamp() + 1;
        SnowflakeMintId::from_components(ts, 0, 0);
    }

    #[test]
    #[should_panic(expected = "node_id overflow")]
    fn mint_id_node_overflow_panics() {
        let node = SnowflakeMintId::max_node_id() + 1;
        SnowflakeMintId::from_components(0, node, 0);
    }

    #[test]
    #[should_panic(expected = "sequence overflow")]
    fn mint_id_sequence_overflow_panics() {
        let seq = SnowflakeMintId::max_sequence() + 1;
        SnowflakeMintId::from_components(0, 0, seq);
    }
}
