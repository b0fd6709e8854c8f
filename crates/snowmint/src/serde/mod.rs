//! `serde(with = ...)` helper modules for snowflake IDs.
//!
//! Two encodings are provided:
//!
//! - [`as_native`]: the raw backing integer (compact, but JavaScript
//!   consumers may lose precision above 2^53)
//! - [`as_decimal`]: the decimal string form, matching
//!   [`next_id_string`](crate::LockSnowflakeGenerator::next_id_string)
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use snowmint::SnowflakeMintId;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "snowmint::serde::as_decimal")]
//!     id: SnowflakeMintId,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a snowflake ID as its native integer representation.
pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SnowflakeId;

    /// Serialize a snowflake ID as its backing integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: SnowflakeId,
        ID::Ty: Serialize,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake ID from its backing integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value sets reserved bits (not a valid ID of this layout)
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: SnowflakeId,
        ID::Ty: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let raw = <ID::Ty>::deserialize(d)?;
        let id = ID::from_raw(raw);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(format!(
                "value {raw} sets reserved bits of the snowflake layout"
            )));
        }
        Ok(id)
    }
}

/// Serialize a snowflake ID as its decimal string form.
pub mod as_decimal {
    use super::{Deserializer, Serializer};
    use crate::SnowflakeId;
    use core::fmt;
    use core::str::FromStr;

    /// Serialize a snowflake ID as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: SnowflakeId,
        S: Serializer,
    {
        s.collect_str(&id.to_raw())
    }

    /// Deserialize a snowflake ID from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a decimal integer of the backing type
    /// - The value sets reserved bits (not a valid ID of this layout)
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: SnowflakeId,
        ID::Ty: FromStr,
        <ID::Ty as FromStr>::Err: fmt::Display,
        D: Deserializer<'de>,
    {
        struct DecimalVisitor<ID>(core::marker::PhantomData<ID>);

        impl<ID> serde::de::Visitor<'_> for DecimalVisitor<ID>
        where
            ID: SnowflakeId,
            ID::Ty: FromStr,
            <ID::Ty as FromStr>::Err: fmt::Display,
        {
            type Value = ID;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string encoding a snowflake id")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let raw = v.parse::<ID::Ty>().map_err(serde::de::Error::custom)?;
                let id = ID::from_raw(raw);
                if !id.is_valid() {
                    return Err(serde::de::Error::custom(format!(
                        "value {v} sets reserved bits of the snowflake layout"
                    )));
                }
                Ok(id)
            }
        }

        d.deserialize_str(DecimalVisitor(core::marker::PhantomData))
    }
}
