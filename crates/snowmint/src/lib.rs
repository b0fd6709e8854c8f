//! Snowflake-style distributed IDs without coordination.
//!
//! A generator instance packs a millisecond timestamp, a caller-assigned
//! node ID, and a per-millisecond sequence counter into a single integer.
//! IDs from one instance are strictly increasing; IDs from instances with
//! distinct node IDs never collide, with no coordination service involved.
//!
//! The crate also ships the two stateless identifier kinds that usually
//! travel with a snowflake generator: random version-4 [`Uuid`]s and
//! MongoDB-style [`ObjectId`]s.
//!
//! ```
//! use snowmint::{LockSnowflakeGenerator, MonotonicClock, SnowflakeMintId};
//!
//! let clock = MonotonicClock::default();
//! let generator = LockSnowflakeGenerator::<SnowflakeMintId, _>::new(0, clock).unwrap();
//!
//! let id = generator.next_id();
//! assert_eq!(id.node_id(), 0);
//!
//! let text = generator.next_id_string();
//! assert!(text.parse::<u64>().unwrap() > id.to_raw());
//! ```

mod error;
mod generator;
mod id;
mod object_id;
mod rand;
#[cfg(feature = "serde")]
pub mod serde;
mod time;
mod uuid;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::object_id::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::uuid::*;
