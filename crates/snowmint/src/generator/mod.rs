mod basic;
mod interface;
mod lock;
mod status;

pub use basic::*;
pub use interface::*;
pub use lock::*;
pub use status::*;
