mod interface;
mod mono_clock;
mod wall_clock;

pub use interface::*;
pub use mono_clock::*;
pub use wall_clock::*;
