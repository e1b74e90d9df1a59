pub mod gap;
pub mod live;
pub mod recommend;

pub use gap::*;
pub use live::*;
pub use recommend::*;
