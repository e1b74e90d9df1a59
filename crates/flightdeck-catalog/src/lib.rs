pub mod journeys;
pub mod questions;
pub mod tech;

pub use journeys::*;
pub use questions::*;
pub use tech::*;
