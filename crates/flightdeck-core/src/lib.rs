pub mod insights;
pub mod level;
pub mod live;
pub mod reao;
pub mod scoring;

pub use insights::*;
pub use level::*;
pub use live::*;
pub use reao::*;
pub use scoring::*;
