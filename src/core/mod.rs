pub mod config;
pub mod constants;
pub mod geometry;
pub mod level;

pub use config::*;
pub use geometry::*;
pub use level::*;
