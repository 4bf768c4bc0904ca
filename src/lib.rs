pub mod collision;
pub mod error;
pub mod geometry;
pub mod math;
pub mod raster;

pub use error::{GeoscanError, Result};
