pub mod coord;
pub mod error;

pub use coord::{Coordinate, widen};
pub use error::GridError;
