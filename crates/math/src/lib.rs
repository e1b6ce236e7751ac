mod geometry;
mod vector;

pub use geometry::*;
pub use vector::*;
