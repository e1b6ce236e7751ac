//! Frame buffer plus reading and writing of plain-text (`P3`) PPM images.

mod frame;
mod reader;
mod writer;

pub use frame::*;
pub use reader::*;
pub use writer::*;
