mod config;
mod rasterizer;

pub use config::*;
pub use rasterizer::*;
