use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "ppm/triangle.ppm";

/// Largest accepted width or height. A full frame of this size takes
/// about 800 MB.
pub const MAX_DIMENSION: u32 = 8192;

/// Rasterizes the reference triangle into a plain-text PPM image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output path for the ppm file. Missing parent directories are created.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels, at most 8192 [default: scene width]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: Option<u32>,

    /// Image height in pixels, at most 8192 [default: scene height]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: Option<u32>,

    /// Clamp colors to [0, 1] before quantizing.
    #[arg(long)]
    pub clamp: bool,

    /// Spread the pixels over all cores.
    #[arg(long)]
    pub parallel: bool,
}
