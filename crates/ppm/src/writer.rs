use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Frame;

/// Maximum channel value written in the PPM header.
pub const MAX_VALUE: u32 = 255;

/// How a floating point channel is turned into an integer sample.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Quantize {
    /// `(c * 255) as i32`. Truncates toward zero and does no clamping, so a
    /// color outside `[0, 1]` produces a sample outside `[0, 255]`.
    #[default]
    Truncate,
    /// Clamp to `[0, 1]` before truncating.
    Clamp,
}

impl Quantize {
    #[inline]
    pub fn channel(self, c: f32) -> i32 {
        let c = match self {
            Quantize::Truncate => c,
            Quantize::Clamp => c.clamp(0.0, 1.0),
        };
        (c * MAX_VALUE as f32) as i32
    }
}

fn write_plain<T: Write>(f: &mut T, frame: &Frame, quantize: Quantize) -> std::io::Result<()> {
    writeln!(f, "P3 {} {} {}", frame.width(), frame.height(), MAX_VALUE)?;

    // PPM rows run top to bottom, while y grows upward in the frame.
    for y in (0..frame.height()).rev() {
        for x in 0..frame.width() {
            let c = frame.get_pixel(x, y);
            writeln!(
                f,
                "{} {} {}",
                quantize.channel(c.x),
                quantize.channel(c.y),
                quantize.channel(c.z)
            )?;
        }
    }
    Ok(())
}

pub fn write_ppm<T: Write>(f: &mut T, frame: &Frame, quantize: Quantize) -> std::io::Result<()> {
    write_plain(f, frame, quantize)
}

/// Writes `frame` to a new file at `p`, replacing any existing file.
pub fn save_ppm<P: AsRef<Path>>(p: P, frame: &Frame, quantize: Quantize) -> std::io::Result<()> {
    let p = p.as_ref();
    log::debug!(
        "writing {}x{} frame to {}",
        frame.width(),
        frame.height(),
        p.display()
    );
    let mut f = BufWriter::new(File::create(p)?);
    write_plain(&mut f, frame, quantize)?;
    f.flush()
}

pub trait PpmWriter: Write {
    fn write_ppm(&mut self, frame: &Frame, quantize: Quantize) -> std::io::Result<()>;
}

impl<T: Write> PpmWriter for T {
    fn write_ppm(&mut self, frame: &Frame, quantize: Quantize) -> std::io::Result<()> {
        write_plain(self, frame, quantize)
    }
}
