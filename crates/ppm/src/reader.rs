use std::io::{Error, ErrorKind, Read};
use std::path::Path;

use trirast_math::Color;

use crate::Frame;

fn invalid(msg: String) -> Error {
    Error::new(ErrorKind::InvalidData, msg)
}

fn next_value<'a, I: Iterator<Item = &'a str>>(tokens: &mut I, what: &str) -> std::io::Result<i64> {
    let token = tokens
        .next()
        .ok_or_else(|| invalid(format!("unexpected end of file reading {}", what)))?;
    token
        .parse::<i64>()
        .map_err(|_| invalid(format!("bad {}: {:?}", what, token)))
}

fn read_plain<T: Read>(f: &mut T) -> std::io::Result<Frame> {
    let mut text = String::new();
    f.read_to_string(&mut text)?;

    // Anything after a '#' up to the end of the line is a comment.
    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split_whitespace());

    match tokens.next() {
        Some("P3") => (),
        Some(magic) => return Err(invalid(format!("unsupported magic number {:?}", magic))),
        None => return Err(invalid("empty file".to_string())),
    }

    let width = next_value(&mut tokens, "width")?;
    let height = next_value(&mut tokens, "height")?;
    let max_value = next_value(&mut tokens, "max value")?;
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(invalid(format!("bad dimensions {}x{}", width, height)));
    };
    if max_value <= 0 {
        return Err(invalid(format!("bad max value {}", max_value)));
    }
    let scale = max_value as f32;

    let mut frame = Frame::new(width, height, Color::new(0.0, 0.0, 0.0));
    // Rows are stored top-down, so the first row read is y = height - 1.
    for y in (0..height).rev() {
        for x in 0..width {
            let r = next_value(&mut tokens, "red sample")?;
            let g = next_value(&mut tokens, "green sample")?;
            let b = next_value(&mut tokens, "blue sample")?;
            frame.set_pixel(
                x,
                y,
                Color::new(r as f32 / scale, g as f32 / scale, b as f32 / scale),
            );
        }
    }
    Ok(frame)
}

pub fn read_ppm<P: AsRef<Path>>(p: P) -> std::io::Result<Frame> {
    let mut f = std::fs::File::open(p)?;
    read_plain(&mut f)
}

pub fn parse_ppm(data: &[u8]) -> std::io::Result<Frame> {
    let mut c = std::io::Cursor::new(data);
    read_plain(&mut c)
}

pub trait PpmReader: Read {
    fn read_ppm(&mut self) -> std::io::Result<Frame>;
}

impl<T: Read> PpmReader for T {
    fn read_ppm(&mut self) -> std::io::Result<Frame> {
        read_plain(self)
    }
}
